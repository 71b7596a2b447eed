// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application (media types,
//! collection statuses, search suggestions and media details) together with
//! their wire representations used by the remote media service.

pub(crate) mod collection;
pub(crate) mod search;
pub(crate) mod status;

use serde::{Deserialize, Serialize};

pub(crate) use collection::{CollectionEntry, CollectionFilter};
pub(crate) use search::SearchResult;
pub(crate) use status::{CollectionStatus, StatusUpdate, TrackedStatus, VerbPair};

/// The kind of media an item represents.
///
/// The wire names follow the backend `Media.MediaType` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum MediaType {
    #[serde(rename = "BOOKS", alias = "BOOK")]
    Book,
    #[serde(rename = "MOVIE", alias = "MOVIES")]
    Movie,
    #[serde(rename = "MUSIC")]
    Music,
    #[serde(rename = "TV", alias = "TV_SHOW")]
    TvShow,
}

impl MediaType {
    /// Parses a media type tag, accepting both the wire names and the
    /// lower-cased category tags used in navigation.
    pub(crate) fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "book" | "books" => Some(Self::Book),
            "movie" | "movies" => Some(Self::Movie),
            "music" => Some(Self::Music),
            "tv" | "tv_show" | "tvshow" | "tvshows" => Some(Self::TvShow),
            _ => None,
        }
    }

    /// The backend `Media.MediaType` name.
    pub(crate) fn wire_name(self) -> &'static str {
        match self {
            Self::Book => "BOOKS",
            Self::Movie => "MOVIE",
            Self::Music => "MUSIC",
            Self::TvShow => "TV",
        }
    }

    /// The lower-cased tag used as a navigation category.
    pub(crate) fn category(self) -> &'static str {
        match self {
            Self::Book => "books",
            Self::Movie => "movie",
            Self::Music => "music",
            Self::TvShow => "tv",
        }
    }

    /// The verb pair used to label the planning and in-progress statuses.
    pub(crate) fn verbs(self) -> VerbPair {
        match self {
            Self::Book => VerbPair::new("Read", "Reading"),
            Self::Movie | Self::TvShow => VerbPair::new("Watch", "Watching"),
            Self::Music => VerbPair::new("Listen", "Listening"),
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::Movie => "Movie",
            Self::Music => "Music",
            Self::TvShow => "TV Show",
        }
    }
}

/// Identifier as it appears on the wire, either a string or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

/// A full media record as returned by the media-by-id endpoint.
///
/// Every field is optional on the wire; the type-specific fields (authors,
/// director, artists and so on) are only present for the relevant media
/// type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct MediaDetail {
    #[serde(rename = "id", deserialize_with = "de_raw_id")]
    primary_id: Option<String>,
    #[serde(rename = "mediaId", deserialize_with = "de_raw_id")]
    alternate_id: Option<String>,
    #[serde(rename = "type")]
    pub(crate) type_tag: Option<String>,
    pub(crate) title: String,
    pub(crate) release_date: Option<String>,
    pub(crate) authors: Vec<String>,
    pub(crate) director: Option<String>,
    pub(crate) artists: Vec<String>,
    pub(crate) cast: Vec<String>,
    pub(crate) genres: Vec<String>,
    pub(crate) description: Option<String>,
    pub(crate) runtime: Option<String>,
    pub(crate) studio: Option<String>,
    pub(crate) publisher: Option<String>,
    pub(crate) page_count: Option<u32>,
    pub(crate) isbn: Option<String>,
    pub(crate) poster_url: Option<String>,
    pub(crate) backdrop_url: Option<String>,
    pub(crate) rating: Option<f32>,
}

fn de_raw_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(RawId::into_string))
}

impl MediaDetail {
    /// The media identifier, preferring `id` and falling back to `mediaId`.
    pub(crate) fn media_id(&self) -> Option<&str> {
        self.primary_id
            .as_deref()
            .or(self.alternate_id.as_deref())
            .filter(|id| !id.is_empty())
    }

    pub(crate) fn media_type(&self) -> Option<MediaType> {
        self.type_tag.as_deref().and_then(MediaType::parse)
    }

    /// The people credited for the item, whichever field applies to its type.
    pub(crate) fn creators(&self) -> Vec<String> {
        if !self.authors.is_empty() {
            return self.authors.clone();
        }
        if !self.artists.is_empty() {
            return self.artists.clone();
        }
        self.director.iter().cloned().collect()
    }
}

/// A loaded media detail view: the record plus the user's current status.
#[derive(Debug, Clone)]
pub(crate) struct MediaPage {
    /// The id the page was requested with, used when the record itself
    /// carries none.
    pub(crate) requested_id: String,
    /// The media type named by the navigation route, if any.
    pub(crate) route_type: Option<MediaType>,
    pub(crate) detail: MediaDetail,
    pub(crate) status: CollectionStatus,
}

impl MediaPage {
    pub(crate) fn media_id(&self) -> Option<&str> {
        self.detail
            .media_id()
            .or(Some(self.requested_id.as_str()).filter(|id| !id.is_empty()))
    }

    /// The record's own type, then the type the page was opened as.
    pub(crate) fn media_type(&self) -> MediaType {
        self.detail
            .media_type()
            .or(self.route_type)
            .unwrap_or(MediaType::Movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_parses_wire_names_and_categories() {
        assert_eq!(MediaType::parse("BOOKS"), Some(MediaType::Book));
        assert_eq!(MediaType::parse("movie"), Some(MediaType::Movie));
        assert_eq!(MediaType::parse("tv"), Some(MediaType::TvShow));
        assert_eq!(MediaType::parse("Music"), Some(MediaType::Music));
        assert_eq!(MediaType::parse("podcast"), None);
    }

    #[test]
    fn detail_prefers_id_over_media_id() {
        let detail: MediaDetail =
            serde_json::from_str(r#"{"id": 42, "mediaId": "m-1", "title": "Dune"}"#).unwrap();
        assert_eq!(detail.media_id(), Some("42"));

        let detail: MediaDetail =
            serde_json::from_str(r#"{"mediaId": "book-placeholder-id", "type": "BOOKS"}"#)
                .unwrap();
        assert_eq!(detail.media_id(), Some("book-placeholder-id"));
        assert_eq!(detail.media_type(), Some(MediaType::Book));
    }

    #[test]
    fn detail_tolerates_null_and_missing_fields() {
        let detail: MediaDetail =
            serde_json::from_str(r#"{"id": null, "title": "Spirited Away", "genres": ["Animation"]}"#)
                .unwrap();
        assert_eq!(detail.media_id(), None);
        assert_eq!(detail.genres, vec!["Animation".to_string()]);
        assert!(detail.creators().is_empty());
    }

    #[test]
    fn page_falls_back_to_the_requested_id() {
        let detail: MediaDetail = serde_json::from_str(r#"{"title": "Untitled"}"#).unwrap();
        let page = MediaPage {
            requested_id: "placeholder-id".to_string(),
            route_type: None,
            detail,
            status: CollectionStatus::NotAdded,
        };
        assert_eq!(page.media_id(), Some("placeholder-id"));
        assert_eq!(page.media_type(), MediaType::Movie);
    }

    #[test]
    fn untyped_record_takes_the_route_type() {
        let untyped: MediaDetail = serde_json::from_str(r#"{"id": "book-x"}"#).unwrap();
        let page = MediaPage {
            requested_id: "book-x".to_string(),
            route_type: MediaType::parse("books"),
            detail: untyped,
            status: CollectionStatus::NotAdded,
        };
        assert_eq!(page.media_type(), MediaType::Book);
        assert_eq!(page.media_type().verbs(), VerbPair::new("Read", "Reading"));

        let typed: MediaDetail =
            serde_json::from_str(r#"{"id": "m-1", "type": "MUSIC"}"#).unwrap();
        let page = MediaPage {
            requested_id: "m-1".to_string(),
            route_type: Some(MediaType::Book),
            detail: typed,
            status: CollectionStatus::NotAdded,
        };
        assert_eq!(page.media_type(), MediaType::Music);
    }

    #[test]
    fn categories_parse_back_to_their_type() {
        for media_type in [MediaType::Book, MediaType::Movie, MediaType::Music, MediaType::TvShow] {
            assert_eq!(MediaType::parse(media_type.category()), Some(media_type));
            assert_eq!(MediaType::parse(media_type.wire_name()), Some(media_type));
        }
    }
}
