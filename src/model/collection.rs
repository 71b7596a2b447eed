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

//! The user's collection: the items that have a stored status.
//!
//! Listings are filtered by status and media type and paged, newest update
//! first.

use serde::Deserialize;

use crate::model::{MediaType, RawId, TrackedStatus};

/// Default number of entries per collection page.
pub(crate) const COLLECTION_PAGE_SIZE: u32 = 10;

/// Sort order requested from the backend.
pub(crate) const COLLECTION_SORT: &str = "updatedAt,desc";

/// Which part of the collection to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CollectionFilter {
    pub(crate) status: Option<TrackedStatus>,
    pub(crate) media_type: Option<MediaType>,
    /// Zero based.
    pub(crate) page: u32,
    pub(crate) size: u32,
}

impl Default for CollectionFilter {
    fn default() -> Self {
        Self {
            status: None,
            media_type: None,
            page: 0,
            size: COLLECTION_PAGE_SIZE,
        }
    }
}

impl CollectionFilter {
    pub(crate) fn next_page(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    pub(crate) fn previous_page(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self
        }
    }

    /// Row offset of the first entry of the page.
    pub(crate) fn offset(&self) -> u32 {
        self.page.saturating_mul(self.size)
    }

    /// A short description such as `Completed books, page 2`.
    pub(crate) fn describe(&self) -> String {
        let status = match self.status {
            Some(TrackedStatus::PlanToWatch) => "Planned",
            Some(TrackedStatus::Watching) => "In progress",
            Some(TrackedStatus::Completed) => "Completed",
            None => "All",
        };
        let kind = match self.media_type {
            Some(MediaType::Book) => "books",
            Some(MediaType::Movie) => "movies",
            Some(MediaType::Music) => "music",
            Some(MediaType::TvShow) => "TV shows",
            None => "items",
        };
        format!("{} {}, page {}", status, kind, self.page + 1)
    }
}

/// One item in the user's collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CollectionEntry {
    #[serde(deserialize_with = "de_media_id")]
    pub(crate) media_id: String,
    pub(crate) status: TrackedStatus,
    #[serde(default)]
    pub(crate) media_type: Option<MediaType>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) updated_at: Option<String>,
}

fn de_media_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

impl CollectionEntry {
    /// The title, or the media id when the listing carries no title.
    pub(crate) fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.media_id)
    }
}

/// A collection listing is either a bare array or a page envelope.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum CollectionBody {
    List(Vec<CollectionEntry>),
    Page { content: Vec<CollectionEntry> },
}

impl CollectionBody {
    pub(crate) fn into_entries(self) -> Vec<CollectionEntry> {
        match self {
            Self::List(entries) | Self::Page { content: entries } => entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_never_goes_below_the_first_page() {
        let filter = CollectionFilter::default();
        assert_eq!(filter.previous_page().page, 0);
        assert_eq!(filter.next_page().next_page().offset(), 2 * COLLECTION_PAGE_SIZE);
    }

    #[test]
    fn describes_the_filter() {
        let filter = CollectionFilter {
            status: Some(TrackedStatus::Completed),
            media_type: Some(MediaType::Book),
            page: 1,
            ..CollectionFilter::default()
        };
        assert_eq!(filter.describe(), "Completed books, page 2");
        assert_eq!(CollectionFilter::default().describe(), "All items, page 1");
    }

    #[test]
    fn parses_bare_and_paged_listings() {
        let bare: CollectionBody = serde_json::from_str(
            r#"[{"mediaId": "book-dune", "status": "WATCHING", "rating": 4}]"#,
        )
        .unwrap();
        let entries = bare.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, TrackedStatus::Watching);
        assert_eq!(entries[0].display_title(), "book-dune");

        let paged: CollectionBody = serde_json::from_str(
            r#"{"content": [{"mediaId": 7, "status": "COMPLETED", "mediaType": "TV", "title": "Twin Peaks"}]}"#,
        )
        .unwrap();
        let entries = paged.into_entries();
        assert_eq!(entries[0].media_id, "7");
        assert_eq!(entries[0].media_type, Some(MediaType::TvShow));
        assert_eq!(entries[0].display_title(), "Twin Peaks");
    }
}
