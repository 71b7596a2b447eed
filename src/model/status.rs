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

//! Collection status of a media item.
//!
//! A media item is always in exactly one of four states. Only three of those
//! states exist as rows in the remote store: "not added" is the absence of a
//! row, so it has no wire representation and can never be upserted.

use serde::{Deserialize, Serialize};

use crate::model::MediaType;

/// The collection status shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) enum CollectionStatus {
    #[default]
    NotAdded,
    Planning,
    InProgress,
    Completed,
}

impl CollectionStatus {
    /// Menu order, top to bottom.
    pub(crate) const MENU: [CollectionStatus; 4] = [
        CollectionStatus::Completed,
        CollectionStatus::Planning,
        CollectionStatus::InProgress,
        CollectionStatus::NotAdded,
    ];

    pub(crate) fn label(self, verbs: &VerbPair) -> String {
        match self {
            Self::NotAdded => "Not Added".to_string(),
            Self::Planning => format!("Planning to {}", verbs.verb),
            Self::InProgress => verbs.progressive.clone(),
            Self::Completed => "Completed".to_string(),
        }
    }

    /// The persisted form of this status, `None` for [`CollectionStatus::NotAdded`].
    pub(crate) fn tracked(self) -> Option<TrackedStatus> {
        match self {
            Self::NotAdded => None,
            Self::Planning => Some(TrackedStatus::PlanToWatch),
            Self::InProgress => Some(TrackedStatus::Watching),
            Self::Completed => Some(TrackedStatus::Completed),
        }
    }

    /// Interprets a server-provided status, defaulting to
    /// [`CollectionStatus::NotAdded`] for anything unrecognised.
    pub(crate) fn from_wire(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::NotAdded;
        };

        match value.trim().to_ascii_uppercase().replace(' ', "_").as_str() {
            "PLAN_TO_WATCH" | "PLANNING" | "PLAN_TO_READ" | "PLAN_TO_LISTEN" => Self::Planning,
            "WATCHING" | "IN_PROGRESS" | "READING" | "LISTENING" => Self::InProgress,
            "COMPLETED" => Self::Completed,
            _ => Self::NotAdded,
        }
    }
}

impl From<Option<TrackedStatus>> for CollectionStatus {
    fn from(status: Option<TrackedStatus>) -> Self {
        match status {
            None => Self::NotAdded,
            Some(TrackedStatus::PlanToWatch) => Self::Planning,
            Some(TrackedStatus::Watching) => Self::InProgress,
            Some(TrackedStatus::Completed) => Self::Completed,
        }
    }
}

/// A status that is stored as a row in the remote store.
///
/// The wire names follow the backend `UserMedia.Status` enumeration, which
/// uses the same vocabulary for every media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum TrackedStatus {
    PlanToWatch,
    Watching,
    Completed,
}

impl TrackedStatus {
    pub(crate) fn wire_name(self) -> &'static str {
        match self {
            Self::PlanToWatch => "PLAN_TO_WATCH",
            Self::Watching => "WATCHING",
            Self::Completed => "COMPLETED",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        CollectionStatus::from_wire(Some(value)).tracked()
    }
}

/// The verbs used to build the "Planning to X" and "Xing" labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VerbPair {
    pub(crate) verb: String,
    pub(crate) progressive: String,
}

impl VerbPair {
    pub(crate) fn new(verb: &str, progressive: &str) -> Self {
        Self {
            verb: verb.to_string(),
            progressive: progressive.to_string(),
        }
    }
}

impl Default for VerbPair {
    fn default() -> Self {
        Self::new("Watch", "Watching")
    }
}

/// Body of a status upsert request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusUpdate {
    pub(crate) user_id: String,
    pub(crate) media_id: String,
    pub(crate) media_type: MediaType,
    pub(crate) status: TrackedStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_the_verb_pair() {
        let verbs = VerbPair::new("Read", "Reading");
        let labels: Vec<String> = CollectionStatus::MENU.iter().map(|s| s.label(&verbs)).collect();
        assert_eq!(labels, vec!["Completed", "Planning to Read", "Reading", "Not Added"]);
    }

    #[test]
    fn not_added_has_no_persisted_form() {
        assert_eq!(CollectionStatus::NotAdded.tracked(), None);
        assert_eq!(CollectionStatus::Completed.tracked(), Some(TrackedStatus::Completed));
        assert_eq!(CollectionStatus::from(None), CollectionStatus::NotAdded);
    }

    #[test]
    fn unknown_wire_status_defaults_to_not_added() {
        assert_eq!(CollectionStatus::from_wire(Some("WATCHING")), CollectionStatus::InProgress);
        assert_eq!(CollectionStatus::from_wire(Some("plan to watch")), CollectionStatus::Planning);
        assert_eq!(CollectionStatus::from_wire(Some("DROPPED")), CollectionStatus::NotAdded);
        assert_eq!(CollectionStatus::from_wire(None), CollectionStatus::NotAdded);
    }

    #[test]
    fn status_update_serializes_with_backend_names() {
        let update = StatusUpdate {
            user_id: "u-1".to_string(),
            media_id: "m-1".to_string(),
            media_type: MediaType::TvShow,
            status: TrackedStatus::PlanToWatch,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": "u-1",
                "mediaId": "m-1",
                "mediaType": "TV",
                "status": "PLAN_TO_WATCH",
            })
        );
    }
}
