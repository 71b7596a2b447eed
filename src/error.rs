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

//! Media service errors.
//!
//! Every failure of a [`crate::service::MediaService`] is a transient,
//! non-fatal condition from the point of view of the controllers: it is
//! logged and the user may retry by continuing to interact. Cancellation is
//! not an error and has no variant here.

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ServiceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("background task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Task(e.to_string())
    }
}
