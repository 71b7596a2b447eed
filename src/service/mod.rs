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

//! The remote media service.
//!
//! Controllers talk to the media service only through the [`MediaService`]
//! trait, so they behave identically whether the application runs against
//! the HTTP backend ([`http::HttpMediaService`]) or the offline catalog
//! ([`local::LocalMediaService`]).

pub(crate) mod http;
pub(crate) mod local;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::AppConfig,
    error::ServiceError,
    model::{
        CollectionEntry, CollectionFilter, MediaDetail, SearchResult, StatusUpdate, TrackedStatus,
    },
};

#[async_trait]
pub(crate) trait MediaService: Send + Sync {
    /// Looks up at most five media items matching `query`, ordered by title.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ServiceError>;

    /// Fetches a single media record, `None` if it does not exist.
    async fn fetch_media(&self, media_id: &str) -> Result<Option<MediaDetail>, ServiceError>;

    /// Fetches the user's stored status for a media item, `None` if the item
    /// is not in the user's collection.
    async fn fetch_status(
        &self,
        user_id: &str,
        media_id: &str,
    ) -> Result<Option<TrackedStatus>, ServiceError>;

    /// Creates or replaces the user's status for a media item.
    async fn upsert_status(&self, update: &StatusUpdate) -> Result<(), ServiceError>;

    /// Removes a media item from the user's collection. Removing an item that
    /// is not in the collection succeeds.
    async fn remove_status(&self, user_id: &str, media_id: &str) -> Result<(), ServiceError>;

    /// Lists one page of the user's collection, most recently updated first.
    async fn list_collection(
        &self,
        user_id: &str,
        filter: &CollectionFilter,
    ) -> Result<Vec<CollectionEntry>, ServiceError>;
}

/// Builds the media service selected by the configuration.
pub(crate) fn connect(config: &AppConfig) -> anyhow::Result<Arc<dyn MediaService>> {
    if config.offline {
        let service = local::LocalMediaService::open(&config.database_file)?;
        tracing::info!(database = %config.database_file, "using offline catalog");
        Ok(Arc::new(service))
    } else {
        let base_url = config.api_base_url();
        tracing::info!(%base_url, "using remote media service");
        Ok(Arc::new(http::HttpMediaService::new(&base_url)?))
    }
}
