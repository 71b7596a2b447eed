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

//! HTTP client for the media backend.
//!
//! # Endpoints
//!
//! * `GET  /media/search?q=..&size=5&sort=title,asc` - search suggestions.
//! * `GET  /media/{id}` - a single media record.
//! * `GET  /usermedia?status=..&type=..&page=..&size=..&sort=..` - the
//!   caller's collection.
//! * `GET  /usermedia/{mediaId}` - the caller's status for an item.
//! * `PUT  /usermedia/{mediaId}` - upsert the caller's status.
//! * `DELETE /usermedia/{mediaId}` - remove the item from the collection.
//!
//! The `/usermedia` endpoints identify the user with the `X-User-Id` header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::ServiceError,
    model::{
        CollectionEntry, CollectionFilter, MediaDetail, SearchResult, StatusUpdate, TrackedStatus,
        collection::{COLLECTION_SORT, CollectionBody},
        search::{MAX_SUGGESTIONS, parse_suggestions},
    },
    service::MediaService,
};

const USER_ID_HEADER: &str = "X-User-Id";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const SEARCH_SORT: &str = "title,asc";

pub(crate) struct HttpMediaService {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct StatusBody {
    status: Option<String>,
}

impl HttpMediaService {
    pub(crate) fn new(base_url: &str) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .user_agent(concat!("mediashelf/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_media_url(&self, media_id: &str) -> String {
        self.url(&format!("/usermedia/{}", media_id))
    }
}

/// Maps a non-success status to an error, passing successful responses
/// through.
fn ensure_success(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ServiceError::Status(status.as_u16()))
    }
}

#[async_trait]
impl MediaService for HttpMediaService {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ServiceError> {
        let url = self.url("/media/search");
        tracing::debug!(%url, query, "searching media");

        let size = MAX_SUGGESTIONS.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("size", size.as_str()), ("sort", SEARCH_SORT)])
            .send()
            .await?;

        let body: Value = ensure_success(response)?.json().await?;
        Ok(parse_suggestions(&body))
    }

    async fn fetch_media(&self, media_id: &str) -> Result<Option<MediaDetail>, ServiceError> {
        let url = self.url(&format!("/media/{}", media_id));
        tracing::debug!(%url, "fetching media");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let detail: MediaDetail = ensure_success(response)?.json().await?;
        Ok(Some(detail))
    }

    async fn fetch_status(
        &self,
        user_id: &str,
        media_id: &str,
    ) -> Result<Option<TrackedStatus>, ServiceError> {
        let response = self
            .client
            .get(self.user_media_url(media_id))
            .header(USER_ID_HEADER, user_id)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: StatusBody = ensure_success(response)?.json().await?;
        Ok(body.status.as_deref().and_then(TrackedStatus::parse))
    }

    async fn upsert_status(&self, update: &StatusUpdate) -> Result<(), ServiceError> {
        tracing::debug!(media_id = %update.media_id, status = update.status.wire_name(), "upserting status");

        let response = self
            .client
            .put(self.user_media_url(&update.media_id))
            .header(USER_ID_HEADER, &update.user_id)
            .json(update)
            .send()
            .await?;

        ensure_success(response)?;
        Ok(())
    }

    async fn remove_status(&self, user_id: &str, media_id: &str) -> Result<(), ServiceError> {
        tracing::debug!(media_id, "removing status");

        let response = self
            .client
            .delete(self.user_media_url(media_id))
            .header(USER_ID_HEADER, user_id)
            .send()
            .await?;

        // Already absent from the collection
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        ensure_success(response)?;
        Ok(())
    }

    async fn list_collection(
        &self,
        user_id: &str,
        filter: &CollectionFilter,
    ) -> Result<Vec<CollectionEntry>, ServiceError> {
        let url = self.url("/usermedia");
        tracing::debug!(%url, ?filter, "listing collection");

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = filter.status {
            query.push(("status", status.wire_name().to_string()));
        }
        if let Some(media_type) = filter.media_type {
            query.push(("type", media_type.wire_name().to_string()));
        }
        query.push(("page", filter.page.to_string()));
        query.push(("size", filter.size.to_string()));
        query.push(("sort", COLLECTION_SORT.to_string()));

        let response = self
            .client
            .get(&url)
            .header(USER_ID_HEADER, user_id)
            .query(&query)
            .send()
            .await?;

        let body: CollectionBody = ensure_success(response)?.json().await?;
        Ok(body.into_entries())
    }
}
