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

//! Offline media service backed by the local SQLite catalog.
//!
//! Database calls are blocking, so each one runs on the blocking thread pool
//! while holding the shared connection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;

use crate::{
    db,
    error::ServiceError,
    model::{
        CollectionEntry, CollectionFilter, MediaDetail, SearchResult, StatusUpdate, TrackedStatus,
    },
    service::MediaService,
};

pub(crate) struct LocalMediaService {
    conn: Arc<Mutex<Connection>>,
}

impl LocalMediaService {
    pub(crate) fn open(path: &str) -> anyhow::Result<Self> {
        let conn = db::init_db(path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, ServiceError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| ServiceError::Task("database connection poisoned".to_string()))?;
            f(&conn)
        })
        .await?
    }
}

#[async_trait]
impl MediaService for LocalMediaService {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ServiceError> {
        let query = query.to_string();
        self.with_conn(move |conn| Ok(db::search_media(conn, &query)?))
            .await
    }

    async fn fetch_media(&self, media_id: &str) -> Result<Option<MediaDetail>, ServiceError> {
        let media_id = media_id.to_string();
        self.with_conn(move |conn| {
            db::fetch_media(conn, &media_id).map_err(|e| ServiceError::Decode(format!("{:#}", e)))
        })
        .await
    }

    async fn fetch_status(
        &self,
        user_id: &str,
        media_id: &str,
    ) -> Result<Option<TrackedStatus>, ServiceError> {
        let (user_id, media_id) = (user_id.to_string(), media_id.to_string());
        self.with_conn(move |conn| Ok(db::fetch_status(conn, &user_id, &media_id)?))
            .await
    }

    async fn upsert_status(&self, update: &StatusUpdate) -> Result<(), ServiceError> {
        let update = update.clone();
        self.with_conn(move |conn| {
            Ok(db::upsert_status(conn, &update.user_id, &update.media_id, update.status)?)
        })
        .await
    }

    async fn remove_status(&self, user_id: &str, media_id: &str) -> Result<(), ServiceError> {
        let (user_id, media_id) = (user_id.to_string(), media_id.to_string());
        self.with_conn(move |conn| {
            let existed = db::delete_status(conn, &user_id, &media_id)?;
            if !existed {
                tracing::debug!(%media_id, "nothing to remove");
            }
            Ok(())
        })
        .await
    }

    async fn list_collection(
        &self,
        user_id: &str,
        filter: &CollectionFilter,
    ) -> Result<Vec<CollectionEntry>, ServiceError> {
        let (user_id, filter) = (user_id.to_string(), *filter);
        self.with_conn(move |conn| Ok(db::list_collection(conn, &user_id, &filter)?))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaType;

    #[tokio::test]
    async fn round_trips_status_through_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offline.db");
        let service = LocalMediaService::open(path.to_str().unwrap()).unwrap();

        let update = StatusUpdate {
            user_id: "u-1".to_string(),
            media_id: "book-dune".to_string(),
            media_type: MediaType::Book,
            status: TrackedStatus::Watching,
        };
        service.upsert_status(&update).await.unwrap();
        assert_eq!(
            service.fetch_status("u-1", "book-dune").await.unwrap(),
            Some(TrackedStatus::Watching)
        );

        let listed = service
            .list_collection("u-1", &CollectionFilter::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].display_title(), "Dune");

        service.remove_status("u-1", "book-dune").await.unwrap();
        service.remove_status("u-1", "book-dune").await.unwrap();
        assert_eq!(service.fetch_status("u-1", "book-dune").await.unwrap(), None);
        assert!(
            service
                .list_collection("u-1", &CollectionFilter::default())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn search_returns_catalog_suggestions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offline.db");
        let service = LocalMediaService::open(path.to_str().unwrap()).unwrap();

        let results = service.search("hobbit").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "book-placeholder-id");
        assert_eq!(results[0].category, "books");
    }
}
