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

//! Asynchronous application task processing.
//!
//! Loading a media page takes one or two service round trips, and listing
//! the collection one more, so they run on a dedicated worker instead of the
//! event loop. The worker translates
//! [`AppTask`] requests into media service calls and broadcasts the results
//! back to the application via [`AppEvent`]s.
//!
//! Tasks are processed one at a time in the order they were sent, so results
//! arrive in request order.

mod handlers;

use std::sync::Arc;

use anyhow::Result;
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::{
    events::AppEvent, model::CollectionFilter, service::MediaService, session::SessionContext,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    /// Load the detail record and collection status of a media item.
    /// `category` is the type tag of the route it was opened from, possibly
    /// empty.
    LoadMedia { id: String, category: String },
    /// Load one page of the signed-in user's collection.
    LoadCollection(CollectionFilter),
}

/// Spawns the task worker.
///
/// The worker ends when every sender of `task_rx` has been dropped.
///
/// # Arguments
///
/// * `service` - The media service tasks are run against.
/// * `session` - The signed-in user, used for status lookups.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    service: Arc<dyn MediaService>,
    session: SessionContext,
    mut task_rx: UnboundedReceiver<AppTask>,
    event_tx: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let ctx = TaskContext {
            service,
            session,
            event_tx,
        };

        while let Some(task) = task_rx.recv().await {
            if let Err(e) = handle_task(task, &ctx).await {
                tracing::error!(error = %format!("{:#}", e), "task failed");
                let _ = ctx.event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    })
}

/// Bundles shared resources required by task handlers.
struct TaskContext {
    service: Arc<dyn MediaService>,
    session: SessionContext,
    event_tx: UnboundedSender<AppEvent>,
}

async fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadMedia { id, category } => handlers::load_media(ctx, id, &category).await,
        AppTask::LoadCollection(filter) => handlers::load_collection(ctx, filter).await,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::sync::mpsc;

    use super::*;
    use crate::{
        model::{CollectionStatus, MediaDetail, MediaType, TrackedStatus},
        service::testing::{Call, ScriptedService},
    };

    fn dune() -> MediaDetail {
        serde_json::from_value(json!({
            "id": "book-dune",
            "type": "BOOKS",
            "title": "Dune",
            "releaseDate": "1965-08-01",
        }))
        .unwrap()
    }

    async fn run(service: Arc<ScriptedService>, user_id: Option<&str>, task: AppTask) -> AppEvent {
        let (task_tx, task_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let session = SessionContext::new(user_id.map(str::to_string));
        spawn_task_worker(service, session, task_rx, event_tx);

        task_tx.send(task).unwrap();
        event_rx.recv().await.unwrap()
    }

    async fn load(service: Arc<ScriptedService>, user_id: Option<&str>, id: &str) -> AppEvent {
        let task = AppTask::LoadMedia {
            id: id.to_string(),
            category: String::new(),
        };
        run(service, user_id, task).await
    }

    #[tokio::test]
    async fn loads_detail_with_current_status() {
        let service = Arc::new(ScriptedService::new());
        service.insert_media("book-dune", dune());
        service.insert_status("u-1", "book-dune", TrackedStatus::Completed);

        match load(service, Some("u-1"), "book-dune").await {
            AppEvent::MediaLoaded(page) => {
                assert_eq!(page.detail.title, "Dune");
                assert_eq!(page.status, CollectionStatus::Completed);
                assert_eq!(page.requested_id, "book-dune");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn skips_status_lookup_without_a_user() {
        let service = Arc::new(ScriptedService::new());
        service.insert_media("book-dune", dune());

        match load(service.clone(), None, "book-dune").await {
            AppEvent::MediaLoaded(page) => assert_eq!(page.status, CollectionStatus::NotAdded),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(service.started(), vec![Call::FetchMedia("book-dune".to_string())]);
    }

    #[tokio::test]
    async fn untyped_record_takes_the_route_category() {
        let service = Arc::new(ScriptedService::new());
        let untyped: MediaDetail =
            serde_json::from_value(json!({"id": "book-x", "title": "Untyped Book"})).unwrap();
        service.insert_media("book-x", untyped);

        let task = AppTask::LoadMedia {
            id: "book-x".to_string(),
            category: "books".to_string(),
        };
        match run(service, Some("u-1"), task).await {
            AppEvent::MediaLoaded(page) => {
                assert_eq!(page.media_type(), MediaType::Book);
                assert_eq!(page.media_type().verbs().verb, "Read");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn lists_the_collection_for_the_signed_in_user() {
        let service = Arc::new(ScriptedService::new());
        service.insert_status("u-1", "book-dune", TrackedStatus::Completed);
        service.insert_status("u-1", "tv-twin-peaks", TrackedStatus::Watching);
        service.insert_status("u-2", "music-abbey-road", TrackedStatus::Completed);

        let filter = CollectionFilter {
            status: Some(TrackedStatus::Completed),
            ..CollectionFilter::default()
        };
        match run(service, Some("u-1"), AppTask::LoadCollection(filter)).await {
            AppEvent::CollectionLoaded { filter: loaded, entries } => {
                assert_eq!(loaded, filter);
                let ids: Vec<&str> = entries.iter().map(|e| e.media_id.as_str()).collect();
                assert_eq!(ids, vec!["book-dune"]);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn collection_needs_a_user() {
        let service = Arc::new(ScriptedService::new());

        let task = AppTask::LoadCollection(CollectionFilter::default());
        match run(service.clone(), None, task).await {
            AppEvent::CollectionLoadFailed { message, .. } => {
                assert_eq!(message, "No user id configured");
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert!(service.started().is_empty());
    }

    #[tokio::test]
    async fn reports_missing_media() {
        let service = Arc::new(ScriptedService::new());

        match load(service, Some("u-1"), "nope").await {
            AppEvent::MediaNotFound(id) => assert_eq!(id, "nope"),
            other => panic!("unexpected event {:?}", other),
        }
    }
}
