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

//! Collection status selection controller.
//!
//! The displayed status is a write-through cache of the status held by the
//! media service. A selection updates the display immediately and queues a
//! write; the writes of one controller run one at a time, in the order they
//! were queued, and each runs to completion even if the user moves on.
//!
//! Selecting "Not Added" removes the item from the collection instead of
//! upserting a row.
//!
//! A failed write is logged and the display keeps the selected status. The
//! display and the store may therefore disagree until the next successful
//! write or the next time the page is loaded.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    events::AppEvent,
    model::{CollectionStatus, MediaType, StatusUpdate, VerbPair},
    service::MediaService,
    session::SessionContext,
};

/// A status that has been stored for one media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SavedStatus {
    pub(crate) media_id: String,
    pub(crate) title: String,
    pub(crate) status: CollectionStatus,
    pub(crate) label: String,
}

impl SavedStatus {
    /// Footer text naming the item, since the user may have moved on.
    pub(crate) fn notice(&self) -> String {
        let name = if self.title.is_empty() {
            &self.media_id
        } else {
            &self.title
        };
        format!("Saved {}: {}", name, self.label)
    }
}

/// Receives confirmation that a selected status has been stored.
pub(crate) trait StatusDelegate: Send + Sync + 'static {
    fn on_status_persisted(&self, saved: SavedStatus);
}

impl StatusDelegate for UnboundedSender<AppEvent> {
    fn on_status_persisted(&self, saved: SavedStatus) {
        let _ = self.send(AppEvent::StatusPersisted(saved));
    }
}

/// The item a controller writes to, known only when both the user and the
/// media id were available at mount.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusTarget {
    user_id: String,
    media_id: String,
    media_type: MediaType,
    title: String,
}

/// A queued persistence attempt.
#[derive(Debug)]
enum StatusWrite {
    Upsert(StatusUpdate),
    Remove { user_id: String, media_id: String },
}

struct QueuedWrite {
    write: StatusWrite,
    status: CollectionStatus,
    label: String,
}

impl StatusWrite {
    fn for_selection(target: &StatusTarget, status: CollectionStatus) -> Self {
        match status.tracked() {
            Some(tracked) => Self::Upsert(StatusUpdate {
                user_id: target.user_id.clone(),
                media_id: target.media_id.clone(),
                media_type: target.media_type,
                status: tracked,
            }),
            None => Self::Remove {
                user_id: target.user_id.clone(),
                media_id: target.media_id.clone(),
            },
        }
    }
}

pub(crate) struct StatusController {
    status: CollectionStatus,
    verbs: VerbPair,
    open: bool,
    target: Option<StatusTarget>,
    writer: Option<UnboundedSender<QueuedWrite>>,
}

impl StatusController {
    /// Mounts a controller for one media item.
    ///
    /// The user id comes from `session` and is read only here. Without a
    /// user id or a media id the controller still tracks selections for
    /// display but never writes. `title` only labels the confirmations.
    pub(crate) fn mount(
        session: &SessionContext,
        media_id: Option<&str>,
        title: &str,
        media_type: MediaType,
        current: CollectionStatus,
        service: Arc<dyn MediaService>,
        delegate: impl StatusDelegate,
    ) -> Self {
        let target = match (session.user_id(), media_id.filter(|id| !id.is_empty())) {
            (Some(user_id), Some(media_id)) => Some(StatusTarget {
                user_id: user_id.to_string(),
                media_id: media_id.to_string(),
                media_type,
                title: title.to_string(),
            }),
            _ => {
                tracing::debug!(?media_id, "status changes will not be persisted");
                None
            }
        };

        let writer = target
            .as_ref()
            .map(|target| spawn_writer(target, service, delegate));

        Self {
            status: current,
            verbs: media_type.verbs(),
            open: false,
            target,
            writer,
        }
    }

    pub(crate) fn status(&self) -> CollectionStatus {
        self.status
    }

    pub(crate) fn label(&self) -> String {
        self.status.label(&self.verbs)
    }

    /// Menu entries in display order, paired with their labels.
    pub(crate) fn options(&self) -> Vec<(CollectionStatus, String)> {
        CollectionStatus::MENU
            .iter()
            .map(|status| (*status, status.label(&self.verbs)))
            .collect()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    pub(crate) fn is_persistent(&self) -> bool {
        self.writer.is_some()
    }

    /// Applies a selection locally and queues it for persistence.
    pub(crate) fn select(&mut self, status: CollectionStatus) {
        self.status = status;
        self.open = false;

        let (Some(target), Some(writer)) = (&self.target, &self.writer) else {
            return;
        };

        let queued = QueuedWrite {
            write: StatusWrite::for_selection(target, status),
            status,
            label: status.label(&self.verbs),
        };

        if writer.send(queued).is_err() {
            tracing::warn!("status writer has stopped, selection not persisted");
        }
    }
}

/// Spawns the task that performs the writes for one media item in order.
///
/// The task ends once the controller is dropped and the queue is drained.
fn spawn_writer(
    target: &StatusTarget,
    service: Arc<dyn MediaService>,
    delegate: impl StatusDelegate,
) -> UnboundedSender<QueuedWrite> {
    let (tx, mut rx) = mpsc::unbounded_channel::<QueuedWrite>();
    let media_id = target.media_id.clone();
    let title = target.title.clone();

    tokio::spawn(async move {
        while let Some(queued) = rx.recv().await {
            let outcome = match &queued.write {
                StatusWrite::Upsert(update) => service.upsert_status(update).await,
                StatusWrite::Remove { user_id, media_id } => {
                    service.remove_status(user_id, media_id).await
                }
            };

            match outcome {
                Ok(()) => delegate.on_status_persisted(SavedStatus {
                    media_id: media_id.clone(),
                    title: title.clone(),
                    status: queued.status,
                    label: queued.label,
                }),
                Err(e) => tracing::warn!(
                    %media_id,
                    status = ?queued.status,
                    error = %e,
                    "failed to persist status"
                ),
            }
        }
    });

    tx
}
