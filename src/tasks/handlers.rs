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

use anyhow::Result;

use crate::{
    events::AppEvent,
    model::{CollectionFilter, CollectionStatus, MediaPage, MediaType},
    tasks::TaskContext,
};

pub(super) async fn load_media(ctx: &TaskContext, id: String, category: &str) -> Result<()> {
    let detail = match ctx.service.fetch_media(&id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            ctx.event_tx.send(AppEvent::MediaNotFound(id))?;
            return Ok(());
        }
        Err(e) => {
            tracing::error!(%id, error = %e, "failed to load media");
            let message = format!("Failed to load {}: {}", id, e);
            ctx.event_tx.send(AppEvent::MediaLoadFailed { id, message })?;
            return Ok(());
        }
    };

    let media_id = detail.media_id().unwrap_or(&id).to_string();

    // An unreadable status is shown as not added rather than failing the page
    let status = match ctx.session.user_id() {
        Some(user_id) => match ctx.service.fetch_status(user_id, &media_id).await {
            Ok(status) => CollectionStatus::from(status),
            Err(e) => {
                tracing::warn!(%media_id, error = %e, "failed to load collection status");
                CollectionStatus::NotAdded
            }
        },
        None => CollectionStatus::NotAdded,
    };

    let page = MediaPage {
        requested_id: id,
        route_type: MediaType::parse(category),
        detail,
        status,
    };
    ctx.event_tx.send(AppEvent::MediaLoaded(Box::new(page)))?;

    Ok(())
}

pub(super) async fn load_collection(ctx: &TaskContext, filter: CollectionFilter) -> Result<()> {
    let Some(user_id) = ctx.session.user_id() else {
        let message = "No user id configured".to_string();
        ctx.event_tx
            .send(AppEvent::CollectionLoadFailed { filter, message })?;
        return Ok(());
    };

    match ctx.service.list_collection(user_id, &filter).await {
        Ok(entries) => {
            tracing::debug!(count = entries.len(), ?filter, "collection loaded");
            ctx.event_tx
                .send(AppEvent::CollectionLoaded { filter, entries })?;
        }
        Err(e) => {
            tracing::error!(?filter, error = %e, "failed to load collection");
            let message = format!("Failed to load collection: {}", e);
            ctx.event_tx
                .send(AppEvent::CollectionLoadFailed { filter, message })?;
        }
    }

    Ok(())
}
