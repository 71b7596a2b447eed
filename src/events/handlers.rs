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

use std::sync::Arc;

use anyhow::Result;

use crate::{
    App, MainView,
    controller::{
        search::{Route, SearchEvent},
        status::SavedStatus,
    },
    model::{CollectionEntry, CollectionFilter, MediaPage},
    tasks::AppTask,
};

pub(super) fn handle_search_event(app: &mut App, event: SearchEvent) {
    app.search_view.handle_search_event(event);
}

pub(super) fn handle_navigate(app: &mut App, route: Route) -> Result<()> {
    match route {
        Route::Media { category, id } => {
            tracing::debug!(%category, %id, "opening media");
            app.detail_view.begin_loading(&id);
            app.task_tx.send(AppTask::LoadMedia { id, category })?;
            handle_set_main_view(app, MainView::Detail);
        }
        Route::Query(text) => {
            app.search_view.search_for(&text);
            handle_set_main_view(app, MainView::Search);
        }
    }

    Ok(())
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    app.search_view.is_active = matches!(main_view, MainView::Search);
    app.detail_view.is_active = matches!(main_view, MainView::Detail);
    app.collection_view.is_active = matches!(main_view, MainView::Collection);
    app.main_view = main_view;
}

pub(super) fn handle_media_loaded(app: &mut App, page: MediaPage) {
    if !app.detail_view.is_loading(&page.requested_id) {
        tracing::debug!(id = %page.requested_id, "discarding media page no longer wanted");
        return;
    }

    app.footer.clear();
    app.detail_view.mount(
        page,
        &app.session,
        Arc::clone(&app.service),
        app.event_tx.clone(),
    );
}

pub(super) fn handle_media_not_found(app: &mut App, id: String) {
    if app.detail_view.is_loading(&id) {
        app.footer.error(format!("No media found with id {}", id));
        app.detail_view.not_found(id);
    }
}

pub(super) fn handle_media_load_failed(app: &mut App, id: String, message: String) {
    if app.detail_view.is_loading(&id) {
        app.detail_view.load_failed(id);
        app.footer.error(message);
    }
}

pub(super) fn handle_status_persisted(app: &mut App, saved: SavedStatus) {
    tracing::info!(media_id = %saved.media_id, status = ?saved.status, "collection status saved");
    app.footer.info(saved.notice());
}

pub(super) fn handle_open_collection(app: &mut App, filter: CollectionFilter) -> Result<()> {
    app.collection_view.begin_loading(filter);
    app.task_tx.send(AppTask::LoadCollection(filter))?;
    handle_set_main_view(app, MainView::Collection);

    Ok(())
}

pub(super) fn handle_collection_loaded(
    app: &mut App,
    filter: CollectionFilter,
    entries: Vec<CollectionEntry>,
) {
    if !app.collection_view.is_loading(&filter) {
        tracing::debug!(?filter, "discarding collection page no longer wanted");
        return;
    }

    app.collection_view.mount(filter, entries);
}

pub(super) fn handle_collection_load_failed(
    app: &mut App,
    filter: CollectionFilter,
    message: String,
) {
    if app.collection_view.is_loading(&filter) {
        app.collection_view.load_failed(filter, message.clone());
        app.footer.error(message);
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.footer.error(message);
}
