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

//! Application event distribution and orchestration.
//!
//! Keyboard input, timer ticks, controller reports and task worker results
//! all arrive as [`AppEvent`]s on one channel. [`process_events`] applies
//! each event to the [`App`] state through a handler function, then redraws
//! the terminal.
//!
//! Because the loop is the only place the application state is mutated, the
//! controllers never need locks: their background tasks send events here and
//! the controller decides whether a report is still wanted.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::{
    App, MainView,
    controller::{
        search::{Route, SearchEvent},
        status::SavedStatus,
    },
    model::{CollectionEntry, CollectionFilter, MediaPage},
    render::draw,
    util::term::Tui,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Search(SearchEvent),
    Navigate(Route),
    SetMainView(MainView),

    MediaLoaded(Box<MediaPage>),
    MediaNotFound(String),
    MediaLoadFailed {
        id: String,
        message: String,
    },

    StatusPersisted(SavedStatus),

    OpenCollection(CollectionFilter),
    CollectionLoaded {
        filter: CollectionFilter,
        entries: Vec<CollectionEntry>,
    },
    CollectionLoadFailed {
        filter: CollectionFilter,
        message: String,
    },

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) async fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while let Some(event) = app.event_rx.recv().await {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        dispatch(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn dispatch(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Search(search_event) => handle_search_event(app, search_event),
        AppEvent::Navigate(route) => handle_navigate(app, route)?,
        AppEvent::SetMainView(view) => handle_set_main_view(app, view),
        AppEvent::MediaLoaded(page) => handle_media_loaded(app, *page),
        AppEvent::MediaNotFound(id) => handle_media_not_found(app, id),
        AppEvent::MediaLoadFailed { id, message } => handle_media_load_failed(app, id, message),
        AppEvent::StatusPersisted(saved) => handle_status_persisted(app, saved),
        AppEvent::OpenCollection(filter) => handle_open_collection(app, filter)?,
        AppEvent::CollectionLoaded { filter, entries } => {
            handle_collection_loaded(app, filter, entries)
        }
        AppEvent::CollectionLoadFailed { filter, message } => {
            handle_collection_load_failed(app, filter, message)
        }
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}
