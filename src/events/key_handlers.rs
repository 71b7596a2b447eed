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
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App, MainView,
    components::{CollectionAction, SearchAction},
    events::AppEvent,
};

/// Routes keyboard input to the command line, then the active view, then
/// the global bindings.
///
/// The command line takes precedence while it is open. The active view gets
/// the key next, and only keys it does not consume reach the global
/// bindings.
///
/// # Errors
///
/// Returns an error if an event cannot be sent back to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    // ':' only opens the command line while there is no search text, so it
    // can still be typed into a query
    let can_open_commander = match app.main_view {
        MainView::Search => app.search_view.input.value().is_empty(),
        MainView::Detail => !app.detail_view.is_menu_open(),
        MainView::Collection => true,
    };
    if app
        .commander
        .handle_event(&event, &app.event_tx, can_open_commander)
    {
        return Ok(());
    }

    if is_quit(&key) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let handled = match app.main_view {
        MainView::Search => match app.search_view.process_event(&event) {
            Some(SearchAction::Navigate(route)) => {
                app.event_tx.send(AppEvent::Navigate(route))?;
                true
            }
            Some(SearchAction::Handled) => true,
            None => false,
        },
        MainView::Detail => app.detail_view.process_event(&event),
        MainView::Collection => match app.collection_view.process_event(&event) {
            Some(CollectionAction::Navigate(route)) => {
                app.event_tx.send(AppEvent::Navigate(route))?;
                true
            }
            Some(CollectionAction::Load(filter)) => {
                app.event_tx.send(AppEvent::OpenCollection(filter))?;
                true
            }
            Some(CollectionAction::Handled) => true,
            None => false,
        },
    };

    if !handled {
        process_global_key_event(app, key)?;
    }

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (app.main_view, key.code) {
        (MainView::Detail | MainView::Collection, KeyCode::Char('q')) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (MainView::Detail | MainView::Collection, KeyCode::Char('/') | KeyCode::Esc) => {
            app.event_tx.send(AppEvent::SetMainView(MainView::Search))?;
        }

        (MainView::Detail, KeyCode::Char('c')) => {
            let filter = app.collection_view.filter().unwrap_or_default();
            app.event_tx.send(AppEvent::OpenCollection(filter))?;
        }

        (MainView::Search, KeyCode::Tab) if app.detail_view.has_content() => {
            app.event_tx.send(AppEvent::SetMainView(MainView::Detail))?;
        }

        _ => {}
    }

    Ok(())
}
