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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line: a text input component that
//! dispatches the corresponding application event when a command is
//! submitted.
//!
//! | Command          | Effect                                   |
//! |------------------|------------------------------------------|
//! | `:q`, `:quit`    | exit the application                     |
//! | `:open <id>`     | open the detail view of a media item     |
//! | `:find <text>`   | search for `text` without waiting        |
//! | `:collection [status] [type]` | list the collection, optionally filtered |
//! | `:search`        | switch to the search view                |
//! | `:detail`        | switch to the detail view                |

use crossterm::event::{Event, KeyCode};
use tokio::sync::mpsc::UnboundedSender;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    MainView,
    controller::search::Route,
    events::AppEvent,
    model::{CollectionFilter, MediaType, TrackedStatus},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a key event, returning whether the command line consumed it.
    ///
    /// While inactive, only `:` is consumed, and only if `can_activate`.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        event_tx: &UnboundedSender<AppEvent>,
        can_activate: bool,
    ) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if can_activate && key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if let Some(event) = parse_command(&buffer) {
                    let _ = event_tx.send(event);
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }
}

/// Translates a command line into the event it triggers. An empty line does
/// nothing.
fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        [] => return None,

        ["q"] | ["quit"] => AppEvent::ExitApplication,

        ["open", id] => AppEvent::Navigate(Route::Media {
            category: String::new(),
            id: id.to_string(),
        }),

        ["find", text @ ..] if !text.is_empty() => AppEvent::Navigate(Route::Query(text.join(" "))),

        ["collection" | "c", args @ ..] => match parse_collection_filter(args) {
            Ok(filter) => AppEvent::OpenCollection(filter),
            Err(arg) => AppEvent::Error(format!("Not a status or media type: {}", arg)),
        },

        ["search"] => AppEvent::SetMainView(MainView::Search),
        ["detail"] => AppEvent::SetMainView(MainView::Detail),

        [cmd, ..] => AppEvent::Error(format!("Unknown command: {}", cmd)),
    };

    Some(event)
}

/// Reads `:collection` arguments, each either a status or a media type in
/// any order. Returns the first argument that is neither.
fn parse_collection_filter(args: &[&str]) -> Result<CollectionFilter, String> {
    let mut filter = CollectionFilter::default();

    for arg in args {
        match arg.to_ascii_lowercase().as_str() {
            "all" => {}
            "plan" | "planned" => filter.status = Some(TrackedStatus::PlanToWatch),
            "progress" | "in-progress" => filter.status = Some(TrackedStatus::Watching),
            other => {
                if let Some(status) = TrackedStatus::parse(other) {
                    filter.status = Some(status);
                } else if let Some(media_type) = MediaType::parse(other) {
                    filter.media_type = Some(media_type);
                } else {
                    return Err(arg.to_string());
                }
            }
        }
    }

    Ok(filter)
}
