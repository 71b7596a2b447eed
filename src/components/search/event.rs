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

//! Input handling for the search view.
//!
//! Up and down move the highlight through the suggestions, Enter opens the
//! highlighted suggestion (or runs the query straight away when none is
//! highlighted), and Esc clears the highlight and then the query. Every
//! other key edits the query.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchAction, SearchView};

impl SearchView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchAction> {
        if !self.is_active {
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Down => self.highlight_next(),
            KeyCode::Up => self.highlight_previous(),

            KeyCode::Enter => {
                if let Some(index) = self.highlighted() {
                    return self.controller.select(index).map(SearchAction::Navigate);
                }
                let value = self.input.value().to_string();
                self.controller.submit(&value);
            }

            KeyCode::Esc => {
                if self.highlighted().is_some() {
                    self.list_state.select(None);
                } else if !self.input.value().is_empty() {
                    self.input.reset();
                    self.controller.reset();
                } else {
                    return None;
                }
            }

            KeyCode::Tab => return None,

            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(event);
                if self.input.value() != before {
                    self.list_state.select(None);
                    let value = self.input.value().to_string();
                    self.controller.on_input(&value);
                }
            }
        }

        Some(SearchAction::Handled)
    }

    fn highlight_next(&mut self) {
        let len = self.controller.results().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn highlight_previous(&mut self) {
        match self.list_state.selected() {
            Some(0) | None => self.list_state.select(None),
            Some(i) => self.list_state.select(Some(i - 1)),
        }
    }
}
