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

//! Search bar and suggestion list.
//!
//! The view owns the text input and the [`SearchController`] behind it. Each
//! edit of the input is forwarded to the controller; the suggestion list is
//! whatever the controller currently holds.

mod event;
mod render;

use ratatui::widgets::ListState;
use tui_input::Input;

use crate::controller::search::{Route, SearchController, SearchEvent};

/// Outcome of a key event handled by the search view.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchAction {
    Handled,
    Navigate(Route),
}

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) controller: SearchController,
    pub(crate) list_state: ListState,
    pub(crate) is_active: bool,
}

impl SearchView {
    pub(crate) fn new(controller: SearchController) -> Self {
        Self {
            input: Input::default(),
            controller,
            list_state: ListState::default(),
            is_active: true,
        }
    }

    pub(crate) fn handle_search_event(&mut self, event: SearchEvent) {
        self.controller.handle_event(event);
        self.clamp_highlight();
    }

    /// Replaces the input text with `text` and looks it up straight away.
    pub(crate) fn search_for(&mut self, text: &str) {
        self.input = Input::new(text.to_string());
        self.list_state.select(None);
        self.controller.submit(text);
    }

    pub(crate) fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn clamp_highlight(&mut self) {
        let len = self.controller.results().len();
        if self.list_state.selected().is_some_and(|i| i >= len) {
            self.list_state.select(None);
        }
    }
}
