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

//! Media detail view.
//!
//! Shows one media record together with its collection status menu. A page
//! is requested by id and stays in the loading state until the task worker
//! reports back; reports for any other id are ignored.

mod render;

use std::sync::Arc;

use crossterm::event::Event;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    components::StatusMenu,
    events::AppEvent,
    model::MediaPage,
    service::MediaService,
    session::SessionContext,
};

enum DetailState {
    Empty,
    Loading(String),
    NotFound(String),
    Failed(String),
    Loaded {
        page: Box<MediaPage>,
        status_menu: StatusMenu,
    },
}

pub(crate) struct DetailView {
    state: DetailState,
    pub(crate) is_active: bool,
}

impl DetailView {
    pub(crate) fn new() -> Self {
        Self {
            state: DetailState::Empty,
            is_active: false,
        }
    }

    pub(crate) fn begin_loading(&mut self, id: &str) {
        self.state = DetailState::Loading(id.to_string());
    }

    pub(crate) fn is_loading(&self, id: &str) -> bool {
        matches!(&self.state, DetailState::Loading(pending) if pending == id)
    }

    pub(crate) fn not_found(&mut self, id: String) {
        self.state = DetailState::NotFound(id);
    }

    pub(crate) fn load_failed(&mut self, id: String) {
        self.state = DetailState::Failed(id);
    }

    /// Shows `page`, mounting a fresh status menu for it. The menu of the
    /// previous page is dropped; its queued writes still complete.
    pub(crate) fn mount(
        &mut self,
        page: MediaPage,
        session: &SessionContext,
        service: Arc<dyn MediaService>,
        event_tx: UnboundedSender<AppEvent>,
    ) {
        let status_menu = StatusMenu::mount(
            session,
            page.media_id(),
            &page.detail.title,
            page.media_type(),
            page.status,
            service,
            event_tx,
        );

        self.state = DetailState::Loaded {
            page: Box::new(page),
            status_menu,
        };
    }

    pub(crate) fn has_content(&self) -> bool {
        !matches!(self.state, DetailState::Empty)
    }

    pub(crate) fn is_menu_open(&self) -> bool {
        match &self.state {
            DetailState::Loaded { status_menu, .. } => status_menu.is_open(),
            _ => false,
        }
    }

    /// Handles a key event, returning whether the view consumed it.
    pub(crate) fn process_event(&mut self, event: &Event) -> bool {
        if !self.is_active {
            return false;
        }

        match &mut self.state {
            DetailState::Loaded { status_menu, .. } => status_menu.process_event(event),
            _ => false,
        }
    }
}
