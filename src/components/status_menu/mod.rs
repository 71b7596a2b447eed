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

//! Collection status menu.
//!
//! A drop-down over the [`StatusController`]: `s` or Enter opens it, up and
//! down move the highlight, Enter chooses and Esc closes without changing
//! anything.

mod render;

use std::sync::Arc;

use crossterm::event::{Event, KeyCode};
use ratatui::widgets::ListState;

use crate::{
    controller::status::{StatusController, StatusDelegate},
    model::{CollectionStatus, MediaType},
    service::MediaService,
    session::SessionContext,
};

pub(crate) struct StatusMenu {
    pub(crate) controller: StatusController,
    list_state: ListState,
}

impl StatusMenu {
    pub(crate) fn mount(
        session: &SessionContext,
        media_id: Option<&str>,
        title: &str,
        media_type: MediaType,
        current: CollectionStatus,
        service: Arc<dyn MediaService>,
        delegate: impl StatusDelegate,
    ) -> Self {
        Self {
            controller: StatusController::mount(
                session, media_id, title, media_type, current, service, delegate,
            ),
            list_state: ListState::default(),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// Handles a key event, returning whether the menu consumed it.
    pub(crate) fn process_event(&mut self, event: &Event) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.controller.is_open() {
            return match key_event.code {
                KeyCode::Char('s') | KeyCode::Enter => {
                    self.open();
                    true
                }
                _ => false,
            };
        }

        let last = CollectionStatus::MENU.len() - 1;
        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let i = self.list_state.selected().map_or(0, |i| (i + 1).min(last));
                self.list_state.select(Some(i));
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
                self.list_state.select(Some(i));
            }
            KeyCode::Enter => {
                if let Some(status) = self
                    .list_state
                    .selected()
                    .and_then(|i| CollectionStatus::MENU.get(i))
                {
                    self.controller.select(*status);
                }
                self.controller.close();
            }
            KeyCode::Esc | KeyCode::Char('s') => self.controller.close(),
            _ => {}
        }

        true
    }

    fn open(&mut self) {
        let current = self.controller.status();
        let index = CollectionStatus::MENU.iter().position(|s| *s == current);
        self.list_state.select(index);
        self.controller.toggle();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tokio::sync::mpsc;

    use super::*;
    use crate::{events::AppEvent, service::testing::ScriptedService};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn choosing_from_the_menu_selects_the_status() {
        let (tx, _rx) = mpsc::unbounded_channel::<AppEvent>();
        let mut menu = StatusMenu::mount(
            &SessionContext::new(None),
            Some("music-abbey-road"),
            "Abbey Road",
            MediaType::Music,
            CollectionStatus::Completed,
            Arc::new(ScriptedService::new()),
            tx,
        );

        assert!(!menu.process_event(&key(KeyCode::Char('x'))));
        assert!(menu.process_event(&key(KeyCode::Enter)));
        assert!(menu.is_open());

        menu.process_event(&key(KeyCode::Down));
        menu.process_event(&key(KeyCode::Down));
        menu.process_event(&key(KeyCode::Enter));

        assert!(!menu.is_open());
        assert_eq!(menu.controller.status(), CollectionStatus::InProgress);
        assert_eq!(menu.controller.label(), "Listening");
    }

    #[tokio::test]
    async fn escape_closes_without_changing_status() {
        let (tx, _rx) = mpsc::unbounded_channel::<AppEvent>();
        let mut menu = StatusMenu::mount(
            &SessionContext::new(None),
            None,
            "",
            MediaType::Movie,
            CollectionStatus::NotAdded,
            Arc::new(ScriptedService::new()),
            tx,
        );

        menu.process_event(&key(KeyCode::Char('s')));
        menu.process_event(&key(KeyCode::Up));
        menu.process_event(&key(KeyCode::Esc));

        assert!(!menu.is_open());
        assert_eq!(menu.controller.status(), CollectionStatus::NotAdded);
    }
}
