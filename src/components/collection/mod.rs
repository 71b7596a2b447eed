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

//! The user's collection, one filtered page at a time.
//!
//! Up and down move the highlight, Enter opens the item, `n` and `p` change
//! page and `r` reloads. A page is requested by filter and stays loading
//! until the task worker reports back; reports for any other filter are
//! ignored.

mod render;

use crossterm::event::{Event, KeyCode};
use ratatui::widgets::ListState;

use crate::{
    controller::search::Route,
    model::{CollectionEntry, CollectionFilter},
};

enum CollectionState {
    Empty,
    Loading(CollectionFilter),
    Failed {
        filter: CollectionFilter,
        message: String,
    },
    Loaded {
        filter: CollectionFilter,
        entries: Vec<CollectionEntry>,
    },
}

/// What a key press in the collection view asks the application to do.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CollectionAction {
    Handled,
    Navigate(Route),
    Load(CollectionFilter),
}

pub(crate) struct CollectionView {
    state: CollectionState,
    list_state: ListState,
    pub(crate) is_active: bool,
}

impl CollectionView {
    pub(crate) fn new() -> Self {
        Self {
            state: CollectionState::Empty,
            list_state: ListState::default(),
            is_active: false,
        }
    }

    pub(crate) fn begin_loading(&mut self, filter: CollectionFilter) {
        self.state = CollectionState::Loading(filter);
    }

    pub(crate) fn is_loading(&self, filter: &CollectionFilter) -> bool {
        matches!(&self.state, CollectionState::Loading(pending) if pending == filter)
    }

    pub(crate) fn load_failed(&mut self, filter: CollectionFilter, message: String) {
        self.state = CollectionState::Failed { filter, message };
    }

    pub(crate) fn mount(&mut self, filter: CollectionFilter, entries: Vec<CollectionEntry>) {
        self.list_state
            .select(if entries.is_empty() { None } else { Some(0) });
        self.state = CollectionState::Loaded { filter, entries };
    }

    /// The filter of the page shown or being loaded.
    pub(crate) fn filter(&self) -> Option<CollectionFilter> {
        match &self.state {
            CollectionState::Empty => None,
            CollectionState::Loading(filter)
            | CollectionState::Failed { filter, .. }
            | CollectionState::Loaded { filter, .. } => Some(*filter),
        }
    }

    pub(crate) fn highlighted(&self) -> Option<&CollectionEntry> {
        match &self.state {
            CollectionState::Loaded { entries, .. } => {
                self.list_state.selected().and_then(|i| entries.get(i))
            }
            _ => None,
        }
    }

    /// Handles a key event. Keys the view has no use for return `None`.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<CollectionAction> {
        if !self.is_active {
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        let filter = self.filter()?;

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_highlight(1);
                Some(CollectionAction::Handled)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_highlight(-1);
                Some(CollectionAction::Handled)
            }
            KeyCode::Enter => {
                let entry = self.highlighted()?;
                Some(CollectionAction::Navigate(Route::Media {
                    category: entry
                        .media_type
                        .map(|t| t.category().to_string())
                        .unwrap_or_default(),
                    id: entry.media_id.clone(),
                }))
            }
            KeyCode::Char('n') if self.has_next_page() => {
                Some(CollectionAction::Load(filter.next_page()))
            }
            KeyCode::Char('p') if filter.page > 0 => {
                Some(CollectionAction::Load(filter.previous_page()))
            }
            KeyCode::Char('r') => Some(CollectionAction::Load(filter)),
            _ => None,
        }
    }

    /// A full page suggests there may be another one.
    fn has_next_page(&self) -> bool {
        match &self.state {
            CollectionState::Loaded { filter, entries } => entries.len() as u32 >= filter.size,
            _ => false,
        }
    }

    fn move_highlight(&mut self, delta: isize) {
        let CollectionState::Loaded { entries, .. } = &self.state else {
            return;
        };
        if entries.is_empty() {
            return;
        }

        let last = entries.len() - 1;
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::{MediaType, TrackedStatus};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn entry(id: &str, media_type: Option<MediaType>) -> CollectionEntry {
        CollectionEntry {
            media_id: id.to_string(),
            status: TrackedStatus::Completed,
            media_type,
            title: None,
            updated_at: None,
        }
    }

    fn active_view() -> CollectionView {
        let mut view = CollectionView::new();
        view.is_active = true;
        view
    }

    #[test]
    fn enter_opens_the_highlighted_item_by_category() {
        let mut view = active_view();
        let filter = CollectionFilter::default();
        view.begin_loading(filter);
        assert!(view.is_loading(&filter));
        assert_eq!(view.process_event(&key(KeyCode::Enter)), None);

        view.mount(
            filter,
            vec![entry("book-dune", Some(MediaType::Book)), entry("x-1", None)],
        );
        assert!(!view.is_loading(&filter));

        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(CollectionAction::Navigate(Route::Media {
                category: "books".to_string(),
                id: "book-dune".to_string(),
            }))
        );

        view.process_event(&key(KeyCode::Down));
        view.process_event(&key(KeyCode::Down));
        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(CollectionAction::Navigate(Route::Media {
                category: String::new(),
                id: "x-1".to_string(),
            }))
        );
    }

    #[test]
    fn pages_only_when_there_is_somewhere_to_go() {
        let mut view = active_view();
        let filter = CollectionFilter {
            size: 2,
            ..CollectionFilter::default()
        };

        view.mount(filter, vec![entry("a", None)]);
        assert_eq!(view.process_event(&key(KeyCode::Char('n'))), None);
        assert_eq!(view.process_event(&key(KeyCode::Char('p'))), None);

        view.mount(filter, vec![entry("a", None), entry("b", None)]);
        assert_eq!(
            view.process_event(&key(KeyCode::Char('n'))),
            Some(CollectionAction::Load(filter.next_page()))
        );

        view.mount(filter.next_page(), vec![entry("c", None)]);
        assert_eq!(
            view.process_event(&key(KeyCode::Char('p'))),
            Some(CollectionAction::Load(filter))
        );
    }

    #[test]
    fn inactive_or_empty_view_ignores_keys() {
        let mut view = CollectionView::new();
        view.mount(CollectionFilter::default(), vec![entry("a", None)]);
        assert_eq!(view.process_event(&key(KeyCode::Enter)), None);

        let mut view = active_view();
        assert_eq!(view.process_event(&key(KeyCode::Char('r'))), None);
    }
}
