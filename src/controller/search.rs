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

//! Incremental search controller.
//!
//! Converts a stream of input changes into at most five suggestions while
//! keeping network traffic down:
//!
//! * queries shorter than [`MIN_QUERY_LEN`] (after trimming) clear the
//!   suggestions immediately and never trigger a lookup;
//! * otherwise a lookup is scheduled [`DEBOUNCE`] after the latest change,
//!   and every further change reschedules it;
//! * a lookup filters the local dataset when one was supplied, and asks the
//!   media service otherwise;
//! * only one remote search is in flight at a time, and starting another
//!   cancels it, so only the newest response can ever reach the list.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc::UnboundedSender,
    time::{Instant, sleep_until},
};

use crate::{
    controller::{PendingSlot, Ticket},
    error::ServiceError,
    events::AppEvent,
    model::{SearchResult, search::filter_local},
    service::MediaService,
};

/// Quiet period after the latest keystroke before a lookup fires.
pub(crate) const DEBOUNCE: Duration = Duration::from_millis(250);

/// Shortest trimmed query that is looked up.
pub(crate) const MIN_QUERY_LEN: usize = 2;

/// Reports from the controller's background tasks.
#[derive(Debug)]
pub(crate) enum SearchEvent {
    DebounceElapsed(Ticket),
    ResultsReady {
        ticket: Ticket,
        outcome: Result<Vec<SearchResult>, ServiceError>,
    },
}

/// Where selecting a suggestion leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    /// The detail page of a media item within its category.
    Media { category: String, id: String },
    /// A free-text search for the given title.
    Query(String),
}

pub(crate) struct SearchController {
    service: Arc<dyn MediaService>,
    event_tx: UnboundedSender<AppEvent>,
    items: Vec<SearchResult>,
    query: String,
    results: Vec<SearchResult>,
    debounce: PendingSlot,
    in_flight: PendingSlot,
}

impl SearchController {
    /// Creates a controller. A non-empty `items` dataset is filtered locally
    /// instead of querying the service.
    pub(crate) fn new(
        service: Arc<dyn MediaService>,
        event_tx: UnboundedSender<AppEvent>,
        items: Vec<SearchResult>,
    ) -> Self {
        Self {
            service,
            event_tx,
            items,
            query: String::new(),
            results: Vec::new(),
            debounce: PendingSlot::new(),
            in_flight: PendingSlot::new(),
        }
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Whether a remote search is in flight.
    pub(crate) fn is_loading(&self) -> bool {
        self.in_flight.is_pending()
    }

    /// Handles a change of the input text.
    pub(crate) fn on_input(&mut self, value: &str) {
        self.query = value.to_string();
        self.debounce.cancel();

        if !self.is_searchable() {
            self.clear_results();
            return;
        }

        let event_tx = self.event_tx.clone();
        let deadline = Instant::now() + DEBOUNCE;
        self.debounce.start(|ticket| {
            tokio::spawn(async move {
                sleep_until(deadline).await;
                let _ = event_tx.send(AppEvent::Search(SearchEvent::DebounceElapsed(ticket)));
            })
        });
    }

    /// Looks up `value` straight away, skipping the quiet period.
    pub(crate) fn submit(&mut self, value: &str) {
        self.query = value.to_string();
        self.debounce.cancel();

        if self.is_searchable() {
            self.lookup();
        } else {
            self.clear_results();
        }
    }

    pub(crate) fn handle_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::DebounceElapsed(ticket) => {
                if self.debounce.complete(ticket) {
                    self.lookup();
                }
            }
            SearchEvent::ResultsReady { ticket, outcome } => {
                if !self.in_flight.complete(ticket) {
                    tracing::debug!("discarding superseded search response");
                    return;
                }

                match outcome {
                    Ok(results) => self.results = results,
                    Err(e) => {
                        tracing::error!(query = %self.query, error = %e, "search failed");
                        self.results.clear();
                    }
                }
            }
        }
    }

    /// The navigation outcome of choosing the suggestion at `index`.
    pub(crate) fn select(&self, index: usize) -> Option<Route> {
        let item = self.results.get(index)?;

        let route = if item.category.is_empty() {
            Route::Query(item.title.clone())
        } else {
            Route::Media {
                category: item.category.clone(),
                id: item.id.clone(),
            }
        };

        Some(route)
    }

    /// Forgets the query and suggestions, cancelling outstanding work.
    pub(crate) fn reset(&mut self) {
        self.query.clear();
        self.debounce.cancel();
        self.clear_results();
    }

    fn is_searchable(&self) -> bool {
        self.query.trim().chars().count() >= MIN_QUERY_LEN
    }

    fn clear_results(&mut self) {
        // A response to a longer, earlier query must not repopulate the list
        self.in_flight.cancel();
        self.results.clear();
    }

    fn lookup(&mut self) {
        if !self.items.is_empty() {
            self.results = filter_local(&self.items, &self.query);
            return;
        }

        let query = self.query.clone();
        let service = Arc::clone(&self.service);
        let event_tx = self.event_tx.clone();

        self.in_flight.start(|ticket| {
            tokio::spawn(async move {
                let outcome = service.search(&query).await;
                let _ = event_tx.send(AppEvent::Search(SearchEvent::ResultsReady { ticket, outcome }));
            })
        });
    }
}
