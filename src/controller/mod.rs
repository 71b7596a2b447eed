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

//! Interaction controllers.
//!
//! Controllers own the state behind an interactive widget and are driven
//! exclusively by the UI event loop. Asynchronous work (timers, network
//! calls) runs as tokio tasks that report back by sending an
//! [`crate::events::AppEvent`]; the controller then decides whether the
//! report is still relevant.
//!
//! * [`search`]: debounced incremental search with in-flight cancellation.
//! * [`status`]: optimistic collection status selection with serialized
//!   persistence.

pub(crate) mod search;
pub(crate) mod status;

use tokio::task::JoinHandle;

/// Identifies one operation started through a [`PendingSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket(u64);

/// Holds at most one pending asynchronous operation.
///
/// Starting a new operation aborts the previous one first. Because an
/// aborted task may already have queued its report, reports carry the
/// [`Ticket`] they were started with and are only accepted while that ticket
/// is still the current one.
#[derive(Debug, Default)]
pub(crate) struct PendingSlot {
    issued: u64,
    handle: Option<JoinHandle<()>>,
}

impl PendingSlot {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending operation, then starts a new one via `spawn`.
    pub(crate) fn start<F>(&mut self, spawn: F) -> Ticket
    where
        F: FnOnce(Ticket) -> JoinHandle<()>,
    {
        self.cancel();
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.handle = Some(spawn(ticket));
        ticket
    }

    /// Aborts the pending operation, returning whether there was one.
    pub(crate) fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    /// Accepts the report for `ticket` if it belongs to the pending
    /// operation, clearing the slot. Stale tickets are rejected.
    pub(crate) fn complete(&mut self, ticket: Ticket) -> bool {
        if self.handle.is_some() && ticket.0 == self.issued {
            self.handle = None;
            true
        } else {
            false
        }
    }
}

impl Drop for PendingSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        time::Duration,
    };

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn starting_again_aborts_the_previous_operation() {
        let mut slot = PendingSlot::new();
        let first_ran = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&first_ran);
        let first = slot.start(|_| {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                flag.store(true, Ordering::SeqCst);
            })
        });
        let second = slot.start(|_| tokio::spawn(async {}));

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!first_ran.load(Ordering::SeqCst));
        assert!(!slot.complete(first));
        assert!(slot.complete(second));
        assert!(!slot.is_pending());
    }

    #[tokio::test]
    async fn cancelled_ticket_is_rejected() {
        let mut slot = PendingSlot::new();
        let ticket = slot.start(|_| tokio::spawn(async {}));

        assert!(slot.cancel());
        assert!(!slot.cancel());
        assert!(!slot.complete(ticket));
    }
}
