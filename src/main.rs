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

//! # Media Shelf TUI.
//!
//! A terminal client for a personal media collection tracker: search the
//! catalogue of books, movies, music and TV shows, open an item, record
//! whether it is planned, in progress or completed, and browse the
//! collection built up that way.
//!
//! ## Architecture
//!
//! * The **Main Task** manages the terminal lifecycle, owns all application
//!   state and renders the UI after every event.
//! * **Controllers** hold the interaction logic of the search bar and the
//!   status menu. Their timers and network calls run as tokio tasks that
//!   report back through the application event channel.
//! * A **Task Worker** loads media pages in the background.
//! * An **Input Thread** and a **Tick Task** feed keyboard events and
//!   periodic redraws into the same channel.
//!
//! The application follows a strict setup-run-teardown pattern so the
//! terminal state is restored even when the event loop fails.

mod commander;
mod components;
mod config;
mod controller;
mod db;
mod error;
mod events;
mod model;
mod render;
mod service;
mod session;
mod tasks;
mod theme;
mod util;

use std::{sync::Arc, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::event;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    commander::Commander,
    components::{CollectionView, DetailView, Footer, SearchView},
    controller::search::SearchController,
    events::{AppEvent, process_events},
    service::MediaService,
    session::SessionContext,
    tasks::AppTask,
    theme::Theme,
    util::term::{Tui, restore_terminal, setup_terminal},
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Search,
    Detail,
    Collection,
}

/// Application state.
struct App {
    pub session: SessionContext,
    pub service: Arc<dyn MediaService>,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: UnboundedSender<AppEvent>,
    pub event_rx: UnboundedReceiver<AppEvent>,

    pub task_tx: UnboundedSender<AppTask>,

    pub search_view: SearchView,
    pub detail_view: DetailView,
    pub collection_view: CollectionView,
    pub footer: Footer,

    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state.
    fn new(
        session: SessionContext,
        service: Arc<dyn MediaService>,
        task_tx: UnboundedSender<AppTask>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let search = SearchController::new(Arc::clone(&service), event_tx.clone(), Vec::new());

        Self {
            session,
            service,
            theme: Theme::default(),
            main_view: MainView::Search,
            event_tx,
            event_rx,
            task_tx,
            search_view: SearchView::new(search),
            detail_view: DetailView::new(),
            collection_view: CollectionView::new(),
            footer: Footer::new(),
            commander: Commander::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, connects to the media service,
/// then runs the user interface until the user quits.
#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load_config();

    util::logging::init_logging(&config.log_file).context("Failed to initialise logging")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let session = SessionContext::resolve(&config);
    let service = service::connect(&config).context("Failed to connect to the media service")?;

    let (task_tx, task_rx) = mpsc::unbounded_channel();
    let mut app = App::new(session, service, task_tx);

    tasks::spawn_task_worker(
        Arc::clone(&app.service),
        app.session.clone(),
        task_rx,
        app.event_tx.clone(),
    );

    let mut terminal = setup_terminal(&background_hex(&app.theme))?;
    let res = run(&mut terminal, &mut app).await;
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        tracing::error!(error = %format!("{:#}", e), "application error");
    }
    tracing::info!("exiting");

    res.context("Application error occurred")
}

fn background_hex(theme: &Theme) -> String {
    Theme::to_hex(theme.background_colour).unwrap_or_else(|| "#000000".to_string())
}

/// Starts the input sources and enters the main event loop.
///
/// * An input thread translates terminal key events into application events;
///   `crossterm::event::read` blocks, so it gets a thread of its own.
/// * A tick task sends a periodic redraw, effectively the minimum "frame
///   rate" of the UI.
async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(error = %e, "failed to read terminal input");
                    break;
                }
            }
        }
    });

    let tx_tick = app.event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    terminal.draw(|f| render::draw(f, app))?;

    process_events(terminal, app).await
}
