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

//! Terminal lifecycle and styling.
//!
//! Raw mode, the alternate screen and the emulator background colour are
//! set up together and torn down together. The background colour uses OSC 11
//! and OSC 111 escape sequences, which most modern terminals (XTerm, iTerm2,
//! Alacritty, Kitty) support.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Prepares the terminal for the application, painting the emulator
/// background with `background_hex` so no unstyled border shows.
pub(crate) fn setup_terminal(background_hex: &str) -> Result<Tui> {
    set_terminal_bg(background_hex).context("Failed to set terminal background")?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Best-effort reversal of [`setup_terminal`], safe to call during error
/// handling.
pub(crate) fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

fn set_terminal_bg(hex_color: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_color)?;
    stdout.flush()
}

fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
