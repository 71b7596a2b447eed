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

//! Render the command-line interface.
//!
//! While the command line is open it shows the text being typed and the
//! cursor; otherwise it shows the key bindings of the active view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, MainView};

const SEARCH_HINT: &str = "↑↓ choose  Enter open  Esc clear  Tab details  : command  Ctrl+C quit";
const DETAIL_HINT: &str = "s status  c collection  / search  : command  q quit";
const COLLECTION_HINT: &str = "↑↓ choose  Enter open  n/p page  r reload  / search  q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let (text, fg) = if commander.active() {
        (format!(":{}", commander.input.value()), app.theme.commander_colour)
    } else {
        let hint = match app.main_view {
            MainView::Search => SEARCH_HINT,
            MainView::Detail => DETAIL_HINT,
            MainView::Collection => COLLECTION_HINT,
        };
        (hint.to_string(), app.theme.muted_fg)
    };

    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(fg).bg(app.theme.background_colour)),
        container[0],
    );

    if commander.active() {
        let cursor_x = container[0].x + 1 + commander.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
