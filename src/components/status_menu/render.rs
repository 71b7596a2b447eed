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

//! UI rendering logic for the status menu.
//!
//! The first row of the area holds the status button; the option list opens
//! below it, over whatever else occupies that space.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::{components::StatusMenu, render::Render, theme::Theme};

const MENU_WIDTH: u16 = 24;

impl Render for StatusMenu {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if area.height == 0 {
            return;
        }

        let marker = if self.is_open() { "▴" } else { "▾" };
        let saved = if self.controller.is_persistent() { "" } else { "  (not saved)" };
        let button = Line::from(vec![
            Span::styled("Status: ", Style::default().fg(theme.label_fg)),
            Span::styled(
                format!("[ {} {} ]", self.controller.label(), marker),
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
            ),
            Span::styled(saved, Style::default().fg(theme.muted_fg)),
        ]);
        f.render_widget(Paragraph::new(button), Rect { height: 1, ..area });

        if !self.is_open() {
            return;
        }

        let current = self.controller.status();
        let items: Vec<ListItem> = self
            .controller
            .options()
            .into_iter()
            .map(|(status, label)| {
                let tick = if status == current { "✓ " } else { "  " };
                ListItem::new(format!("{}{}", tick, label))
            })
            .collect();

        let popup = Rect {
            x: area.x + 8,
            y: area.y + 1,
            width: MENU_WIDTH.min(area.width.saturating_sub(8)),
            height: (items.len() as u16 + 2).min(area.height.saturating_sub(1)),
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.focus_border_colour)),
            )
            .style(Style::default().fg(theme.text_fg).bg(theme.background_colour))
            .highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg));

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut self.list_state);
    }
}
