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

//! UI rendering logic for the search view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::{
    components::SearchView,
    controller::search::MIN_QUERY_LEN,
    render::Render,
    theme::Theme,
};

impl Render for SearchView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_input(f, chunks[0], theme);
        if self.is_active {
            self.draw_suggestions(f, chunks[1], theme);
        }
    }
}

impl SearchView {
    fn draw_input(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = if self.controller.is_loading() {
            " Search (searching...) "
        } else {
            " Search "
        };

        let border = if self.is_active {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border));

        let inner = block.inner(area);
        let scroll = self.input.visual_scroll(inner.width.saturating_sub(1) as usize);

        f.render_widget(
            Paragraph::new(self.input.value())
                .style(Style::default().fg(theme.text_fg))
                .scroll((0, scroll as u16))
                .block(block),
            area,
        );

        if self.is_active {
            let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + cursor, inner.y));
        }
    }

    fn draw_suggestions(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let results = self.controller.results();

        if results.is_empty() {
            let hint = if self.controller.query().trim().chars().count() < MIN_QUERY_LEN {
                format!("Type at least {} characters to search", MIN_QUERY_LEN)
            } else if self.controller.is_loading() {
                "Searching...".to_string()
            } else {
                "No matches".to_string()
            };
            let line = Rect { height: area.height.min(1), ..area };
            f.render_widget(Clear, line);
            f.render_widget(
                Paragraph::new(format!(" {}", hint)).style(Style::default().fg(theme.muted_fg)),
                line,
            );
            return;
        }

        let items: Vec<ListItem> = results
            .iter()
            .map(|item| {
                let mut spans = vec![Span::styled(
                    item.title.clone(),
                    Style::default().fg(theme.suggestion_title_fg),
                )];
                if !item.year.is_empty() {
                    spans.push(Span::styled(
                        format!(" ({})", item.year),
                        Style::default().fg(theme.suggestion_year_fg),
                    ));
                }
                if !item.category.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", item.category),
                        Style::default().fg(theme.suggestion_category_fg),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let height = (items.len() as u16 + 2).min(area.height);
        let popup = Rect { height, ..area };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border_colour)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.highlight_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut self.list_state);
    }
}
