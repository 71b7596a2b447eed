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

//! UI rendering logic for the media detail view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::DetailState;
use crate::{
    components::DetailView,
    model::MediaPage,
    render::Render,
    theme::Theme,
    util::format::{format_rating, format_runtime, format_year, join_names},
};

impl Render for DetailView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.is_active {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let message = match &mut self.state {
            DetailState::Empty => "Search for something and press Enter to open it".to_string(),
            DetailState::Loading(id) => format!("Loading {}...", id),
            DetailState::NotFound(id) => format!("Media not found: {}", id),
            DetailState::Failed(id) => format!("Could not load {}", id),
            DetailState::Loaded { page, status_menu } => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(2), Constraint::Min(0)])
                    .split(inner);

                f.render_widget(heading(page, theme), chunks[0]);

                f.render_widget(
                    Paragraph::new(facts(page, theme)).wrap(Wrap { trim: true }),
                    chunks[1],
                );

                // The menu opens over the facts, so it is drawn last
                status_menu.draw(f, chunks[1], theme);
                return;
            }
        };

        f.render_widget(
            Paragraph::new(message).style(Style::default().fg(theme.muted_fg)),
            inner,
        );
    }
}

fn heading<'a>(page: &'a MediaPage, theme: &Theme) -> Paragraph<'a> {
    let detail = &page.detail;
    let mut spans = vec![Span::styled(
        detail.title.as_str(),
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
    )];
    if let Some(year) = format_year(detail.release_date.as_deref()) {
        spans.push(Span::styled(format!(" ({})", year), Style::default().fg(theme.muted_fg)));
    }
    spans.push(Span::styled(
        format!("  {}", page.media_type().display_name()),
        Style::default().fg(theme.suggestion_category_fg),
    ));

    Paragraph::new(Line::from(spans))
}

fn facts<'a>(page: &'a MediaPage, theme: &Theme) -> Vec<Line<'a>> {
    let detail = &page.detail;
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(theme.label_fg)),
            Span::styled(value, Style::default().fg(theme.text_fg)),
        ])
    };

    // The status button is drawn over the first row
    let mut lines = vec![Line::from(""), Line::from("")];

    if let Some(creators) = join_names(&detail.creators()) {
        lines.push(field("By", creators));
    }
    if let Some(cast) = join_names(&detail.cast) {
        lines.push(field("Cast", cast));
    }
    if let Some(genres) = join_names(&detail.genres) {
        lines.push(field("Genres", genres));
    }
    if let Some(runtime) = detail.runtime.as_deref().filter(|r| !r.trim().is_empty()) {
        lines.push(field("Runtime", format_runtime(runtime)));
    }
    if let Some(pages) = detail.page_count {
        lines.push(field("Pages", pages.to_string()));
    }
    if let Some(studio) = &detail.studio {
        lines.push(field("Studio", studio.clone()));
    }
    if let Some(publisher) = &detail.publisher {
        lines.push(field("Publisher", publisher.clone()));
    }
    if let Some(isbn) = &detail.isbn {
        lines.push(field("ISBN", isbn.clone()));
    }
    if let Some(rating) = detail.rating {
        lines.push(field("Rating", format_rating(rating)));
    }

    if let Some(description) = detail.description.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::styled(description, Style::default().fg(theme.text_fg)));
    }

    lines
}
