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

//! UI rendering logic for the collection view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use super::CollectionState;
use crate::{
    components::CollectionView,
    model::{CollectionEntry, CollectionStatus, MediaType},
    render::Render,
    theme::Theme,
};

impl Render for CollectionView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.is_active {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };
        let title = self
            .filter()
            .map(|filter| format!(" {} ", filter.describe()))
            .unwrap_or_default();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let message = match &self.state {
            CollectionState::Empty => "Use :collection to list your collection".to_string(),
            CollectionState::Loading(_) => "Loading collection...".to_string(),
            CollectionState::Failed { message, .. } => message.clone(),
            CollectionState::Loaded { entries, .. } if entries.is_empty() => {
                "Nothing here yet".to_string()
            }
            CollectionState::Loaded { entries, .. } => {
                let items: Vec<ListItem> = entries.iter().map(|e| row(e, theme)).collect();
                let list = List::new(items)
                    .highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg));
                f.render_stateful_widget(list, inner, &mut self.list_state);
                return;
            }
        };

        f.render_widget(
            Paragraph::new(message).style(Style::default().fg(theme.muted_fg)),
            inner,
        );
    }
}

fn row<'a>(entry: &'a CollectionEntry, theme: &Theme) -> ListItem<'a> {
    let verbs = entry.media_type.unwrap_or(MediaType::Movie).verbs();
    let status = CollectionStatus::from(Some(entry.status)).label(&verbs);
    let kind = entry.media_type.map(|t| t.display_name()).unwrap_or("");

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<20}", status),
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        ),
        Span::styled(entry.display_title(), Style::default().fg(theme.text_fg)),
        Span::styled(format!("  {}", kind), Style::default().fg(theme.suggestion_category_fg)),
    ]))
}
