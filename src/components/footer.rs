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

//! The footer line showing the latest notice or error.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Paragraph,
};

use crate::{render::Render, theme::Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Info(String),
    Error(String),
}

#[derive(Debug, Default)]
pub(crate) struct Footer {
    notice: Option<Notice>,
}

impl Footer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn info(&mut self, message: String) {
        self.notice = Some(Notice::Info(message));
    }

    pub(crate) fn error(&mut self, message: String) {
        self.notice = Some(Notice::Error(message));
    }

    pub(crate) fn clear(&mut self) {
        self.notice = None;
    }
}

impl Render for Footer {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (text, fg) = match &self.notice {
            Some(Notice::Info(message)) => (message.as_str(), theme.text_fg),
            Some(Notice::Error(message)) => (message.as_str(), theme.error_colour),
            None => ("", theme.muted_fg),
        };

        f.render_widget(
            Paragraph::new(format!(" {}", text)).style(Style::default().fg(fg).bg(theme.footer_bg)),
            area,
        );
    }
}
