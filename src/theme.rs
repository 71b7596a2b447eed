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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette and converts
//! colours to the hexadecimal form used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_border_colour: Color,
    pub(crate) footer_bg: Color,
    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) suggestion_title_fg: Color,
    pub(crate) suggestion_year_fg: Color,
    pub(crate) suggestion_category_fg: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) label_fg: Color,
    pub(crate) text_fg: Color,
    pub(crate) muted_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            focus_border_colour: Color::Rgb(250, 189, 47),
            footer_bg: Color::Rgb(50, 30, 60),
            commander_colour: Color::Rgb(255, 255, 255),
            error_colour: Color::Rgb(240, 98, 98),

            suggestion_title_fg: Color::Rgb(255, 255, 255),
            suggestion_year_fg: Color::Rgb(162, 161, 166),
            suggestion_category_fg: Color::Rgb(179, 157, 219),
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,

            label_fg: Color::Rgb(255, 215, 0),
            text_fg: Color::Rgb(230, 230, 230),
            muted_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts an RGB colour into a CSS-style hexadecimal string, `None` for
    /// any other kind of colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_rgb_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(40, 20, 50)), Some("#281432".to_string()));
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
