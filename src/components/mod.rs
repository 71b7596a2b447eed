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

//! Interactive views.
//!
//! Each view owns its widget state and, where it has one, the controller
//! behind it. Views consume key events through `process_event` and draw
//! themselves through [`crate::render::Render`].

mod collection;
mod detail;
mod footer;
mod search;
mod status_menu;

pub(crate) use collection::{CollectionAction, CollectionView};
pub(crate) use detail::DetailView;
pub(crate) use footer::Footer;
pub(crate) use search::{SearchAction, SearchView};
pub(crate) use status_menu::StatusMenu;
