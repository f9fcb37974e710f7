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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) active_border_colour: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,
    pub(crate) status_info_fg: Color,
    pub(crate) status_error_fg: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_people_fg: Color,
    pub(crate) table_detail_fg: Color,
    pub(crate) table_missing_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            active_border_colour: Color::Rgb(250, 189, 47),
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,

            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg: Color::Rgb(50, 30, 60),
            status_info_fg: Color::Rgb(162, 161, 166),
            status_error_fg: Color::Rgb(255, 95, 95),

            table_title_fg: Color::Rgb(255, 255, 255),
            table_people_fg: Color::Rgb(255, 215, 0),
            table_detail_fg: Color::Rgb(179, 157, 219),
            table_missing_fg: Color::Rgb(102, 102, 102),
        }
    }

    pub(crate) fn border(&self, active: bool) -> Color {
        if active {
            self.active_border_colour
        } else {
            self.border_colour
        }
    }
}
