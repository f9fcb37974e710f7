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

//! Render the record information popup.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::theme::Theme;

const POPUP_WIDTH: u16 = 60;

/// Draws `text` in a bordered box centred over `area`.
pub(crate) fn draw_popup(f: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    // Text lines, plus borders and padding
    let height = text.lines().count() as u16 + 4;
    let popup_area = centered(area, POPUP_WIDTH, height);

    let block = Block::default()
        .title(" Info ")
        .title_bottom(" Esc to close ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .padding(Padding::uniform(1));

    f.render_widget(Clear, popup_area);
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        popup_area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
