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

//! Render the playlist.
//!
//! This module renders the songs queued in the playlist, numbered by
//! playlist position, with the total runtime in the title.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
};

use crate::{App, browser::BrowserPane, util::format::format_time};

/// Renders the playlist widget.
pub(crate) fn draw_playlist(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let items: Vec<ListItem> = app
        .playlist
        .all()
        .iter()
        .enumerate()
        .map(|(position, song)| ListItem::new(format!("{position}: {}", song.info.title)))
        .collect();

    let title = format!(
        " Playlist ({}) ",
        format_time(app.playlist.total_runtime())
    );

    let active = app.browser.active_pane == BrowserPane::Playlist;

    let list = List::new(items)
        .block(Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border(active)))
        )
        .highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.browser.playlist_state);
}
