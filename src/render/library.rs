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

//! Render the library table.
//!
//! One row per visible record, showing its position (within the current view)
//! and every field. Columns that do not apply to a record's kind show a
//! placeholder.

use mediashelf::MediaRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{
    App,
    browser::BrowserPane,
    theme::Theme,
    util::format::{NOT_APPLICABLE, format_names, format_time},
};

/// Renders the library table, including the filter state in its title.
pub(crate) fn draw_library(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let rows = app
        .browser
        .visible()
        .iter()
        .enumerate()
        .filter_map(|(row, &position)| Some((row, app.library.get(position)?)))
        .map(|(row, record)| record_row(row, record, theme));

    let title = match app.browser.filter() {
        Some(filter) => format!(" Library (filter on, {filter}) "),
        None => format!(" Library ({}) ", app.library.len()),
    };

    let active = app.browser.active_pane == BrowserPane::Library;

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(22),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(Line::from("Pos").alignment(Alignment::Right)),
            Cell::from("Title"),
            Cell::from("Format"),
            Cell::from("Language"),
            Cell::from(Line::from("Length").alignment(Alignment::Right)),
            Cell::from("Performers"),
            Cell::from("Director"),
            Cell::from("Actors"),
        ])
        .style(Style::default().bold().fg(theme.accent_colour))
        .bottom_margin(1),
    )
    .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border(active))),
    );

    f.render_stateful_widget(table, area, &mut app.browser.library_state);
}

fn record_row<'a>(row: usize, record: &'a MediaRecord, theme: &Theme) -> Row<'a> {
    let info = record.info();

    let (performers, director, actors) = match record {
        MediaRecord::Song(song) => (
            format_names(Some(song.performers.as_slice())),
            NOT_APPLICABLE.to_string(),
            format_names(None),
        ),
        MediaRecord::Video(video) => (
            format_names(None),
            video.director.clone(),
            format_names(Some(video.actors.as_slice())),
        ),
    };

    let people = Style::default().fg(theme.table_people_fg);
    let detail = Style::default().fg(theme.table_detail_fg);
    let missing = Style::default().fg(theme.table_missing_fg);
    let people_style = |text: &str| if text == NOT_APPLICABLE { missing } else { people };

    Row::new(vec![
        Cell::from(Line::from(row.to_string()).alignment(Alignment::Right)).style(detail),
        Cell::from(info.title.as_str()).style(Style::default().fg(theme.table_title_fg)),
        Cell::from(info.format.as_str()).style(detail),
        Cell::from(info.language.as_str()).style(detail),
        Cell::from(Line::from(format_time(info.length.into())).alignment(Alignment::Right))
            .style(detail),
        Cell::from(performers.clone()).style(people_style(&performers)),
        Cell::from(director.clone()).style(people_style(&director)),
        Cell::from(actors.clone()).style(people_style(&actors)),
    ])
}
