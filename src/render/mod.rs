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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled event to provide a reactive user interface.

mod commander;
mod library;
mod playlist;
mod popup;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
};

use crate::{
    App, Status,
    render::{
        commander::draw_commander, library::draw_library, playlist::draw_playlist,
        popup::draw_popup,
    },
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the library table and playlist side by side,
/// with a status line and the command line underneath. An info popup, when
/// open, is drawn over everything else.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like list scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: main, status, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Main layout: library, playlist
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(outer[0]);

    draw_library(f, main[0], app);
    draw_playlist(f, main[1], app);

    draw_status(f, outer[1], app);
    draw_commander(f, outer[2], app);

    if let Some(text) = &app.popup {
        draw_popup(f, area, text, &app.theme);
    }
}

fn draw_status(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let (text, colour) = match &app.status {
        Some(Status::Info(text)) => (text.as_str(), app.theme.status_info_fg),
        Some(Status::Error(text)) => (text.as_str(), app.theme.status_error_fg),
        None => ("Press : for commands, q to quit", app.theme.status_info_fg),
    };

    let save = if app.config.save_on_exit { " [save on exit]" } else { "" };

    f.render_widget(
        Paragraph::new(format!(" {text}{save}")).style(Style::default().fg(colour)),
        area,
    );
}
