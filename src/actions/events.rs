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

//! Application events and the main event loop.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::commands::{AppCommand, handle_command},
    browser::BrowserPane,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Command(AppCommand),
    Error(String),
    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed. A failing command never ends the loop, it is logged and shown
/// on the status line instead.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Command(command) => {
                if let Err(e) = handle_command(app, command) {
                    tracing::warn!("Command failed: {e:#}");
                    app.set_error(format!("{e:#}"));
                }
            }
            AppEvent::Error(message) => app.set_error(message),
            AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Routes a key press to the popup, the command line, or the global key
/// bindings, in that order.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.popup.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.popup = None;
        }
        return Ok(());
    }

    let handled = app.commander.handle_event(Event::Key(key), &app.event_tx);
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

/// Maps keyboard input to application commands.
///
/// * **Application Control**: quit, command line (handled by the commander).
/// * **Navigation**: switch pane, move the selection.
/// * **Library**: remove, show info, clear the filter.
/// * **Playlist**: add the selected song, remove, reorder, show runtime.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let playlist_len = app.playlist.len();
    let in_library = app.browser.active_pane == BrowserPane::Library;

    let command = match key.code {
        KeyCode::Char('q') => Some(AppCommand::ExitApplication),

        KeyCode::Tab => {
            app.browser.next_pane();
            None
        }
        KeyCode::Char('1') => Some(AppCommand::SetPane(BrowserPane::Library)),
        KeyCode::Char('2') => Some(AppCommand::SetPane(BrowserPane::Playlist)),

        // Navigation: Down / j
        KeyCode::Char('j') | KeyCode::Down => {
            app.browser.next(playlist_len);
            None
        }
        // Navigation: Up / k
        KeyCode::Char('k') | KeyCode::Up => {
            app.browser.previous(playlist_len);
            None
        }

        KeyCode::Char('i') | KeyCode::Enter => Some(AppCommand::ShowInfo),
        KeyCode::Char('r') => Some(AppCommand::ClearFilter),
        KeyCode::Char('a') => Some(AppCommand::AddSelectionToPlaylist),
        KeyCode::Char('t') => Some(AppCommand::ShowRuntime),
        KeyCode::Char('s') => Some(AppCommand::ToggleSaveOnExit),

        KeyCode::Char('d') | KeyCode::Delete if in_library => Some(AppCommand::RemoveSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(AppCommand::RemoveFromPlaylist),

        KeyCode::Char('J') if !in_library => Some(AppCommand::ShiftInPlaylist(1)),
        KeyCode::Char('K') if !in_library => Some(AppCommand::ShiftInPlaylist(-1)),

        _ => None,
    };

    if let Some(command) = command {
        app.event_tx.send(AppEvent::Command(command))?;
    }

    Ok(())
}
