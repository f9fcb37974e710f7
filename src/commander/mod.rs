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

//! Command-line input logic and state management.
//!
//! This module implements the command-line component: a text input opened
//! with `:`, which parses the submitted line into an [`AppCommand`] and sends
//! it to the event loop.
//!
//! # Commands
//!
//! | Command                                   | Action                          |
//! |-------------------------------------------|---------------------------------|
//! | `song title\|format\|language\|length\|performers` | Add a song             |
//! | `video title\|format\|language\|length\|director\|actors` | Add a video     |
//! | `fl <language>` / `ff <format>`           | Filter the library              |
//! | `nf`                                      | Clear the filter                |
//! | `read <file>` / `write <file>`            | Import or export a library file |
//! | `has <name>`                              | Does the selection feature name |
//! | `info`, `rm`                              | Show or remove the selection    |
//! | `ap`, `prm`, `mv <position>`, `len`       | Playlist add, remove, move, runtime |
//! | `save`, `q`                               | Toggle save on exit, quit       |

use std::{path::PathBuf, sync::mpsc::Sender};

use crossterm::event::{Event, KeyCode};
use mediashelf::{Filter, MediaKind};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::{
        commands::{AppCommand, MediaForm},
        events::AppEvent,
    },
    browser::BrowserPane,
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if !buffer.is_empty() {
                    let event = match parse_command(&buffer) {
                        Ok(command) => AppEvent::Command(command),
                        Err(message) => AppEvent::Error(message),
                    };
                    let _ = event_tx.send(event);
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(&event);
            }
        }

        true
    }
}

/// Parses a submitted command line.
///
/// The first word names the command, the rest of the line (with its spacing
/// kept) is the argument.
pub(crate) fn parse_command(buffer: &str) -> Result<AppCommand, String> {
    let buffer = buffer.trim();
    let (name, rest) = match buffer.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (buffer, ""),
    };

    let command = match (name, rest) {
        ("q", "") => AppCommand::ExitApplication,

        ("song", fields) => media_form(MediaKind::Song, fields)?,
        ("video", fields) => media_form(MediaKind::Video, fields)?,

        ("fl", language) if !language.is_empty() => {
            AppCommand::SetFilter(Filter::Language(language.to_string()))
        }
        ("ff", format) if !format.is_empty() => {
            AppCommand::SetFilter(Filter::Format(format.to_string()))
        }
        ("fl" | "ff", _) => return Err("Enter something to filter by".to_string()),
        ("nf", "") => AppCommand::ClearFilter,

        ("read", path) if !path.is_empty() => AppCommand::ImportLibrary(PathBuf::from(path)),
        ("write", path) if !path.is_empty() => AppCommand::ExportLibrary(PathBuf::from(path)),
        ("read" | "write", _) => return Err("Enter a file name".to_string()),

        ("has", name) => AppCommand::HasPerson(name.to_string()),
        ("info", "") => AppCommand::ShowInfo,
        ("rm", "") => AppCommand::RemoveSelected,

        ("ap", "") => AppCommand::AddSelectionToPlaylist,
        ("prm", "") => AppCommand::RemoveFromPlaylist,
        ("mv", position) => {
            let position = position
                .parse()
                .map_err(|_| format!("'{position}' is not a playlist position"))?;
            AppCommand::MoveInPlaylist(position)
        }
        ("len", "") => AppCommand::ShowRuntime,

        ("save", "") => AppCommand::ToggleSaveOnExit,

        ("1", "") => AppCommand::SetPane(BrowserPane::Library),
        ("2", "") => AppCommand::SetPane(BrowserPane::Playlist),

        (name, _) => return Err(format!("Unknown command '{name}'")),
    };

    Ok(command)
}

fn media_form(kind: MediaKind, fields: &str) -> Result<AppCommand, String> {
    if fields.is_empty() {
        let names = MediaForm::field_names(kind).join(" | ");
        return Err(format!("Usage: {} {names}", kind.as_str().to_lowercase()));
    }

    Ok(AppCommand::AddMedia(MediaForm {
        kind,
        fields: fields.split('|').map(str::to_string).collect(),
    }))
}
