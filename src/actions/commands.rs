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

//! Application command processing.
//!
//! Every user action, whether typed on the command line or bound to a key,
//! becomes an [`AppCommand`]. [`handle_command`] applies it to the library and
//! playlist and reports the outcome on the status line. Failures are returned
//! to the event loop, which logs them and shows them to the user.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail, ensure};
use mediashelf::{Filter, Library, MediaInfo, MediaKind, MediaRecord, Song, Video, parse_length, split_names};

use crate::{
    App,
    actions::events::AppEvent,
    browser::{BrowserPane, MediaBrowser},
    config,
    util::format::format_time,
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum AppCommand {
    AddMedia(MediaForm),
    RemoveSelected,
    SetFilter(Filter),
    ClearFilter,
    ImportLibrary(PathBuf),
    ExportLibrary(PathBuf),
    HasPerson(String),
    ShowInfo,
    AddSelectionToPlaylist,
    RemoveFromPlaylist,
    MoveInPlaylist(usize),
    ShiftInPlaylist(isize),
    ShowRuntime,
    ToggleSaveOnExit,
    SetPane(BrowserPane),
    ExitApplication,
}

/// Raw text fields for a new record, in the order they are entered.
///
/// Songs take title, format, language, length and performers. Videos take
/// title, format, language, length, director and actors.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct MediaForm {
    pub(crate) kind: MediaKind,
    pub(crate) fields: Vec<String>,
}

impl MediaForm {
    pub(crate) fn field_names(kind: MediaKind) -> &'static [&'static str] {
        match kind {
            MediaKind::Song => &["title", "format", "language", "length", "performers"],
            MediaKind::Video => &["title", "format", "language", "length", "director", "actors"],
        }
    }

    /// Validates the form and builds the record.
    ///
    /// Every field must be filled in and the length must be a whole number of
    /// seconds. Name lists are comma-separated.
    pub(crate) fn into_record(self) -> Result<MediaRecord> {
        let names = Self::field_names(self.kind);
        ensure!(
            self.fields.len() == names.len(),
            "A {} needs {} fields: {}",
            self.kind,
            names.len(),
            names.join(" | ")
        );

        if let Some(i) = self.fields.iter().position(|f| f.trim().is_empty()) {
            bail!("The {} field is blank", names[i]);
        }

        let mut fields = self.fields.into_iter().map(|f| f.trim().to_string());
        let mut next = || fields.next().unwrap_or_default();

        let title = next();
        let format = next();
        let language = next();
        let length = parse_length(&next())?;
        let info = MediaInfo::new(title, format, language, length);

        let record = match self.kind {
            MediaKind::Song => Song::new(info, split_names(&next())).into(),
            MediaKind::Video => {
                let director = next();
                Video::new(info, director, split_names(&next())).into()
            }
        };

        Ok(record)
    }
}

/// Applies a single command to the application state.
pub(crate) fn handle_command(app: &mut App, command: AppCommand) -> Result<()> {
    tracing::debug!(?command, "Handling command");

    match command {
        AppCommand::AddMedia(form) => {
            let record = form.into_record()?;
            let title = record.title().to_string();
            app.library.add(record);
            app.browser.clear_filter(&app.library);
            app.set_status(format!("'{title}' has been added"));
        }
        AppCommand::RemoveSelected => {
            ensure!(
                app.browser.filter().is_none(),
                "Clear the filter before removing library items"
            );
            let position = selected_library_position(app)?;
            let removed = app.library.remove_at(position)?;
            app.browser.refresh_library(&app.library);
            app.set_status(format!("'{}' has been removed", removed.title()));
        }
        AppCommand::SetFilter(filter) => {
            let label = filter.to_string();
            app.browser.set_filter(filter, &app.library);
            app.set_status(format!(
                "Filtered by {label}, {} item(s)",
                app.browser.visible().len()
            ));
        }
        AppCommand::ClearFilter => {
            app.browser.clear_filter(&app.library);
            app.set_status("Filter off");
        }
        AppCommand::ImportLibrary(path) => {
            let result = app.library.import_from(&path);
            // Rows read before a failure are kept, so refresh either way.
            app.browser.refresh_library(&app.library);
            let count = result.with_context(|| {
                format!("Issue reading {}, check the file format", path.display())
            })?;
            app.browser.clear_filter(&app.library);
            tracing::info!(path = %path.display(), count, "Imported library file");
            app.set_status(format!("Read {count} item(s) from {}", path.display()));
        }
        AppCommand::ExportLibrary(path) => {
            app.library.export_to(&path)?;
            tracing::info!(path = %path.display(), count = app.library.len(), "Exported library file");
            app.set_status(format!(
                "Wrote {} item(s) to {}",
                app.library.len(),
                path.display()
            ));
        }
        AppCommand::HasPerson(name) => {
            let name = name.trim();
            ensure!(!name.is_empty(), "Enter a name to look for");
            let record = selected_library_record(&app.browser, &app.library)?;
            let verb = if record.matches_person(name) { "features" } else { "does not feature" };
            let text = format!("The media '{}' {verb} '{name}'", record.title());
            app.set_status(text);
        }
        AppCommand::ShowInfo => {
            let text = match app.browser.active_pane {
                BrowserPane::Library => {
                    let record = selected_library_record(&app.browser, &app.library)?;
                    format!("{}\n\n{}", record.kind(), record.describe())
                }
                BrowserPane::Playlist => {
                    let position = selected_playlist_position(app)?;
                    app.playlist
                        .get(position)
                        .map(|song| song.to_string())
                        .ok_or_else(|| anyhow!("Select a playlist item"))?
                }
            };
            app.show_popup(text);
        }
        AppCommand::AddSelectionToPlaylist => {
            let record = selected_library_record(&app.browser, &app.library)?;
            app.playlist
                .append(record)
                .context("Videos cannot be added to the playlist, try a song")?;
            app.browser.refresh_playlist(&app.playlist);
        }
        AppCommand::RemoveFromPlaylist => {
            let position = selected_playlist_position(app)?;
            let removed = app.playlist.remove_at(position)?;
            app.browser.refresh_playlist(&app.playlist);
            app.set_status(format!("'{}' removed from the playlist", removed.info.title));
        }
        AppCommand::MoveInPlaylist(to) => {
            let from = selected_playlist_position(app)?;
            ensure!(
                to < app.playlist.len(),
                "Position {to} is out of bounds, the playlist has {} item(s)",
                app.playlist.len()
            );
            app.playlist.move_to(from, to)?;
            app.browser.select_playlist_position(to);
        }
        AppCommand::ShiftInPlaylist(delta) => {
            let from = selected_playlist_position(app)?;
            let to = from
                .checked_add_signed(delta)
                .filter(|&to| to < app.playlist.len());
            if let Some(to) = to {
                app.playlist.move_to(from, to)?;
                app.browser.select_playlist_position(to);
            }
        }
        AppCommand::ShowRuntime => {
            let text = if app.playlist.is_empty() {
                "Your playlist is empty, try adding some songs".to_string()
            } else {
                let runtime = app.playlist.total_runtime();
                format!("Your playlist is {runtime} seconds long ({})", format_time(runtime))
            };
            app.set_status(text);
        }
        AppCommand::ToggleSaveOnExit => {
            app.config.save_on_exit = !app.config.save_on_exit;
            config::save_config(&app.config).context("Failed to save configuration")?;
            let state = if app.config.save_on_exit { "on" } else { "off" };
            app.set_status(format!("Save on exit is {state}"));
        }
        AppCommand::SetPane(pane) => app.browser.set_pane(pane),
        AppCommand::ExitApplication => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}

fn selected_library_position(app: &App) -> Result<usize> {
    app.browser
        .selected_library_position()
        .ok_or_else(|| anyhow!("Select an item from the library first"))
}

fn selected_library_record<'a>(browser: &MediaBrowser, library: &'a Library) -> Result<&'a MediaRecord> {
    browser
        .selected_library_position()
        .and_then(|position| library.get(position))
        .ok_or_else(|| anyhow!("Select an item from the library first"))
}

fn selected_playlist_position(app: &App) -> Result<usize> {
    app.browser
        .selected_playlist_position(&app.playlist)
        .ok_or_else(|| anyhow!("Select a playlist item first"))
}
