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

//! # Media Library TUI.
//!
//! A terminal-based manager for a library of songs and videos, and a playlist
//! of songs built from it.
//!
//! This application is the presentation shell around the `mediashelf` core
//! library. It renders the library and playlist with `ratatui` and turns key
//! presses and typed commands into core operations.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a failure. A background
//! thread reads raw key events and forwards them over a `std::sync::mpsc`
//! channel. Every state change happens on the main thread, which owns the
//! library and playlist.
//!
//! On startup the default library file is loaded, and with save-on-exit
//! enabled the library is written back to it on quit.

mod actions;
mod browser;
mod commander;
mod config;
mod logging;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mediashelf::{Library, Playlist};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    actions::events::{AppEvent, process_events},
    browser::MediaBrowser,
    commander::Commander,
    config::AppConfig,
    theme::Theme,
};

/// Feedback shown on the status line.
pub(crate) enum Status {
    Info(String),
    Error(String),
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,
    pub library_file: PathBuf,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub library: Library,
    pub playlist: Playlist,

    pub browser: MediaBrowser,
    pub commander: Commander,

    pub status: Option<Status>,
    pub popup: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let library_file = config.library_file();

        Self {
            config,
            library_file,
            theme: Theme::default(),
            event_tx,
            event_rx,
            library: Library::new(),
            playlist: Playlist::new(),
            browser: MediaBrowser::new(),
            commander: Commander::new(),
            status: None,
            popup: None,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(Status::Info(text.into()));
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(Status::Error(text.into()));
    }

    pub fn show_popup(&mut self, text: impl Into<String>) {
        self.popup = Some(text.into());
    }

    /// Loads the default library file, if there is one.
    ///
    /// A missing or malformed file is not an error, the library simply starts
    /// with whatever could be read.
    fn load_library_file(&mut self) {
        match self.library.import_from(&self.library_file) {
            Ok(count) => {
                tracing::info!(path = %self.library_file.display(), count, "Loaded library file");
            }
            Err(e) => {
                tracing::warn!(path = %self.library_file.display(), "Library file not loaded: {e}");
            }
        }
        self.browser.refresh_library(&self.library);
    }

    /// Writes the library back to the default library file when save-on-exit
    /// is enabled.
    fn save_library_file(&self) -> Result<()> {
        if !self.config.save_on_exit {
            return Ok(());
        }

        self.library
            .export_to(&self.library_file)
            .with_context(|| format!("Issue saving {}", self.library_file.display()))?;
        tracing::info!(path = %self.library_file.display(), "Saved library on exit");

        Ok(())
    }
}

/// The entry point of the application.
///
/// Sets up logging and the application state, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let _log_guard = logging::init_logging().context("Failed to initialise logging")?;

    let config = config::load_config();
    tracing::info!(?config, "Starting");

    let mut app = App::new(config);
    app.load_library_file();

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = app.save_library_file() {
        tracing::error!("{e:#}");
        eprintln!("{e:#}");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function enables raw mode to capture all keyboard input and switches
/// the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error, such as a failure to draw.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
