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

//! File-based logging.
//!
//! The TUI owns the terminal, so log output goes to a daily rolling file
//! instead of stdout or stderr.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "mediashelf";

/// Initialises the global `tracing` subscriber.
///
/// Logs are written to `.logs/mediashelf.YYYY-MM-DD`. The level can be set
/// with `RUST_LOG`, the default being debug for this application and warn for
/// everything else.
///
/// The returned guard flushes buffered log lines when dropped, so it must be
/// kept alive for as long as the application runs.
pub(crate) fn init_logging() -> Result<WorkerGuard> {
    fs::create_dir_all(LOG_DIR).context("Failed to create log directory")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mediashelf=debug,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("Logging initialised, writing to {}/", LOG_DIR);

    Ok(guard)
}
