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

//! Application configuration.
//!
//! This module manages the application configuration file and works out where
//! the default library file lives.

use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "mediashelf";

const DEFAULT_LIBRARY_FILE: &str = "init_library.csv";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    /// Library file loaded at startup, and saved to on exit when enabled.
    /// Defaults to `init_library.csv` beside the launched executable.
    pub library_file: Option<PathBuf>,
    pub save_on_exit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            library_file: None,
            save_on_exit: false,
        }
    }
}

impl AppConfig {
    pub fn library_file(&self) -> PathBuf {
        self.library_file.clone().unwrap_or_else(default_library_file)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

/// The library file in the same directory as the program as it was launched
/// (`argv[0]`), falling back to the working directory.
fn default_library_file() -> PathBuf {
    env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|program| program.parent().map(PathBuf::from))
        .unwrap_or_default()
        .join(DEFAULT_LIBRARY_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_library_file_wins() {
        let config = AppConfig {
            library_file: Some(PathBuf::from("/tmp/mine.csv")),
            ..AppConfig::default()
        };
        assert_eq!(config.library_file(), PathBuf::from("/tmp/mine.csv"));
    }

    #[test]
    fn default_library_file_sits_beside_the_program() {
        let path = AppConfig::default().library_file();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(DEFAULT_LIBRARY_FILE));
    }
}
