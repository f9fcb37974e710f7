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

//! Error types for the media library core.
//!
//! Every fallible core operation reports one of the [`MediaError`] variants.
//! Nothing is logged or retried here, the presentation layer decides how to
//! surface a failure to the user.

use std::{io, path::PathBuf};

use thiserror::Error;

/// A failure reported by the library, playlist or file codec.
#[derive(Debug, Error)]
pub enum MediaError {
    /// A field value could not be coerced, e.g. a non-numeric play length.
    #[error("invalid {field}: '{value}'")]
    Validation { field: &'static str, value: String },

    /// A position outside the bounds of a collection.
    #[error("position {position} is out of bounds for a collection of {len} item(s)")]
    Bounds { position: usize, len: usize },

    /// A malformed row in a library file.
    #[error("line {line}: {reason}")]
    Decode { line: u64, reason: String },

    /// A library file could not be opened, created, read or written.
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record of the wrong kind was given to a collection, e.g. a video
    /// appended to a playlist.
    #[error("'{title}' is a {found}, expected a {expected}")]
    TypeMismatch {
        title: String,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, MediaError>;

impl MediaError {
    pub(crate) fn validation(field: &'static str, value: impl Into<String>) -> Self {
        Self::Validation {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn decode(line: u64, reason: impl Into<String>) -> Self {
        Self::Decode {
            line,
            reason: reason.into(),
        }
    }

    /// Classifies an error raised by the `csv` crate.
    ///
    /// Errors from the underlying reader or writer are I/O failures, anything
    /// else (bad UTF-8, missing columns, ragged rows) is a malformed file.
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io {
                path: path.to_path_buf(),
                source,
            },
            kind => Self::Decode {
                line,
                reason: describe_csv_kind(&kind),
            },
        }
    }
}

fn describe_csv_kind(kind: &csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {expected_len} fields, found {len}"),
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        csv::ErrorKind::Serialize(msg) => msg.clone(),
        other => format!("{other:?}"),
    }
}
