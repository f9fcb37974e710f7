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

//! # Media library core.
//!
//! The in-memory model behind the `mediashelf` application: a [`Library`] of
//! songs and videos, a [`Playlist`] of songs, and the comma-separated file
//! format used to load and save the library.
//!
//! Everything here is synchronous and single-owner. Operations either succeed
//! completely or fail with a [`MediaError`] and leave state unchanged, the
//! one exception being [`Library::import_from`], which keeps the rows read
//! before a bad one.

pub mod codec;
pub mod error;
pub mod library;
pub mod model;
pub mod playlist;

pub use error::{MediaError, Result};
pub use library::{Filter, Library};
pub use model::{MediaInfo, MediaKind, MediaRecord, Song, Video, parse_length, split_names};
pub use playlist::Playlist;
