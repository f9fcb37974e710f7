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

//! Domain models for media records.
//!
//! A [`MediaRecord`] is either a [`Song`] or a [`Video`]. Both share the
//! common [`MediaInfo`] attributes (title, format, language and play length),
//! and each adds its own credited people: performers for a song, a director
//! and actors for a video.
//!
//! Records are immutable once constructed. Play lengths arrive as text from
//! files and user input, so they must go through [`parse_length`] before a
//! record can be built.

use std::{fmt, str::FromStr};

use crate::{
    codec::MediaRow,
    error::{MediaError, Result},
};

/// The closed set of record kinds, used as the `Type` discriminator in
/// library files.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MediaKind {
    Song,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Song => "Song",
            MediaKind::Video => "Video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Song" => Ok(MediaKind::Song),
            "Video" => Ok(MediaKind::Video),
            other => Err(format!("unrecognised media type '{other}'")),
        }
    }
}

/// Attributes common to every record.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MediaInfo {
    pub title: String,
    pub format: String,
    pub language: String,
    /// Play length in seconds.
    pub length: u32,
}

impl MediaInfo {
    pub fn new(
        title: impl Into<String>,
        format: impl Into<String>,
        language: impl Into<String>,
        length: u32,
    ) -> Self {
        Self {
            title: title.into(),
            format: format.into(),
            language: language.into(),
            length,
        }
    }
}

impl fmt::Display for MediaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Format: {}", self.format)?;
        writeln!(f, "Language: {}", self.language)?;
        writeln!(f, "Length: {}", self.length)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Song {
    pub info: MediaInfo,
    pub performers: Vec<String>,
}

impl Song {
    pub fn new(info: MediaInfo, performers: Vec<String>) -> Self {
        Self { info, performers }
    }

    /// Returns `true` if `name` is one of the performers, ignoring case.
    pub fn matches_person(&self, name: &str) -> bool {
        contains_name(&self.performers, name)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info)?;
        writeln!(f, "Performers: {}", self.performers.join(", "))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Video {
    pub info: MediaInfo,
    pub director: String,
    pub actors: Vec<String>,
}

impl Video {
    pub fn new(info: MediaInfo, director: impl Into<String>, actors: Vec<String>) -> Self {
        Self {
            info,
            director: director.into(),
            actors,
        }
    }

    /// Returns `true` if `name` is the director or one of the actors, ignoring
    /// case.
    pub fn matches_person(&self, name: &str) -> bool {
        contains_name(&self.actors, name) || same_name(&self.director, name)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info)?;
        writeln!(f, "Director: {}", self.director)?;
        writeln!(f, "Actors: {}", self.actors.join(", "))
    }
}

/// A single entry in the media library.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MediaRecord {
    Song(Song),
    Video(Video),
}

impl MediaRecord {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaRecord::Song(_) => MediaKind::Song,
            MediaRecord::Video(_) => MediaKind::Video,
        }
    }

    pub fn info(&self) -> &MediaInfo {
        match self {
            MediaRecord::Song(song) => &song.info,
            MediaRecord::Video(video) => &video.info,
        }
    }

    pub fn title(&self) -> &str {
        &self.info().title
    }

    pub fn as_song(&self) -> Option<&Song> {
        match self {
            MediaRecord::Song(song) => Some(song),
            MediaRecord::Video(_) => None,
        }
    }

    /// Returns `true` if `name` is credited on this record.
    ///
    /// Songs are matched against their performers, videos against their
    /// actors and director. The comparison ignores case but is otherwise
    /// exact, partial names never match.
    pub fn matches_person(&self, name: &str) -> bool {
        match self {
            MediaRecord::Song(song) => song.matches_person(name),
            MediaRecord::Video(video) => video.matches_person(name),
        }
    }

    /// Flattens the record into a file row, leaving the columns that do not
    /// apply to this kind blank.
    pub fn field_projection(&self) -> MediaRow {
        MediaRow::from_record(self)
    }

    /// Renders every populated field, one per line, common fields first.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MediaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaRecord::Song(song) => song.fmt(f),
            MediaRecord::Video(video) => video.fmt(f),
        }
    }
}

impl From<Song> for MediaRecord {
    fn from(song: Song) -> Self {
        MediaRecord::Song(song)
    }
}

impl From<Video> for MediaRecord {
    fn from(video: Video) -> Self {
        MediaRecord::Video(video)
    }
}

/// Parses a play length given as text.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer fitting in a `u32` is a [`MediaError::Validation`].
///
/// # Examples
///
/// ```
/// use mediashelf::parse_length;
///
/// assert_eq!(parse_length(" 355 ").unwrap(), 355);
/// assert!(parse_length("abc").is_err());
/// ```
pub fn parse_length(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| MediaError::validation("play length", value))
}

/// Splits a comma-separated list of names as typed by a user, trimming each
/// name and dropping empty entries.
pub fn split_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn contains_name(names: &[String], name: &str) -> bool {
    let needle = name.to_lowercase();
    names.iter().any(|n| n.to_lowercase() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bohemian() -> MediaRecord {
        Song::new(
            MediaInfo::new("Bohemian Rhapsody", "MP3", "English", 355),
            vec!["Freddie".into(), "Brian".into()],
        )
        .into()
    }

    fn inception() -> MediaRecord {
        Video::new(
            MediaInfo::new("Inception", "DVD", "English", 8880),
            "Christopher Nolan",
            vec!["Leo".into(), "Tom".into()],
        )
        .into()
    }

    #[test]
    fn song_matches_performers_ignoring_case() {
        let song = bohemian();
        assert!(song.matches_person("brian"));
        assert!(song.matches_person("FREDDIE"));
        assert!(!song.matches_person("Bri"));
        assert!(!song.matches_person("Christopher Nolan"));
    }

    #[test]
    fn video_matches_director_and_actors() {
        let video = inception();
        assert!(video.matches_person("christopher nolan"));
        assert!(video.matches_person("tom"));
        assert!(!video.matches_person("brian"));
        assert!(!video.matches_person("Nolan"));
    }

    #[test]
    fn describe_lists_base_fields_before_credits() {
        let text = inception().describe();
        assert_eq!(
            text,
            "Title: Inception\nFormat: DVD\nLanguage: English\nLength: 8880\n\
             Director: Christopher Nolan\nActors: Leo, Tom\n"
        );

        let text = bohemian().describe();
        assert!(text.starts_with("Title: Bohemian Rhapsody\n"));
        assert!(text.ends_with("Performers: Freddie, Brian\n"));
        assert!(!text.contains("Director"));
    }

    #[test]
    fn parse_length_rejects_non_integers() {
        assert_eq!(parse_length("0").unwrap(), 0);
        assert_eq!(parse_length("\t42\n").unwrap(), 42);

        for bad in ["abc", "", "-5", "3.5", "12s"] {
            match parse_length(bad) {
                Err(MediaError::Validation { field, value }) => {
                    assert_eq!(field, "play length");
                    assert_eq!(value, bad);
                }
                other => panic!("expected validation error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn split_names_trims_and_skips_blanks() {
        assert_eq!(split_names("Mike, Ben ,,Dan"), vec!["Mike", "Ben", "Dan"]);
        assert!(split_names(" , ").is_empty());
    }

    #[test]
    fn media_kind_round_trips_through_text() {
        assert_eq!("Song".parse::<MediaKind>(), Ok(MediaKind::Song));
        assert_eq!("Video".parse::<MediaKind>(), Ok(MediaKind::Video));
        assert!("Audiobook".parse::<MediaKind>().is_err());
        assert!("song".parse::<MediaKind>().is_err());
        assert_eq!(bohemian().kind().to_string(), "Song");
    }
}
