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

//! Media library management.
//!
//! The [`Library`] owns every record, in insertion order. A record is
//! addressed only by its position, and removing a record shifts everything
//! after it down by one. Duplicates are allowed.
//!
//! Views handed out by [`Library::all`] and the filter queries borrow the
//! library, so they always reflect its current contents and must be fetched
//! again after any change.

use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    codec,
    error::{MediaError, Result},
    model::MediaRecord,
};

/// A read-only query over the library.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Filter {
    Language(String),
    Format(String),
}

impl Filter {
    /// Returns `true` if the record's field equals the filter text, ignoring
    /// case.
    pub fn matches(&self, record: &MediaRecord) -> bool {
        let (field, wanted) = match self {
            Filter::Language(language) => (&record.info().language, language),
            Filter::Format(format) => (&record.info().format, format),
        };
        field.to_lowercase() == wanted.to_lowercase()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Language(language) => write!(f, "Language: {language}"),
            Filter::Format(format) => write!(f, "Format: {format}"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Library {
    records: Vec<MediaRecord>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the library.
    pub fn add(&mut self, record: impl Into<MediaRecord>) {
        self.records.push(record.into());
    }

    /// Removes and returns the record at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Bounds`] if `position` is past the end, in which
    /// case the library is unchanged.
    pub fn remove_at(&mut self, position: usize) -> Result<MediaRecord> {
        if position >= self.records.len() {
            return Err(MediaError::Bounds {
                position,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(position))
    }

    pub fn get(&self, position: usize) -> Option<&MediaRecord> {
        self.records.get(position)
    }

    pub fn all(&self) -> &[MediaRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose language equals `language`, ignoring case, in library
    /// order.
    pub fn filter_by_language(&self, language: &str) -> Vec<&MediaRecord> {
        self.filter(&Filter::Language(language.to_string()))
            .map(|(_, record)| record)
            .collect()
    }

    /// Records whose format equals `format`, ignoring case, in library order.
    pub fn filter_by_format(&self, format: &str) -> Vec<&MediaRecord> {
        self.filter(&Filter::Format(format.to_string()))
            .map(|(_, record)| record)
            .collect()
    }

    /// Matching records paired with their library positions.
    pub fn filter<'a>(&'a self, filter: &Filter) -> impl Iterator<Item = (usize, &'a MediaRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, record)| filter.matches(record))
    }

    /// Appends every record from the library file at `path`, in file order.
    ///
    /// Returns the number of records added.
    ///
    /// # Errors
    ///
    /// * [`MediaError::Io`] if the file cannot be opened or read.
    /// * [`MediaError::Decode`] for an unknown `Type`, a malformed name list
    ///   or a malformed file.
    /// * [`MediaError::Validation`] for a non-numeric `Play Length`.
    ///
    /// The import is not atomic, rows before the failing one stay in the
    /// library.
    pub fn import_from(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MediaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.import_from_reader(BufReader::new(file), path)
    }

    /// As [`Library::import_from`], reading from any source. `path` only
    /// labels errors.
    pub fn import_from_reader<R: Read>(&mut self, reader: R, path: &Path) -> Result<usize> {
        codec::read_records(reader, path, |record| self.records.push(record))
    }

    /// Writes the whole library to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Io`] if the file cannot be created or written.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| MediaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.export_to_writer(BufWriter::new(file), path)
    }

    /// As [`Library::export_to`], writing to any sink. `path` only labels
    /// errors.
    pub fn export_to_writer<W: Write>(&self, writer: W, path: &Path) -> Result<()> {
        codec::write_records(writer, path, &self.records)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::model::{MediaInfo, Song, Video};

    const SAMPLE: &str = "\
Type,Media Title,Media Format,Media Language,Play Length,Performer Names,Director Name,Actors
Song,Bohemian Rhapsody,MP3,English,355,\"['Freddie','Brian']\",,
Video,Inception,DVD,English,8880,,Christopher Nolan,\"['Leo','Tom']\"
";

    fn song(title: &str, format: &str, language: &str) -> Song {
        Song::new(MediaInfo::new(title, format, language, 100), vec!["Someone".into()])
    }

    fn titles(records: &[&MediaRecord]) -> Vec<String> {
        records.iter().map(|r| r.title().to_string()).collect()
    }

    fn mixed_library() -> Library {
        let mut library = Library::new();
        library.add(song("One", "MP3", "English"));
        library.add(Video::new(
            MediaInfo::new("Two", "DVD", "french", 10),
            "Director",
            vec![],
        ));
        library.add(song("Three", "mp3", "ENGLISH"));
        library.add(Song::new(MediaInfo::new("Four", "FLAC", "German", 0), vec![]));
        library
    }

    #[test]
    fn remove_at_shifts_later_positions_down() {
        let mut library = mixed_library();

        let removed = library.remove_at(1).unwrap();
        assert_eq!(removed.title(), "Two");
        assert_eq!(library.len(), 3);
        assert_eq!(library.get(1).map(MediaRecord::title), Some("Three"));

        let removed = library.remove_at(2).unwrap();
        assert_eq!(removed.title(), "Four");
        assert_eq!(library.all().len(), 2);
    }

    #[test]
    fn remove_at_out_of_bounds_leaves_library_intact() {
        let mut library = Library::new();
        assert!(matches!(
            library.remove_at(0),
            Err(MediaError::Bounds { position: 0, len: 0 })
        ));

        let mut library = mixed_library();
        assert!(matches!(
            library.remove_at(4),
            Err(MediaError::Bounds { position: 4, len: 4 })
        ));
        assert_eq!(library.len(), 4);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut library = Library::new();
        library.add(song("Same", "MP3", "English"));
        library.add(song("Same", "MP3", "English"));
        assert_eq!(library.len(), 2);
        assert_eq!(library.all()[0], library.all()[1]);
    }

    #[test]
    fn filters_ignore_case_and_keep_order() {
        let library = mixed_library();

        assert_eq!(titles(&library.filter_by_language("english")), ["One", "Three"]);
        assert_eq!(titles(&library.filter_by_language("French")), ["Two"]);
        assert_eq!(titles(&library.filter_by_format("MP3")), ["One", "Three"]);
        assert!(library.filter_by_format("MP").is_empty());
        assert!(library.filter_by_language("Eng").is_empty());

        // filtering is read-only
        assert_eq!(library.len(), 4);
        assert_eq!(library.get(2).map(MediaRecord::title), Some("Three"));
    }

    #[test]
    fn filter_reports_library_positions() {
        let library = mixed_library();
        let filter = Filter::Format("mp3".into());
        let positions: Vec<usize> = library.filter(&filter).map(|(p, _)| p).collect();
        assert_eq!(positions, [0, 2]);
        assert_eq!(filter.to_string(), "Format: mp3");
    }

    #[test]
    fn imports_the_sample_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.csv");
        fs::write(&path, SAMPLE).unwrap();

        let mut library = Library::new();
        assert_eq!(library.import_from(&path).unwrap(), 2);
        assert_eq!(library.len(), 2);

        let dvds = library.filter_by_format("dvd");
        assert_eq!(titles(&dvds), ["Inception"]);

        assert!(library.all()[0].matches_person("brian"));
        assert!(!library.all()[1].matches_person("brian"));
    }

    #[test]
    fn import_appends_after_existing_records() {
        let mut library = mixed_library();
        library
            .import_from_reader(SAMPLE.as_bytes(), Path::new("sample.csv"))
            .unwrap();
        assert_eq!(library.len(), 6);
        assert_eq!(library.get(4).map(MediaRecord::title), Some("Bohemian Rhapsody"));
    }

    #[test]
    fn import_of_missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let mut library = Library::new();
        let result = library.import_from(dir.path().join("missing.csv"));
        assert!(matches!(result, Err(MediaError::Io { .. })));
        assert!(library.is_empty());
    }

    #[test]
    fn failed_import_keeps_earlier_rows() {
        let text = format!("{SAMPLE}Song,Broken,MP3,English,abc,[],,\n");
        let mut library = Library::new();
        let result = library.import_from_reader(text.as_bytes(), Path::new("broken.csv"));

        assert!(matches!(result, Err(MediaError::Validation { .. })));
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn export_then_import_round_trips() {
        let mut library = mixed_library();
        library.add(Video::new(
            MediaInfo::new("Quotes, \"and\" commas", "DVD", "English", 5),
            "O'Neil",
            vec!["D'Arcy".into(), "Plain".into()],
        ));

        let dir = tempdir().unwrap();
        let path = dir.path().join("export.csv");
        library.export_to(&path).unwrap();

        let mut reloaded = Library::new();
        reloaded.import_from(&path).unwrap();
        assert_eq!(reloaded.all(), library.all());
    }

    #[test]
    fn export_to_unwritable_path_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        assert!(matches!(
            mixed_library().export_to(path),
            Err(MediaError::Io { .. })
        ));
    }
}
