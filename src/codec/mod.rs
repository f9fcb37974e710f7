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

//! Library file codec.
//!
//! Library files are comma-separated text with a header row naming the
//! [`FIELDS`], then one row per record:
//!
//! ```text
//! Type,Media Title,Media Format,Media Language,Play Length,Performer Names,Director Name,Actors
//! Song,Bohemian Rhapsody,MP3,English,355,"['Freddie','Brian']",,
//! Video,Inception,DVD,English,8880,,Christopher Nolan,"['Leo','Tom']"
//! ```
//!
//! Rows are (de)serialized through [`MediaRow`] with `csv` and `serde`, then
//! decoded into a [`MediaRecord`] by dispatching on the `Type` column. Columns
//! that do not apply to a record's kind are written blank and ignored when
//! read.

pub mod literal;

use std::{io, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{MediaError, Result},
    model::{MediaInfo, MediaKind, MediaRecord, Song, Video, parse_length},
};

/// Column names, in file order.
pub const FIELDS: [&str; 8] = [
    "Type",
    "Media Title",
    "Media Format",
    "Media Language",
    "Play Length",
    "Performer Names",
    "Director Name",
    "Actors",
];

/// A flat, undecoded library file row.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MediaRow {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Media Title")]
    pub title: String,
    #[serde(rename = "Media Format")]
    pub format: String,
    #[serde(rename = "Media Language")]
    pub language: String,
    #[serde(rename = "Play Length")]
    pub length: String,
    #[serde(rename = "Performer Names", default)]
    pub performers: String,
    #[serde(rename = "Director Name", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
}

impl MediaRow {
    pub(crate) fn from_record(record: &MediaRecord) -> Self {
        let info = record.info();
        let mut row = Self {
            kind: record.kind().to_string(),
            title: info.title.clone(),
            format: info.format.clone(),
            language: info.language.clone(),
            length: info.length.to_string(),
            ..Self::default()
        };

        match record {
            MediaRecord::Song(song) => {
                row.performers = literal::format_names(&song.performers);
            }
            MediaRecord::Video(video) => {
                row.director = video.director.clone();
                row.actors = literal::format_names(&video.actors);
            }
        }

        row
    }

    /// Looks up a column value by its header name.
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "Type" => &self.kind,
            "Media Title" => &self.title,
            "Media Format" => &self.format,
            "Media Language" => &self.language,
            "Play Length" => &self.length,
            "Performer Names" => &self.performers,
            "Director Name" => &self.director,
            "Actors" => &self.actors,
            _ => return None,
        };
        Some(value)
    }

    /// Decodes the row into a record.
    ///
    /// `line` is only used to locate [`MediaError::Decode`] failures. A
    /// non-numeric play length is a [`MediaError::Validation`].
    pub fn decode(self, line: u64) -> Result<MediaRecord> {
        let kind: MediaKind = self
            .kind
            .parse()
            .map_err(|reason| MediaError::decode(line, reason))?;

        let length = parse_length(&self.length)?;
        let info = MediaInfo::new(self.title, self.format, self.language, length);

        let record = match kind {
            MediaKind::Song => {
                let performers = decode_names(line, "Performer Names", &self.performers)?;
                Song::new(info, performers).into()
            }
            MediaKind::Video => {
                let actors = decode_names(line, "Actors", &self.actors)?;
                Video::new(info, self.director, actors).into()
            }
        };

        Ok(record)
    }
}

fn decode_names(line: u64, field: &str, value: &str) -> Result<Vec<String>> {
    literal::parse_names(value)
        .map_err(|reason| MediaError::decode(line, format!("{field}: {reason}")))
}

/// Reads every row from `reader`, handing each decoded record to `sink` in
/// file order.
///
/// Decoding stops at the first bad row. Records handed to `sink` before the
/// failure stay wherever the sink put them. `path` only labels errors.
pub fn read_records<R, F>(reader: R, path: &Path, mut sink: F) -> Result<usize>
where
    R: io::Read,
    F: FnMut(MediaRecord),
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut count = 0;
    let mut raw = csv::StringRecord::new();
    let headers = csv_reader
        .headers()
        .map_err(|e| MediaError::from_csv(path, e))?
        .clone();
    check_headers(&headers)?;

    while csv_reader
        .read_record(&mut raw)
        .map_err(|e| MediaError::from_csv(path, e))?
    {
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        let row: MediaRow = raw
            .deserialize(Some(&headers))
            .map_err(|e| MediaError::from_csv(path, e))?;

        sink(row.decode(line)?);
        count += 1;
    }

    Ok(count)
}

/// Writes the header row then one row per record.
pub fn write_records<'a, W, I>(writer: W, path: &Path, records: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a MediaRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut empty = true;
    for record in records {
        csv_writer
            .serialize(record.field_projection())
            .map_err(|e| MediaError::from_csv(path, e))?;
        empty = false;
    }

    // serde only emits a header alongside the first row
    if empty {
        csv_writer
            .write_record(FIELDS)
            .map_err(|e| MediaError::from_csv(path, e))?;
    }

    csv_writer.flush().map_err(|source| MediaError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    for field in FIELDS {
        if !headers.iter().any(|h| h == field) {
            return Err(MediaError::decode(1, format!("missing column '{field}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Type,Media Title,Media Format,Media Language,Play Length,Performer Names,Director Name,Actors
Song,Bohemian Rhapsody,MP3,English,355,\"['Freddie','Brian']\",,
Video,Inception,DVD,English,8880,,Christopher Nolan,\"['Leo','Tom']\"
";

    fn read_all(text: &str) -> (Vec<MediaRecord>, Result<usize>) {
        let mut records = Vec::new();
        let result = read_records(text.as_bytes(), Path::new("test.csv"), |r| records.push(r));
        (records, result)
    }

    fn row(kind: &str, length: &str) -> MediaRow {
        MediaRow {
            kind: kind.into(),
            title: "T".into(),
            format: "F".into(),
            language: "L".into(),
            length: length.into(),
            ..MediaRow::default()
        }
    }

    #[test]
    fn reads_the_sample_file() {
        let (records, result) = read_all(SAMPLE);
        assert_eq!(result.unwrap(), 2);

        let MediaRecord::Song(song) = &records[0] else {
            panic!("expected a song, got {:?}", records[0]);
        };
        assert_eq!(song.info, MediaInfo::new("Bohemian Rhapsody", "MP3", "English", 355));
        assert_eq!(song.performers, vec!["Freddie", "Brian"]);

        let MediaRecord::Video(video) = &records[1] else {
            panic!("expected a video, got {:?}", records[1]);
        };
        assert_eq!(video.info.length, 8880);
        assert_eq!(video.director, "Christopher Nolan");
        assert_eq!(video.actors, vec!["Leo", "Tom"]);
    }

    #[test]
    fn unknown_type_is_a_decode_error() {
        match row("Audiobook", "60").decode(7) {
            Err(MediaError::Decode { line, reason }) => {
                assert_eq!(line, 7);
                assert!(reason.contains("Audiobook"));
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_length_is_a_validation_error() {
        assert!(matches!(
            row("Song", "abc").decode(2),
            Err(MediaError::Validation { .. })
        ));
    }

    #[test]
    fn unused_columns_are_ignored() {
        let mut song = row("Song", "10");
        song.director = "Somebody".into();
        song.actors = "not a list".into();
        assert!(song.decode(2).is_ok());

        let mut video = row("Video", "10");
        video.performers = "not a list".into();
        assert!(video.decode(2).is_ok());
    }

    #[test]
    fn malformed_names_are_a_decode_error() {
        let mut song = row("Song", "10");
        song.performers = "Freddie, Brian".into();
        assert!(matches!(song.decode(2), Err(MediaError::Decode { line: 2, .. })));
    }

    #[test]
    fn keeps_rows_read_before_a_failure() {
        let text = format!("{SAMPLE}Audiobook,Dune,MP3,English,60,,,\nSong,Late,MP3,English,1,[],,\n");
        let (records, result) = read_all(&text);

        assert_eq!(records.len(), 2);
        assert!(matches!(result, Err(MediaError::Decode { line: 4, .. })));
    }

    #[test]
    fn missing_column_is_a_decode_error() {
        let (records, result) = read_all("Type,Media Title\nSong,X\n");
        assert!(records.is_empty());
        assert!(matches!(result, Err(MediaError::Decode { .. })));
    }

    #[test]
    fn projection_blanks_columns_that_do_not_apply() {
        let (records, _) = read_all(SAMPLE);

        let song = records[0].field_projection();
        assert_eq!(song.get("Type"), Some("Song"));
        assert_eq!(song.get("Performer Names"), Some("['Freddie', 'Brian']"));
        assert_eq!(song.get("Director Name"), Some(""));
        assert_eq!(song.get("Actors"), Some(""));

        let video = records[1].field_projection();
        assert_eq!(video.get("Play Length"), Some("8880"));
        assert_eq!(video.get("Performer Names"), Some(""));
        assert_eq!(video.get("Actors"), Some("['Leo', 'Tom']"));
        assert_eq!(video.get("Bogus"), None);
    }

    #[test]
    fn writes_header_and_rows() {
        let (records, _) = read_all(SAMPLE);
        let mut out = Vec::new();
        write_records(&mut out, Path::new("out.csv"), &records).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(FIELDS.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some("Song,Bohemian Rhapsody,MP3,English,355,\"['Freddie', 'Brian']\",,")
        );
        assert_eq!(
            lines.next(),
            Some("Video,Inception,DVD,English,8880,,Christopher Nolan,\"['Leo', 'Tom']\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn writes_header_for_an_empty_library() {
        let mut out = Vec::new();
        write_records(&mut out, Path::new("out.csv"), &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim_end(), FIELDS.join(","));
    }
}
