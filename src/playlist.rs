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

//! Playlist management.
//!
//! A [`Playlist`] is an ordered queue of songs, addressed by position
//! independently of the library. Songs are copied in, so the same song may sit
//! in the library and in the playlist (any number of times) at once.

use crate::{
    error::{MediaError, Result},
    model::{MediaKind, MediaRecord, Song},
};

#[derive(Debug, Clone, Default)]
pub struct Playlist {
    songs: Vec<Song>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a copy of the record to the end of the playlist.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::TypeMismatch`] if the record is not a song.
    pub fn append(&mut self, record: &MediaRecord) -> Result<()> {
        match record {
            MediaRecord::Song(song) => {
                self.songs.push(song.clone());
                Ok(())
            }
            other => Err(MediaError::TypeMismatch {
                title: other.title().to_string(),
                expected: MediaKind::Song.as_str(),
                found: other.kind().as_str(),
            }),
        }
    }

    pub fn append_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Removes and returns the song at `position`.
    pub fn remove_at(&mut self, position: usize) -> Result<Song> {
        self.check_position(position)?;
        Ok(self.songs.remove(position))
    }

    /// Moves the song at `from` so that it ends up at `to`.
    ///
    /// This is a remove followed by an insert, so `to` is a position in the
    /// playlist as it is after the song has been taken out. Both positions
    /// must be less than the current length, otherwise nothing moves.
    pub fn move_to(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_position(from)?;
        self.check_position(to)?;

        let song = self.songs.remove(from);
        self.songs.insert(to, song);
        Ok(())
    }

    /// Total play length of every song, in seconds.
    pub fn total_runtime(&self) -> u64 {
        self.songs.iter().map(|song| u64::from(song.info.length)).sum()
    }

    pub fn get(&self, position: usize) -> Option<&Song> {
        self.songs.get(position)
    }

    pub fn all(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.songs.len() {
            Ok(())
        } else {
            Err(MediaError::Bounds {
                position,
                len: self.songs.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaInfo, Video};

    fn song(title: &str, length: u32) -> Song {
        Song::new(MediaInfo::new(title, "MP3", "English", length), vec![])
    }

    fn playlist(titles: &[&str]) -> Playlist {
        let mut playlist = Playlist::new();
        for (i, title) in titles.iter().enumerate() {
            playlist.append_song(song(title, (i as u32 + 1) * 10));
        }
        playlist
    }

    fn titles(playlist: &Playlist) -> Vec<&str> {
        playlist.all().iter().map(|s| s.info.title.as_str()).collect()
    }

    #[test]
    fn append_rejects_videos() {
        let mut playlist = Playlist::new();
        let video: MediaRecord =
            Video::new(MediaInfo::new("Inception", "DVD", "English", 8880), "Nolan", vec![]).into();

        match playlist.append(&video) {
            Err(MediaError::TypeMismatch { title, expected, found }) => {
                assert_eq!(title, "Inception");
                assert_eq!(expected, "Song");
                assert_eq!(found, "Video");
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }
        assert!(playlist.is_empty());

        playlist.append(&song("Tune", 5).into()).unwrap();
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn same_song_may_be_queued_twice() {
        let record: MediaRecord = song("Tune", 5).into();
        let mut playlist = Playlist::new();
        playlist.append(&record).unwrap();
        playlist.append(&record).unwrap();
        assert_eq!(titles(&playlist), ["Tune", "Tune"]);
    }

    #[test]
    fn remove_at_shifts_and_checks_bounds() {
        let mut playlist = playlist(&["a", "b", "c"]);
        assert_eq!(playlist.remove_at(1).unwrap().info.title, "b");
        assert_eq!(titles(&playlist), ["a", "c"]);

        assert!(matches!(
            playlist.remove_at(2),
            Err(MediaError::Bounds { position: 2, len: 2 })
        ));
        assert!(Playlist::new().remove_at(0).is_err());
    }

    #[test]
    fn move_first_to_last() {
        let mut playlist = playlist(&["a", "b", "c", "d"]);
        playlist.move_to(0, 3).unwrap();
        assert_eq!(titles(&playlist), ["b", "c", "d", "a"]);
    }

    #[test]
    fn move_is_pop_then_insert() {
        let mut playlist = playlist(&["a", "b", "c", "d"]);
        playlist.move_to(3, 1).unwrap();
        assert_eq!(titles(&playlist), ["a", "d", "b", "c"]);

        playlist.move_to(1, 2).unwrap();
        assert_eq!(titles(&playlist), ["a", "b", "d", "c"]);
    }

    #[test]
    fn move_to_own_position_is_a_no_op() {
        let mut playlist = playlist(&["a", "b", "c"]);
        for i in 0..3 {
            playlist.move_to(i, i).unwrap();
        }
        assert_eq!(titles(&playlist), ["a", "b", "c"]);
    }

    #[test]
    fn move_out_of_bounds_changes_nothing() {
        let mut playlist = playlist(&["a", "b"]);
        assert!(matches!(
            playlist.move_to(2, 0),
            Err(MediaError::Bounds { position: 2, .. })
        ));
        assert!(matches!(
            playlist.move_to(0, 2),
            Err(MediaError::Bounds { position: 2, .. })
        ));
        assert_eq!(titles(&playlist), ["a", "b"]);
    }

    #[test]
    fn total_runtime_sums_lengths() {
        assert_eq!(Playlist::new().total_runtime(), 0);
        // 10 + 20 + 30
        assert_eq!(playlist(&["a", "b", "c"]).total_runtime(), 60);

        let mut long = Playlist::new();
        long.append_song(song("x", u32::MAX));
        long.append_song(song("y", u32::MAX));
        assert_eq!(long.total_runtime(), 2 * u64::from(u32::MAX));
    }
}
