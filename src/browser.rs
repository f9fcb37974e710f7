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

//! Library and playlist browser state.
//!
//! This module tracks which pane has focus, the selected row in each pane and
//! the active library filter. While a filter is active the library pane shows
//! only matching records, so the browser keeps the library position of every
//! visible row and resolves selections through it.

use mediashelf::{Filter, Library, Playlist};
use ratatui::widgets::{ListState, TableState};

#[derive(Debug, Default, Eq, PartialEq, Clone, Copy)]
pub(crate) enum BrowserPane {
    #[default]
    Library,
    Playlist,
}

#[derive(Default)]
pub(crate) struct MediaBrowser {
    pub(crate) active_pane: BrowserPane,

    filter: Option<Filter>,
    visible: Vec<usize>,

    pub(crate) library_state: TableState,
    pub(crate) playlist_state: ListState,
}

impl MediaBrowser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_pane(&mut self, pane: BrowserPane) {
        self.active_pane = pane;
    }

    pub(crate) fn next_pane(&mut self) {
        self.active_pane = match self.active_pane {
            BrowserPane::Library => BrowserPane::Playlist,
            BrowserPane::Playlist => BrowserPane::Library,
        };
    }

    pub(crate) fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// Library positions of the rows in the library pane, in display order.
    pub(crate) fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub(crate) fn set_filter(&mut self, filter: Filter, library: &Library) {
        self.filter = Some(filter);
        self.library_state.select(None);
        self.refresh_library(library);
    }

    pub(crate) fn clear_filter(&mut self, library: &Library) {
        self.filter = None;
        self.refresh_library(library);
    }

    /// Recomputes the visible rows after the library changed, keeping the
    /// selection within bounds.
    pub(crate) fn refresh_library(&mut self, library: &Library) {
        self.visible = match &self.filter {
            Some(filter) => library.filter(filter).map(|(position, _)| position).collect(),
            None => (0..library.len()).collect(),
        };
        Self::clamp(&mut self.library_state, self.visible.len());
    }

    pub(crate) fn refresh_playlist(&mut self, playlist: &Playlist) {
        let state = &mut self.playlist_state;
        let len = playlist.len();
        match state.selected() {
            _ if len == 0 => state.select(None),
            Some(i) if i >= len => state.select(Some(len - 1)),
            None => state.select(Some(0)),
            _ => {}
        }
    }

    /// Library position of the selected row, if any.
    pub(crate) fn selected_library_position(&self) -> Option<usize> {
        let row = self.library_state.selected()?;
        self.visible.get(row).copied()
    }

    pub(crate) fn selected_playlist_position(&self, playlist: &Playlist) -> Option<usize> {
        self.playlist_state
            .selected()
            .filter(|&position| position < playlist.len())
    }

    pub(crate) fn select_playlist_position(&mut self, position: usize) {
        self.playlist_state.select(Some(position));
    }

    pub(crate) fn next(&mut self, playlist_len: usize) {
        match self.active_pane {
            BrowserPane::Library => {
                let len = self.visible.len();
                let i = Self::next_index(self.library_state.selected(), len);
                self.library_state.select(i);
            }
            BrowserPane::Playlist => {
                let i = Self::next_index(self.playlist_state.selected(), playlist_len);
                self.playlist_state.select(i);
            }
        }
    }

    pub(crate) fn previous(&mut self, playlist_len: usize) {
        match self.active_pane {
            BrowserPane::Library => {
                let len = self.visible.len();
                let i = Self::previous_index(self.library_state.selected(), len);
                self.library_state.select(i);
            }
            BrowserPane::Playlist => {
                let i = Self::previous_index(self.playlist_state.selected(), playlist_len);
                self.playlist_state.select(i);
            }
        }
    }

    fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 { return None; }
        let i = match selected {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        Some(i)
    }

    fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 { return None; }
        let i = match selected {
            Some(i) => if i == 0 || i > len - 1 { len - 1 } else { i - 1 },
            None => 0,
        };
        Some(i)
    }

    fn clamp(state: &mut TableState, len: usize) {
        match state.selected() {
            _ if len == 0 => state.select(None),
            Some(i) if i >= len => state.select(Some(len - 1)),
            None => state.select(Some(0)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use mediashelf::{MediaInfo, Song, Video};

    use super::*;

    fn library() -> Library {
        let mut library = Library::new();
        library.add(Song::new(MediaInfo::new("One", "MP3", "English", 1), vec![]));
        library.add(Video::new(MediaInfo::new("Two", "DVD", "English", 2), "D", vec![]));
        library.add(Song::new(MediaInfo::new("Three", "MP3", "French", 3), vec![]));
        library
    }

    #[test]
    fn unfiltered_rows_are_library_positions() {
        let mut browser = MediaBrowser::new();
        browser.refresh_library(&library());

        assert_eq!(browser.visible(), [0, 1, 2]);
        assert_eq!(browser.selected_library_position(), Some(0));
    }

    #[test]
    fn filtered_selection_resolves_to_library_position() {
        let library = library();
        let mut browser = MediaBrowser::new();
        browser.set_filter(Filter::Format("mp3".into()), &library);

        assert_eq!(browser.visible(), [0, 2]);
        browser.next(0);
        assert_eq!(browser.selected_library_position(), Some(2));

        browser.clear_filter(&library);
        assert_eq!(browser.visible(), [0, 1, 2]);
        assert!(browser.filter().is_none());
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut library = library();
        let mut browser = MediaBrowser::new();
        browser.refresh_library(&library);

        browser.previous(0);
        assert_eq!(browser.selected_library_position(), Some(2));
        browser.next(0);
        assert_eq!(browser.selected_library_position(), Some(0));

        browser.previous(0);
        library.remove_at(2).unwrap();
        browser.refresh_library(&library);
        assert_eq!(browser.selected_library_position(), Some(1));
    }

    #[test]
    fn playlist_selection_follows_focus() {
        let mut playlist = Playlist::new();
        let mut browser = MediaBrowser::new();
        browser.refresh_playlist(&playlist);
        assert_eq!(browser.selected_playlist_position(&playlist), None);

        for record in library().all() {
            let _ = playlist.append(record);
        }
        browser.refresh_playlist(&playlist);
        browser.set_pane(BrowserPane::Playlist);
        browser.next(playlist.len());
        assert_eq!(browser.selected_playlist_position(&playlist), Some(1));
        browser.next(playlist.len());
        assert_eq!(browser.selected_playlist_position(&playlist), Some(0));
    }
}
