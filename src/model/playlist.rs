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

//! Playlist state.
//!
//! This module provides the ordered list of tracks queued for playback and
//! the index of the current one.

use crate::model::TrackRef;

/// An ordered list of tracks and a pointer to the current one.
///
/// Whenever the list is non-empty the current index is in range. The index
/// only changes through [`PlaylistState::set_playlist`] (reset to zero), the
/// validated [`PlaylistState::set_current_index`], or the one-step
/// [`PlaylistState::advance`] / [`PlaylistState::retreat`] moves.
#[derive(Debug, Clone, Default)]
pub struct PlaylistState {
    tracks: Vec<TrackRef>,
    current_index: usize,
}

impl PlaylistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole playlist and rewinds the current index to the
    /// first track. An empty list is allowed.
    pub fn set_playlist(&mut self, tracks: Vec<TrackRef>) {
        self.tracks = tracks;
        self.current_index = 0;
    }

    pub fn has_playlist(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Moves the current index to `index`.
    ///
    /// Returns `false` and leaves the index untouched if `index` is out of
    /// range, which is always the case for an empty playlist.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index >= self.tracks.len() {
            return false;
        }

        self.current_index = index;
        true
    }

    pub fn current_track(&self) -> Option<&TrackRef> {
        self.tracks.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn tracks(&self) -> &[TrackRef] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.has_playlist() && self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.has_playlist() && self.current_index + 1 == self.tracks.len()
    }

    /// Steps forward one track, returns `false` at the end of the playlist.
    pub fn advance(&mut self) -> bool {
        self.set_current_index(self.current_index + 1)
    }

    /// Steps back one track, returns `false` at the start of the playlist.
    pub fn retreat(&mut self) -> bool {
        match self.current_index.checked_sub(1) {
            Some(index) => self.set_current_index(index),
            None => false,
        }
    }
}
