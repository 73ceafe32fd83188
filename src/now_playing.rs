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

//! Per-track details reported by the media engine.

use std::time::Duration;

use listplay::TrackRef;

/// Title and duration of the loaded track, as reported by the engine.
///
/// The details belong to one loaded track. Reloading the same track keeps
/// them, since the engine does not always report them again.
#[derive(Debug, Default)]
pub(crate) struct NowPlaying {
    track: Option<TrackRef>,
    pub(crate) title: Option<String>,
    pub(crate) duration: Option<Duration>,
}

impl NowPlaying {
    pub(crate) fn new(loaded: Option<&TrackRef>) -> Self {
        Self {
            track: loaded.cloned(),
            ..Self::default()
        }
    }

    /// Follows the engine's loaded track, dropping the details of the previous
    /// one when it changed.
    pub(crate) fn follow(&mut self, loaded: Option<&TrackRef>) {
        if self.track.as_ref() == loaded {
            return;
        }

        self.track = loaded.cloned();
        self.title = None;
        self.duration = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reported(track: &TrackRef) -> NowPlaying {
        let mut now_playing = NowPlaying::new(Some(track));
        now_playing.title = Some("Title".to_string());
        now_playing.duration = Some(Duration::from_secs(42));
        now_playing
    }

    #[test]
    fn same_track_keeps_details() {
        let track = TrackRef::from("c.mp4");
        let mut now_playing = reported(&track);

        now_playing.follow(Some(&track));

        assert_eq!(now_playing.title.as_deref(), Some("Title"));
        assert_eq!(now_playing.duration, Some(Duration::from_secs(42)));
    }

    #[test]
    fn new_track_clears_details() {
        let mut now_playing = reported(&TrackRef::from("a.mp3"));

        now_playing.follow(Some(&TrackRef::from("b.mp3")));

        assert!(now_playing.title.is_none());
        assert!(now_playing.duration.is_none());
    }

    #[test]
    fn unloading_clears_details() {
        let mut now_playing = reported(&TrackRef::from("a.mp3"));

        now_playing.follow(None);

        assert!(now_playing.title.is_none());
        assert!(now_playing.duration.is_none());
    }
}
