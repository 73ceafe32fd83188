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

//! Playback control and transport state.
//!
//! This module provides [`PlaybackController`], the high-level interface used
//! to drive playback through a playlist. It owns the [`PlaylistState`] and a
//! media engine, and translates transport commands (play, pause, fast-forward,
//! rewind, skip, jump back) into playlist moves and engine instructions.
//!
//! # Rates
//!
//! | rate   | meaning       |
//! |--------|---------------|
//! | `0.0`  | paused        |
//! | `1.0`  | normal play   |
//! | `2.0`  | fast-forward  |
//! | `-2.0` | rewind        |
//!
//! Releasing fast-forward or rewind always resolves to normal play.
//!
//! # Empty playlists
//!
//! Every transport command is a no-op while no playlist is set. This never
//! fails and never reaches the engine.

pub mod engine;
pub mod memory;
pub mod mpv;

use tracing::{debug, info};

use crate::{
    error::EngineError,
    model::{TrackRef, playlist::PlaylistState},
    player::engine::{EngineEvent, EngineObserver, MediaEngine},
};

pub const PAUSED_RATE: f64 = 0.0;
pub const PLAY_RATE: f64 = 1.0;
pub const FAST_FORWARD_RATE: f64 = 2.0;
pub const REWIND_RATE: f64 = -2.0;

/// Represents the current transport status, derived from the engine rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransportState {
    Idle,
    Paused,
    Playing,
    FastForwarding,
    Rewinding,
}

impl TransportState {
    fn from_rate(rate: f64) -> Self {
        if rate == 0.0 {
            TransportState::Paused
        } else if rate < 0.0 {
            TransportState::Rewinding
        } else if rate > PLAY_RATE {
            TransportState::FastForwarding
        } else {
            TransportState::Playing
        }
    }
}

/// Drives a media engine through a playlist.
///
/// The controller has exclusive ownership of its engine. Callers can inspect
/// the engine through [`PlaybackController::engine`] but cannot command it
/// directly.
pub struct PlaybackController<E: MediaEngine> {
    playlist: PlaylistState,
    engine: E,
    auto_advance: bool,
}

impl<E: MediaEngine> PlaybackController<E> {
    pub fn new(engine: E) -> Self {
        Self {
            playlist: PlaylistState::new(),
            engine,
            auto_advance: true,
        }
    }

    /// Sets whether the end of a track moves on to the next one.
    pub fn with_auto_advance(mut self, auto_advance: bool) -> Self {
        self.auto_advance = auto_advance;
        self
    }

    /// Read-only access to the engine state.
    pub fn engine(&self) -> &dyn EngineObserver {
        &self.engine
    }

    pub fn playlist(&self) -> &PlaylistState {
        &self.playlist
    }

    /// Replaces the playlist.
    ///
    /// A non-empty playlist has its first track loaded, paused. An empty one
    /// unloads the engine.
    pub fn set_playlist(&mut self, tracks: Vec<TrackRef>) -> Result<(), EngineError> {
        info!(tracks = tracks.len(), "set playlist");

        self.playlist.set_playlist(tracks);

        match self.playlist.current_track() {
            Some(track) => {
                self.engine.load(track)?;
                self.engine.set_rate(PAUSED_RATE)
            }
            None => self.engine.unload(),
        }
    }

    /// Jumps to the track at `index`, loaded and paused at its start.
    ///
    /// Returns `Ok(false)` without touching the engine when `index` is out of
    /// range.
    pub fn set_current_index(&mut self, index: usize) -> Result<bool, EngineError> {
        if !self.playlist.set_current_index(index) {
            debug!(index, len = self.playlist.len(), "index out of range");
            return Ok(false);
        }

        self.cue_current(PAUSED_RATE)?;
        Ok(true)
    }

    pub fn has_playlist(&self) -> bool {
        self.playlist.has_playlist()
    }

    pub fn current_track_url(&self) -> Option<&TrackRef> {
        self.playlist.current_track()
    }

    /// `true` for any non-zero rate, including fast-forward and rewind.
    pub fn is_playing(&self) -> bool {
        self.engine.rate() != PAUSED_RATE
    }

    pub fn status(&self) -> TransportState {
        if !self.has_playlist() {
            return TransportState::Idle;
        }

        TransportState::from_rate(self.engine.rate())
    }

    pub fn play(&mut self) -> Result<(), EngineError> {
        self.set_rate(PLAY_RATE)
    }

    /// Pauses in place, the position is kept.
    pub fn pause(&mut self) -> Result<(), EngineError> {
        self.set_rate(PAUSED_RATE)
    }

    pub fn begin_fast_forwarding(&mut self) -> Result<(), EngineError> {
        self.set_rate(FAST_FORWARD_RATE)
    }

    /// Resumes normal play, whatever the rate was before fast-forwarding.
    pub fn end_fast_forwarding(&mut self) -> Result<(), EngineError> {
        self.set_rate(PLAY_RATE)
    }

    pub fn begin_rewinding(&mut self) -> Result<(), EngineError> {
        self.set_rate(REWIND_RATE)
    }

    /// Resumes normal play, whatever the rate was before rewinding.
    pub fn end_rewinding(&mut self) -> Result<(), EngineError> {
        self.set_rate(PLAY_RATE)
    }

    /// Moves to and plays the next track.
    ///
    /// On the last track there is nothing to skip to: the current track is
    /// reloaded and left paused at its start.
    pub fn skip_to_next_track(&mut self) -> Result<(), EngineError> {
        if !self.has_playlist() {
            return Ok(());
        }

        if self.playlist.advance() {
            self.cue_current(PLAY_RATE)
        } else {
            debug!("skip at last track, pausing at start");
            self.cue_current(PAUSED_RATE)
        }
    }

    /// Moves to and plays the previous track.
    ///
    /// On the first track the current track is replayed from its start. Note
    /// this differs from [`PlaybackController::skip_to_next_track`] at the
    /// other end, which pauses.
    pub fn jump_to_previous_track(&mut self) -> Result<(), EngineError> {
        if !self.has_playlist() {
            return Ok(());
        }

        if !self.playlist.retreat() {
            debug!("jump back at first track, replaying");
        }

        self.cue_current(PLAY_RATE)
    }

    /// Handles the engine reaching the end of the current track.
    ///
    /// With auto-advance this is a skip to the next track. Without it the
    /// current track is left paused at its start. A track that ends while
    /// rewinding has reached its start, so it is cued paused and the playlist
    /// does not move.
    pub fn on_track_finished(&mut self) -> Result<(), EngineError> {
        if !self.has_playlist() {
            return Ok(());
        }

        if self.engine.rate() < PAUSED_RATE {
            debug!("track start reached while rewinding");
            return self.cue_current(PAUSED_RATE);
        }

        if self.auto_advance {
            self.skip_to_next_track()
        } else {
            self.cue_current(PAUSED_RATE)
        }
    }

    /// Takes the next pending engine notification, if any.
    ///
    /// End-of-track notifications are acted on before being returned.
    pub fn poll_engine(&mut self) -> Result<Option<EngineEvent>, EngineError> {
        let event = self.engine.poll_event();

        if let Some(EngineEvent::TrackFinished) = event {
            self.on_track_finished()?;
        }

        Ok(event)
    }

    fn set_rate(&mut self, rate: f64) -> Result<(), EngineError> {
        if !self.has_playlist() {
            debug!(rate, "no playlist, ignoring rate change");
            return Ok(());
        }

        debug!(rate, "set rate");
        self.engine.set_rate(rate)
    }

    // Loads the current track, rewinds it and applies `rate`.
    fn cue_current(&mut self, rate: f64) -> Result<(), EngineError> {
        let Some(track) = self.playlist.current_track() else {
            return Ok(());
        };

        info!(index = self.playlist.current_index(), %track, rate, "cue track");

        self.engine.load(track)?;
        self.engine.seek_to_start()?;
        self.engine.set_rate(rate)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::player::memory::MemoryEngine;

    fn controller_with(duration: Duration) -> PlaybackController<MemoryEngine> {
        let mut controller =
            PlaybackController::new(MemoryEngine::with_track_duration(duration));
        controller
            .set_playlist(vec!["a.mp3".into(), "b.mp3".into(), "c.mp4".into()])
            .unwrap();
        controller
    }

    fn drain(controller: &mut PlaybackController<MemoryEngine>) -> Vec<EngineEvent> {
        let mut events = vec![];
        while let Some(event) = controller.poll_engine().unwrap() {
            events.push(event);
        }
        events
    }

    #[test]
    fn end_of_track_advances_and_plays() {
        let mut controller = controller_with(Duration::from_secs(10));
        controller.play().unwrap();
        drain(&mut controller);

        controller.engine.advance(Duration::from_secs(12));
        let events = drain(&mut controller);

        assert!(events.contains(&EngineEvent::TrackFinished));
        assert_eq!(controller.playlist().current_index(), 1);
        assert_eq!(controller.current_track_url(), Some(&TrackRef::from("b.mp3")));
        assert_eq!(controller.engine().position(), Duration::ZERO);
        assert!(controller.is_playing());
    }

    #[test]
    fn end_of_last_track_pauses_at_start() {
        let mut controller = controller_with(Duration::from_secs(10));
        controller.set_current_index(2).unwrap();
        controller.play().unwrap();
        drain(&mut controller);

        controller.engine.advance(Duration::from_secs(10));
        drain(&mut controller);

        assert_eq!(controller.playlist().current_index(), 2);
        assert!(!controller.is_playing());
        assert_eq!(controller.engine().position(), Duration::ZERO);
    }

    #[test]
    fn end_of_track_without_auto_advance_stays() {
        let mut controller = controller_with(Duration::from_secs(10)).with_auto_advance(false);
        controller.play().unwrap();
        drain(&mut controller);

        controller.engine.finish_track();
        drain(&mut controller);

        assert_eq!(controller.playlist().current_index(), 0);
        assert!(!controller.is_playing());
        assert_eq!(controller.status(), TransportState::Paused);
    }

    #[test]
    fn finish_of_replaced_track_is_ignored() {
        let mut controller = controller_with(Duration::from_secs(10));
        controller.play().unwrap();
        drain(&mut controller);

        controller.engine.advance(Duration::from_secs(11));
        controller.skip_to_next_track().unwrap();
        assert_eq!(controller.playlist().current_index(), 1);

        let events = drain(&mut controller);

        assert!(!events.contains(&EngineEvent::TrackFinished));
        assert_eq!(controller.playlist().current_index(), 1);
        assert_eq!(controller.current_track_url(), Some(&TrackRef::from("b.mp3")));
        assert!(controller.is_playing());
    }

    #[test]
    fn finish_while_rewinding_stays_on_track() {
        let mut controller = controller_with(Duration::from_secs(10));
        controller.set_current_index(1).unwrap();
        controller.begin_rewinding().unwrap();
        drain(&mut controller);

        controller.engine.finish_track();
        let events = drain(&mut controller);

        assert!(events.contains(&EngineEvent::TrackFinished));
        assert_eq!(controller.playlist().current_index(), 1);
        assert_eq!(controller.current_track_url(), Some(&TrackRef::from("b.mp3")));
        assert_eq!(controller.engine().position(), Duration::ZERO);
        assert_eq!(controller.status(), TransportState::Paused);
    }

    #[test]
    fn paused_engine_never_finishes() {
        let mut controller = controller_with(Duration::from_secs(10));
        drain(&mut controller);

        controller.engine.advance(Duration::from_secs(60));

        assert!(drain(&mut controller).is_empty());
        assert_eq!(controller.playlist().current_index(), 0);
    }

    #[test]
    fn on_track_finished_without_playlist_is_noop() {
        let mut controller = PlaybackController::new(MemoryEngine::new());

        controller.on_track_finished().unwrap();

        assert!(!controller.is_playing());
        assert!(controller.engine().loaded_item().is_none());
    }

    #[test]
    fn status_follows_rate() {
        let mut controller = controller_with(Duration::from_secs(10));
        assert_eq!(controller.status(), TransportState::Paused);

        controller.play().unwrap();
        assert_eq!(controller.status(), TransportState::Playing);

        controller.begin_fast_forwarding().unwrap();
        assert_eq!(controller.status(), TransportState::FastForwarding);

        controller.begin_rewinding().unwrap();
        assert_eq!(controller.status(), TransportState::Rewinding);

        controller.set_playlist(vec![]).unwrap();
        assert_eq!(controller.status(), TransportState::Idle);
    }
}
