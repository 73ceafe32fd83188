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

//! Headless in-process media engine.
//!
//! [`MemoryEngine`] keeps rate, position and the loaded item as plain state
//! and lets time be driven explicitly with [`MemoryEngine::advance`]. Nothing
//! is decoded.

use std::{collections::VecDeque, time::Duration};

use tracing::trace;

use crate::{
    error::EngineError,
    model::TrackRef,
    player::engine::{EngineEvent, EngineObserver, MediaEngine},
};

#[derive(Debug, Default)]
pub struct MemoryEngine {
    loaded: Option<TrackRef>,
    rate: f64,
    position: Duration,
    track_duration: Option<Duration>,
    events: VecDeque<EngineEvent>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine on which every loaded track lasts `duration`.
    pub fn with_track_duration(duration: Duration) -> Self {
        Self {
            track_duration: Some(duration),
            ..Self::default()
        }
    }

    /// Moves the playback position by `rate × elapsed`.
    ///
    /// Reverse play stops at the start of the track. Forward play stops at
    /// the track duration, if known, and queues [`EngineEvent::TrackFinished`]
    /// when it gets there.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.loaded.is_none() || self.rate == 0.0 {
            return;
        }

        let delta = elapsed.mul_f64(self.rate.abs());

        if self.rate < 0.0 {
            self.position = self.position.saturating_sub(delta);
            return;
        }

        let before = self.position;
        self.position += delta;

        if let Some(duration) = self.track_duration {
            if self.position >= duration {
                self.position = duration;
                if before < duration {
                    self.events.push_back(EngineEvent::TrackFinished);
                }
            }
        }
    }

    /// Queues an end-of-track notification as if the track just ended.
    pub fn finish_track(&mut self) {
        if self.loaded.is_some() {
            self.events.push_back(EngineEvent::TrackFinished);
        }
    }
}

impl EngineObserver for MemoryEngine {
    fn rate(&self) -> f64 {
        self.rate
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn loaded_item(&self) -> Option<&TrackRef> {
        self.loaded.as_ref()
    }
}

impl MediaEngine for MemoryEngine {
    fn load(&mut self, track: &TrackRef) -> Result<(), EngineError> {
        trace!(%track, "memory engine load");

        self.loaded = Some(track.clone());
        self.position = Duration::ZERO;
        self.events.retain(|event| *event != EngineEvent::TrackFinished);

        if let Some(duration) = self.track_duration {
            self.events.push_back(EngineEvent::DurationChanged(duration));
        }

        Ok(())
    }

    fn unload(&mut self) -> Result<(), EngineError> {
        self.loaded = None;
        self.rate = 0.0;
        self.position = Duration::ZERO;
        self.events.clear();
        Ok(())
    }

    fn set_rate(&mut self, rate: f64) -> Result<(), EngineError> {
        if !rate.is_finite() {
            return Err(EngineError::InvalidRate(rate));
        }

        self.rate = rate;
        Ok(())
    }

    fn seek_to_start(&mut self) -> Result<(), EngineError> {
        self.position = Duration::ZERO;
        Ok(())
    }

    fn poll_event(&mut self) -> Option<EngineEvent> {
        self.events.pop_front()
    }
}
