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

//! The media engine seam.
//!
//! The playback controller never decodes or renders anything itself, it only
//! tells an engine what to load, where to seek and how fast to play. Engines
//! implement [`MediaEngine`]; callers outside the controller only ever see the
//! read-only [`EngineObserver`] half.

use std::time::Duration;

use crate::{error::EngineError, model::TrackRef};

/// Notifications raised by an engine between commands.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The loaded track played through to its end.
    TrackFinished,
    DurationChanged(Duration),
    TitleChanged(String),
}

/// Read-only view of an engine's playback state.
pub trait EngineObserver {
    /// Signed playback speed, `0.0` when paused.
    fn rate(&self) -> f64;

    /// Position within the loaded track.
    fn position(&self) -> Duration;

    /// The track currently loaded, if any.
    fn loaded_item(&self) -> Option<&TrackRef>;
}

/// A media engine driven by the playback controller.
pub trait MediaEngine: EngineObserver {
    /// Replaces whatever is loaded with `track`, positioned at its start.
    fn load(&mut self, track: &TrackRef) -> Result<(), EngineError>;

    /// Drops the loaded track and stops playback.
    fn unload(&mut self) -> Result<(), EngineError>;

    fn set_rate(&mut self, rate: f64) -> Result<(), EngineError>;

    fn seek_to_start(&mut self) -> Result<(), EngineError>;

    /// Returns the next pending notification without blocking.
    fn poll_event(&mut self) -> Option<EngineEvent> {
        None
    }
}
