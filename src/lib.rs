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

//! # Playlist sequencing.
//!
//! Tracks which entry of an ordered playlist is current and turns transport
//! commands into rate and position changes on a media engine.
//!
//! * [`model`]: Track references and the playlist state.
//! * [`player`]: The playback controller, the engine seam and its backends.
//! * [`resolve`]: Expanding files, directories and M3U playlists into tracks.
//! * [`config`]: The persisted application configuration.

pub mod config;
pub mod error;
pub mod model;
pub mod player;
pub mod resolve;

pub use error::{EngineError, ResolveError};
pub use model::{TrackRef, playlist::PlaylistState};
pub use player::{
    FAST_FORWARD_RATE, PAUSED_RATE, PLAY_RATE, PlaybackController, REWIND_RATE, TransportState,
    engine::{EngineEvent, EngineObserver, MediaEngine},
    memory::MemoryEngine,
};
