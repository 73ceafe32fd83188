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

//! MPV-backed media engine.
//!
//! This module drives `libmpv` for decoding and output. Commands are applied
//! synchronously on the caller's thread; MPV's own decoder threads stay
//! behind the handle.
//!
//! Position, duration and title are not queried on demand. They are tracked
//! from observed property changes, drained by [`MediaEngine::poll_event`].
//!
//! # Rates
//!
//! MPV has no signed speed. A rate of zero maps to `pause`, any other rate
//! sets `speed` to its magnitude and `play-direction` to its sign.

use std::time::Duration;

use mpv::Format;
use tracing::{debug, trace};

use crate::{
    error::EngineError,
    model::TrackRef,
    player::engine::{EngineEvent, EngineObserver, MediaEngine},
};

/// Owned digest of one MPV event, so the handler borrow ends before the
/// engine state is touched.
enum MpvUpdate {
    Position(f64),
    Duration(f64),
    Title(String),
    FileLoaded,
    EndOfFile,
    Ignored,
}

pub struct MpvEngine {
    handler: mpv::MpvHandler,
    loaded: Option<TrackRef>,
    rate: f64,
    position: Duration,
    // Set between `loadfile` and MPV's file-loaded event, seeking is not
    // possible in that window and a fresh load starts at zero anyway.
    pending_load: bool,
}

fn mpv_error(context: &'static str) -> impl FnOnce(mpv::Error) -> EngineError {
    move |e| EngineError::backend(format!("{}: {:?}", context, e))
}

impl MpvEngine {
    /// Initialises a local MPV context with video output disabled and
    /// registers the property observers the engine relies on.
    pub fn new() -> Result<Self, EngineError> {
        let mut builder =
            mpv::MpvHandlerBuilder::new().map_err(mpv_error("Failed to create MPV builder"))?;
        builder
            .set_option("vo", "null")
            .map_err(mpv_error("Failed to set no video output"))?;
        builder
            .set_option("idle", "yes")
            .map_err(mpv_error("Failed to enable idle mode"))?;
        let mut handler = builder.build().map_err(mpv_error("Failed to build MPV handler"))?;

        handler
            .observe_property::<&str>("media-title", 0)
            .map_err(mpv_error("Failed to observe media-title"))?;
        handler
            .observe_property::<f64>("duration", 0)
            .map_err(mpv_error("Failed to observe duration"))?;
        handler
            .observe_property::<f64>("time-pos", 0)
            .map_err(mpv_error("Failed to observe time-pos"))?;

        handler
            .set_property("pause", true)
            .map_err(mpv_error("Failed to pause"))?;

        Ok(Self {
            handler,
            loaded: None,
            rate: 0.0,
            position: Duration::ZERO,
            pending_load: false,
        })
    }

    fn translate(event: mpv::Event) -> MpvUpdate {
        match event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("media-title", Format::Str(title)) => MpvUpdate::Title(title.to_string()),
                ("duration", Format::Double(duration)) if duration >= 0.0 => {
                    MpvUpdate::Duration(duration)
                }
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    MpvUpdate::Position(seconds)
                }
                _ => MpvUpdate::Ignored,
            },
            mpv::Event::FileLoaded => MpvUpdate::FileLoaded,
            mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
                MpvUpdate::EndOfFile
            }
            _ => MpvUpdate::Ignored,
        }
    }
}

impl EngineObserver for MpvEngine {
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

impl MediaEngine for MpvEngine {
    fn load(&mut self, track: &TrackRef) -> Result<(), EngineError> {
        debug!(%track, "mpv loadfile");

        self.handler
            .command(&["loadfile", track.as_str(), "replace"])
            .map_err(|e| EngineError::load(track.as_str(), format!("{:?}", e)))?;

        self.loaded = Some(track.clone());
        self.position = Duration::ZERO;
        self.pending_load = true;
        Ok(())
    }

    fn unload(&mut self) -> Result<(), EngineError> {
        self.handler
            .command(&["stop"])
            .map_err(mpv_error("Failed to stop"))?;
        self.handler
            .set_property("pause", true)
            .map_err(mpv_error("Failed to pause"))?;

        self.loaded = None;
        self.rate = 0.0;
        self.position = Duration::ZERO;
        self.pending_load = false;
        Ok(())
    }

    fn set_rate(&mut self, rate: f64) -> Result<(), EngineError> {
        if !rate.is_finite() {
            return Err(EngineError::InvalidRate(rate));
        }

        if rate == 0.0 {
            self.handler
                .set_property("pause", true)
                .map_err(mpv_error("Failed to pause"))?;
        } else {
            let direction = if rate < 0.0 { "backward" } else { "forward" };

            self.handler
                .set_property("speed", rate.abs())
                .map_err(mpv_error("Failed to set speed"))?;
            self.handler
                .set_property("play-direction", direction)
                .map_err(mpv_error("Failed to set play direction"))?;
            self.handler
                .set_property("pause", false)
                .map_err(mpv_error("Failed to unpause"))?;
        }

        self.rate = rate;
        Ok(())
    }

    fn seek_to_start(&mut self) -> Result<(), EngineError> {
        if self.loaded.is_some() && !self.pending_load {
            self.handler
                .command(&["seek", "0", "absolute"])
                .map_err(mpv_error("Failed to seek"))?;
        }

        self.position = Duration::ZERO;
        Ok(())
    }

    fn poll_event(&mut self) -> Option<EngineEvent> {
        loop {
            let update = match self.handler.wait_event(0.0) {
                Some(event) => Self::translate(event),
                None => return None,
            };

            match update {
                MpvUpdate::Position(seconds) => {
                    self.position = Duration::from_secs_f64(seconds);
                }
                MpvUpdate::Duration(seconds) => {
                    return Some(EngineEvent::DurationChanged(Duration::from_secs_f64(seconds)));
                }
                MpvUpdate::Title(title) => return Some(EngineEvent::TitleChanged(title)),
                MpvUpdate::FileLoaded => {
                    trace!("mpv file loaded");
                    self.pending_load = false;
                }
                // A file replaced by `load` can still report its end before
                // the replacement is loaded, that end belongs to the old file.
                MpvUpdate::EndOfFile if self.pending_load => {
                    trace!("mpv end of file from a replaced load, ignoring");
                }
                MpvUpdate::EndOfFile => return Some(EngineEvent::TrackFinished),
                MpvUpdate::Ignored => {}
            }
        }
    }
}
