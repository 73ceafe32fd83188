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

//! Library error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a media engine backend.
///
/// Transport commands on an empty playlist never produce one of these, they
/// only surface when the engine itself rejects an instruction.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to load '{track}': {reason}")]
    Load { track: String, reason: String },
    #[error("invalid playback rate {0}")]
    InvalidRate(f64),
    #[error("engine backend error: {0}")]
    Backend(String),
}

impl EngineError {
    pub fn load(track: &str, reason: impl ToString) -> Self {
        EngineError::Load {
            track: track.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn backend(reason: impl ToString) -> Self {
        EngineError::Backend(reason.to_string())
    }
}

/// Failures turning user inputs into track references.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no such file or directory: {0}")]
    NotFound(PathBuf),
    #[error("failed to read playlist {path}: {source}")]
    Playlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to scan directory: {0}")]
    Walk(#[from] walkdir::Error),
}
