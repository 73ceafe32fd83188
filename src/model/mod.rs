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

//! Domain models and core data structures.
//!
//! This module defines the track reference handed around between the
//! playlist, the playback controller and the media engines, along with the
//! playlist state itself.

pub mod playlist;

use std::{fmt, path::Path};

/// An opaque locator for one playable item, typically a file path or a URL.
///
/// Track references are immutable once created and compare by their locator
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackRef(String);

impl TrackRef {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// The raw locator, as handed to the media engine.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A short human-readable name: the last path segment of the locator.
    pub fn display_name(&self) -> &str {
        self.0
            .trim_end_matches('/')
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for TrackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackRef {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for TrackRef {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

impl From<&Path> for TrackRef {
    fn from(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}

impl AsRef<str> for TrackRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_last_segment() {
        assert_eq!(TrackRef::from("/music/a/01 - Intro.flac").display_name(), "01 - Intro.flac");
        assert_eq!(TrackRef::from("http://host/stream/").display_name(), "stream");
        assert_eq!(TrackRef::from("plain").display_name(), "plain");
    }

    #[test]
    fn compares_by_locator() {
        assert_eq!(TrackRef::from("a.mp3"), TrackRef::new(String::from("a.mp3")));
        assert_ne!(TrackRef::from("a.mp3"), TrackRef::from("b.mp3"));
    }
}
