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

//! Turning user inputs into playable track references.
//!
//! Inputs may be URLs, media files, directories or M3U playlists. Directories
//! are traversed with `WalkDir` and filtered by extension; playlist entries
//! are resolved relative to the playlist file.

use std::{fs, path::Path};

use tracing::debug;
use walkdir::WalkDir;

use crate::{error::ResolveError, model::TrackRef};

const PLAYLIST_EXTENSIONS: [&str; 2] = ["m3u", "m3u8"];

/// Expands every input, in order, into the track references it names.
///
/// # Arguments
///
/// * `inputs` - URLs, file paths, directory paths or M3U playlist paths.
/// * `extensions` - File extensions (without the dot) kept when expanding a
///   directory. Matching is case-insensitive.
///
/// # Errors
///
/// Returns an error if a local input does not exist, if a playlist cannot be
/// read, or if a directory cannot be traversed.
pub fn resolve_inputs<S: AsRef<str>>(
    inputs: &[S],
    extensions: &[String],
) -> Result<Vec<TrackRef>, ResolveError> {
    let mut tracks = vec![];

    for input in inputs {
        let input = input.as_ref();

        if is_url(input) {
            tracks.push(TrackRef::from(input));
            continue;
        }

        let path = Path::new(input);
        if path.is_dir() {
            tracks.extend(scan_directory(path, extensions)?);
        } else if path.is_file() {
            if has_extension(path, &PLAYLIST_EXTENSIONS) {
                tracks.extend(read_playlist(path)?);
            } else {
                tracks.push(TrackRef::from(path));
            }
        } else {
            return Err(ResolveError::NotFound(path.to_path_buf()));
        }
    }

    debug!(count = tracks.len(), "resolved inputs");

    Ok(tracks)
}

fn is_url(input: &str) -> bool {
    input.contains("://")
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.as_ref().eq_ignore_ascii_case(ext))
        })
}

/// Recursively collects media files below `root`, sorted by path.
fn scan_directory(root: &Path, extensions: &[String]) -> Result<Vec<TrackRef>, ResolveError> {
    let mut tracks = vec![];

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            tracks.push(TrackRef::from(entry.path()));
        }
    }

    Ok(tracks)
}

/// Reads an M3U playlist, skipping blank lines and `#` directives.
fn read_playlist(path: &Path) -> Result<Vec<TrackRef>, ResolveError> {
    let contents = fs::read_to_string(path).map_err(|source| ResolveError::Playlist {
        path: path.to_path_buf(),
        source,
    })?;

    let base = path.parent().unwrap_or(Path::new(""));

    let tracks = contents
        .lines()
        .map(|line| line.trim().trim_start_matches('\u{feff}'))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|entry| {
            if is_url(entry) || Path::new(entry).is_absolute() {
                TrackRef::from(entry)
            } else {
                TrackRef::from(base.join(entry).as_path())
            }
        })
        .collect();

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_kept_verbatim() {
        let tracks = resolve_inputs(&["https://radio.example/live.mp3"], &[]).unwrap();

        assert_eq!(tracks, vec![TrackRef::from("https://radio.example/live.mp3")]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let result = resolve_inputs(&["/definitely/not/here.flac"], &[]);

        assert!(matches!(result, Err(ResolveError::NotFound(_))));
    }

    #[test]
    fn extension_match_ignores_case() {
        let extensions = vec!["mp3".to_string()];

        assert!(has_extension(Path::new("a/B.MP3"), &extensions));
        assert!(!has_extension(Path::new("a/b.ogg"), &extensions));
        assert!(!has_extension(Path::new("a/noext"), &extensions));
    }
}
