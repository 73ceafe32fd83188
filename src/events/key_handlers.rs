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

//! Keyboard input routing.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use listplay::{EngineError, TransportState};
use tracing::warn;

use crate::{App, events::AppEvent};

/// Maps keyboard input to application actions and transport commands.
///
/// * **Application Control**: `q` exits.
/// * **Navigation**: `j`/`k` (or the arrow keys) move the playlist
///   selection, `Enter` jumps to the selected track and plays it.
/// * **Transport**: space toggles play/pause, `n`/`p` skip forward and back,
///   `f`/`r` start fast-forwarding or rewinding on the first press and
///   return to normal play on the second.
///
/// # Errors
///
/// Engine failures are reported to the UI as [`AppEvent::Error`] rather than
/// ending the event loop. Only a closed event channel is returned as an
/// error.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let result = match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            Ok(())
        }

        KeyCode::Char('j') | KeyCode::Down => {
            select_relative(app, 1);
            Ok(())
        }
        KeyCode::Char('k') | KeyCode::Up => {
            select_relative(app, -1);
            Ok(())
        }
        KeyCode::Enter => play_selected(app),

        KeyCode::Char(' ') => {
            if app.controller.is_playing() {
                app.controller.pause()
            } else {
                app.controller.play()
            }
        }
        KeyCode::Char('f') => {
            if app.controller.status() == TransportState::FastForwarding {
                app.controller.end_fast_forwarding()
            } else {
                app.controller.begin_fast_forwarding()
            }
        }
        KeyCode::Char('r') => {
            if app.controller.status() == TransportState::Rewinding {
                app.controller.end_rewinding()
            } else {
                app.controller.begin_rewinding()
            }
        }
        KeyCode::Char('n') => track_changed(app, |app| app.controller.skip_to_next_track()),
        KeyCode::Char('p') => track_changed(app, |app| app.controller.jump_to_previous_track()),

        _ => Ok(()),
    };

    if let Err(e) = result {
        warn!(error = %e, "transport command failed");
        app.event_tx.send(AppEvent::Error(e.to_string()))?;
    } else {
        app.status_message = None;
    }

    Ok(())
}

fn select_relative(app: &mut App, delta: isize) {
    let len = app.controller.playlist().len();
    if len == 0 {
        return;
    }

    let selected = app.table_state.selected().unwrap_or(0);
    let next = selected.saturating_add_signed(delta).min(len - 1);
    app.table_state.select(Some(next));
}

fn play_selected(app: &mut App) -> Result<(), EngineError> {
    let Some(index) = app.table_state.selected() else {
        return Ok(());
    };

    track_changed(app, |app| {
        if app.controller.set_current_index(index)? {
            app.controller.play()?;
        }
        Ok(())
    })
}

// Runs a command that may change the current track and drops the now
// playing details if the loaded track changed.
fn track_changed(
    app: &mut App,
    command: impl FnOnce(&mut App) -> Result<(), EngineError>,
) -> Result<(), EngineError> {
    let before = app.controller.playlist().current_index();
    command(app)?;

    app.now_playing.follow(app.controller.engine().loaded_item());

    let current = app.controller.playlist().current_index();
    if current != before {
        app.table_state.select(Some(current));
    }

    Ok(())
}
