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

use anyhow::Result;
use listplay::EngineEvent;
use tracing::warn;

use crate::{App, events::AppEvent};

/// Drains pending engine notifications.
///
/// A finished track is already handled by the controller by the time it
/// shows up here, the UI only drops the title and duration of a track that
/// is no longer loaded and follows the new current track with its selection.
pub(super) fn handle_tick(app: &mut App) -> Result<()> {
    loop {
        let event = match app.controller.poll_engine() {
            Ok(Some(event)) => event,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "engine failure while advancing");
                app.event_tx.send(AppEvent::Error(e.to_string()))?;
                break;
            }
        };

        match event {
            EngineEvent::TrackFinished => {
                app.now_playing.follow(app.controller.engine().loaded_item());
                let current = app.controller.playlist().current_index();
                app.table_state.select(Some(current));
            }
            EngineEvent::DurationChanged(duration) => app.now_playing.duration = Some(duration),
            EngineEvent::TitleChanged(title) => app.now_playing.title = Some(title),
        }
    }

    Ok(())
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status_message = Some(message);
}
