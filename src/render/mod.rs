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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod icons;
mod player;
mod playlist;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::Paragraph,
};

use crate::{
    App,
    render::{player::draw_player, playlist::draw_playlist},
};

const KEY_HELP: &str =
    " space play/pause  n next  p previous  f fast-forward  r rewind  enter jump  q quit";

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the playlist table, the now playing panel and a
/// one line footer showing either the last error or the key bindings.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, the playlist
///   table keeps its scroll position in there.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);

    draw_playlist(f, outer[0], app);

    draw_player(f, outer[1], app);

    draw_footer(f, outer[2], app);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer = match &app.status_message {
        Some(message) => Paragraph::new(format!(" {}", message))
            .style(Style::default().fg(app.theme.error_colour)),
        None => Paragraph::new(KEY_HELP).style(Style::default().fg(app.theme.border_colour)),
    };

    f.render_widget(footer.bold(), area);
}
