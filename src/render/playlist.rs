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

//! UI rendering logic for the playlist table.
//!
//! Renders every track of the playlist, marks the current one with the
//! transport icon and highlights the selected row.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{App, render::icons::transport_icon};

pub(crate) fn draw_playlist(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .padding(Padding::horizontal(1));

    let playlist = app.controller.playlist();
    let theme = &app.theme;

    let header = Paragraph::new(format!("Playlist | {} tracks", playlist.len())).block(header_block);
    f.render_widget(header, chunks[0]);

    let current_icon = transport_icon(app.controller.status());

    let rows = playlist.tracks().iter().enumerate().map(|(index, track)| {
        let marker = if index == playlist.current_index() {
            Line::from(current_icon).style(Style::default().fg(theme.accent_colour))
        } else {
            Line::from("")
        };

        Row::new(vec![
            Cell::from(marker),
            Cell::from(Line::from(format!("{}", index + 1)).style(Style::default().fg(theme.table_index_fg)).alignment(Alignment::Right)),
            Cell::from(""),
            Cell::from(Line::from(track.display_name()).style(Style::default().fg(theme.table_track_fg))),
            Cell::from(Line::from(track.as_str()).style(Style::default().fg(theme.table_location_fg))),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(""),
            Cell::from(Line::from("#").alignment(Alignment::Right)),
            Cell::from(""),
            Cell::from("Track"),
            Cell::from("Location"),
        ])
        .style(Style::default().bold().fg(theme.accent_colour))
        .bottom_margin(1),
    )
    .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
    .block(Block::default());

    f.render_stateful_widget(table, chunks[1], &mut app.table_state);
}
