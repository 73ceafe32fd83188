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

//! Render the now playing panel.
//!
//! This module renders the transport state, the current track, elapsed and
//! total time and the progress bar.

use ratatui::{
    Frame, layout::{Alignment, Constraint, Direction, Layout, Rect}, style::{Color, Modifier, Style, Stylize}, text::{Line, Span}, widgets::{Block, Borders, Gauge, Padding, Paragraph}
};

use crate::{App, render::icons::transport_icon, util};

/// Renders the now playing widget.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(30),
        ])
        .split(chunks[0]);

    let controller = &app.controller;
    let icon = transport_icon(controller.status());

    let Some(track) = controller.current_track_url() else {
        let idle_line = Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
            Span::raw("No playlist"),
        ]);
        f.render_widget(Paragraph::new(idle_line), info_chunks[0]);
        return;
    };

    let title = app.now_playing.title.as_deref().unwrap_or(track.display_name());
    let playlist = controller.playlist();

    let track_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
        Span::raw(format!("  {}/{}", playlist.current_index() + 1, playlist.len())),
    ]);
    f.render_widget(Paragraph::new(track_line), info_chunks[0]);

    let position = controller.engine().position();
    let duration = app.now_playing.duration.unwrap_or_default();

    let time_line = Line::from(vec![
        Span::styled(util::format::format_time(position.as_secs()), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
        Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(util::format::format_time(duration.as_secs()), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
        Span::styled(format!("  x{:.1}", controller.engine().rate()), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
    ]);

    let time_p = Paragraph::new(time_line).alignment(Alignment::Right);

    f.render_widget(time_p, info_chunks[1]);

    let ratio = if duration.is_zero() {
        0.0
    } else {
        (position.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
    };

    let position_gauge = Gauge::default()
        .gauge_style(Style::default()
            .fg(app.theme.accent_colour)
            .bg(app.theme.gauge_track_colour)
        )
        .ratio(ratio)
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[2]);
}
