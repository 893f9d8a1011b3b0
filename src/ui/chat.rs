// grouped-chat — a terminal chat screen with date-grouped history
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::app::App;
use crate::ui::{bubble, date_header, theme};
use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let today = Local::now().date_naive();
    let tail = app.store.last_position();

    let mut all_lines: Vec<Line<'static>> = Vec::new();
    // Line index just past the most recent message's bubble; scroll-follow
    // keeps this line on screen (the terminal analog of scroll-to-bottom).
    let mut tail_end = 0usize;

    if app.store.is_empty() {
        all_lines.extend(empty_state_lines());
    }

    for section in 0..app.store.section_count() {
        // Sections are never empty; a desync here should panic, not hide
        let header_key = app.store.message(section, 0).date_key();
        all_lines.push(Line::default());
        all_lines.push(date_header::line(header_key, today));
        all_lines.push(Line::default());

        for row in 0..app.store.row_count(section) {
            let message = app.store.message(section, row);
            all_lines.extend(bubble::lines(message, area.width));
            if tail == Some((section, row)) {
                tail_end = all_lines.len();
            }
            all_lines.push(Line::default());
        }
    }

    let content_height = all_lines.len();
    let viewport_height = area.height as usize;
    // Bubbles are pre-wrapped, so line count is the real content height
    let paragraph = Paragraph::new(Text::from(all_lines));

    if content_height <= viewport_height {
        // Short history: bottom-align in a sub-rect so it stacks above the
        // composer, like a chat screen should
        let offset = (viewport_height - content_height) as u16;
        let render_area = Rect {
            x: area.x,
            y: area.y + offset,
            width: area.width,
            height: content_height as u16,
        };
        app.scroll_offset = 0;
        app.scroll_target = 0;
        app.scroll_pos = 0.0;
        app.auto_scroll = true;
        frame.render_widget(paragraph, render_area);
    } else {
        let max_scroll = content_height - viewport_height;
        if app.auto_scroll {
            // Follow the newest message: put its last bubble line at the
            // bottom edge of the viewport
            app.scroll_target = tail_end.saturating_sub(viewport_height).min(max_scroll);
        }
        app.scroll_target = app.scroll_target.min(max_scroll);

        let target = app.scroll_target as f32;
        let delta = target - app.scroll_pos;
        if delta.abs() < 0.01 {
            app.scroll_pos = target;
        } else {
            // Smooth over ~2-3 frames at 60fps.
            app.scroll_pos += delta * 0.5;
        }
        app.scroll_offset = app.scroll_pos.round() as usize;
        if app.scroll_offset >= max_scroll {
            app.auto_scroll = true;
        }
        frame.render_widget(paragraph.scroll((app.scroll_offset as u16, 0)), area);
    }
}

fn empty_state_lines() -> Vec<Line<'static>> {
    let dim = Style::default().fg(theme::DIM);
    vec![
        Line::from(Span::styled("No messages yet", dim)).alignment(Alignment::Center),
        Line::from(Span::styled("Press Ctrl+R to fetch the demo conversation", dim))
            .alignment(Alignment::Center),
    ]
}
