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
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

/// Horizontal padding to match the footer inset.
const INPUT_PAD: u16 = 2;

/// Prompt prefix width: "❯ " = 2 columns
const PROMPT_WIDTH: u16 = 2;

/// The composer grows with its content up to this many visual lines; past
/// that the area stops growing and the oldest lines scroll out of view.
const MAX_COMPOSER_HEIGHT: u16 = 6;

const PLACEHOLDER: &str = "Type a message";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + INPUT_PAD,
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    };

    if app.composer.is_empty() {
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", theme::PROMPT_CHAR),
                Style::default().fg(theme::HEADER_BG),
            ),
            Span::styled(PLACEHOLDER, Style::default().fg(theme::DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), padded);

        // Cursor after prompt char
        frame.set_cursor_position((padded.x + PROMPT_WIDTH, padded.y));
        return;
    }

    // Prompt on the first line, indent on continuation lines
    let lines: Vec<Line> = app
        .composer
        .lines
        .iter()
        .enumerate()
        .map(|(row, text)| {
            let prefix = if row == 0 {
                Span::styled(
                    format!("{} ", theme::PROMPT_CHAR),
                    Style::default().fg(theme::HEADER_BG),
                )
            } else {
                Span::raw("  ")
            };
            Line::from(vec![prefix, Span::raw(text.clone())])
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, padded);

    // Place the terminal cursor accounting for visual wrapping.
    let content_width = padded.width.saturating_sub(PROMPT_WIDTH) as usize;
    if content_width == 0 {
        return;
    }

    let mut visual_row: u16 = 0;
    #[allow(clippy::cast_possible_truncation)]
    for row in 0..app.composer.lines.len() {
        let line_chars = app.composer.lines[row].chars().count();
        let wrapped_lines = (((line_chars + content_width) / content_width).max(1)) as u16;

        if row == app.composer.cursor_row {
            let cursor_col = app.composer.cursor_col;
            let wrap_row = (cursor_col / content_width) as u16;
            let wrap_col = (cursor_col % content_width) as u16;

            let cursor_x = padded.x + PROMPT_WIDTH + wrap_col;
            let cursor_y = padded.y + visual_row + wrap_row;

            if cursor_x < padded.right() && cursor_y < padded.bottom() {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
            return;
        }
        visual_row += wrapped_lines;
    }
}

/// Number of visual lines the composer needs, accounting for wrapping and
/// clamped to the growth limit. The layout allocates exactly this height --
/// this is the auto-grow contract between composer and screen.
#[must_use]
pub fn visual_line_count(app: &App, area_width: u16) -> u16 {
    if app.composer.is_empty() {
        return 1;
    }
    let content_width =
        area_width.saturating_sub(INPUT_PAD * 2).saturating_sub(PROMPT_WIDTH) as usize;
    if content_width == 0 {
        return app.composer.line_count().min(MAX_COMPOSER_HEIGHT);
    }

    let mut total: u16 = 0;
    #[allow(clippy::cast_possible_truncation)]
    for line in &app.composer.lines {
        let chars = line.chars().count();
        let wrapped = (((chars + content_width) / content_width).max(1)) as u16;
        total = total.saturating_add(wrapped);
    }
    total.min(MAX_COMPOSER_HEIGHT)
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 4
    // =====

    use super::*;
    use pretty_assertions::assert_eq;

    fn app_with_input(text: &str) -> App {
        let mut app = App::test_default();
        app.composer.insert_str(text);
        app
    }

    #[test]
    fn empty_composer_takes_one_line() {
        assert_eq!(visual_line_count(&App::test_default(), 80), 1);
    }

    #[test]
    fn each_newline_adds_a_visual_line() {
        let app = app_with_input("a\nb\nc");
        assert_eq!(visual_line_count(&app, 80), 3);
    }

    #[test]
    fn long_lines_wrap_into_extra_visual_lines() {
        // width 24 - 4 pad - 2 prompt = 18 content columns
        let app = app_with_input(&"x".repeat(30));
        assert_eq!(visual_line_count(&app, 24), 2);
    }

    #[test]
    fn growth_clamps_at_the_maximum() {
        let app = app_with_input(&"line\n".repeat(20));
        assert_eq!(visual_line_count(&app, 80), MAX_COMPOSER_HEIGHT);
    }
}
