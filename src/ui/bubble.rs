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

use crate::store::{Direction, Message};
use crate::ui::theme;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Bubbles occupy at most 70% of the list width, like the reference layout.
const MAX_WIDTH_NUM: usize = 7;
const MAX_WIDTH_DEN: usize = 10;

/// One horizontal padding cell on each side of the bubble text.
const BUBBLE_PAD: usize = 1;

/// Render one message as pre-wrapped bubble lines. Alignment and color are a
/// pure function of the direction tag: outgoing hugs the right edge,
/// incoming the left.
#[must_use]
pub fn lines(message: &Message, area_width: u16) -> Vec<Line<'static>> {
    let max_content =
        (usize::from(area_width) * MAX_WIDTH_NUM / MAX_WIDTH_DEN).saturating_sub(2 * BUBBLE_PAD);
    let (bg, alignment) = match message.direction {
        Direction::Outgoing => (theme::OUTGOING_BG, Alignment::Right),
        Direction::Incoming => (theme::INCOMING_BG, Alignment::Left),
    };
    let style = Style::default().fg(theme::BUBBLE_FG).bg(bg);

    wrap_text(&message.text, max_content.max(1))
        .into_iter()
        .map(|row| Line::from(Span::styled(format!(" {row} "), style)).alignment(alignment))
        .collect()
}

/// Greedy word wrap. Words wider than the limit are hard-broken by display
/// width so CJK and emoji don't overflow the bubble.
pub(super) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut rows = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            for piece in break_word(word, max_width) {
                let fits = if current.is_empty() {
                    piece.width() <= max_width
                } else {
                    current.width() + 1 + piece.width() <= max_width
                };
                if fits {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(&piece);
                } else {
                    if !current.is_empty() {
                        rows.push(std::mem::take(&mut current));
                    }
                    current = piece;
                }
            }
        }
        // Empty paragraphs keep their row so multi-line messages hold shape
        rows.push(current);
    }
    rows
}

fn break_word(word: &str, max_width: usize) -> Vec<String> {
    if word.width() <= max_width {
        return vec![word.to_owned()];
    }
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > max_width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
