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

/// The multi-line message composer. Grows with its content (the layout asks
/// [`crate::ui`] how many visual lines it needs) and guarantees that only
/// non-blank, trimmed text ever leaves it via [`Composer::take_submission`].
#[derive(Debug)]
pub struct Composer {
    pub lines: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

impl Composer {
    #[must_use]
    pub fn new() -> Self {
        Self { lines: vec![String::new()], cursor_row: 0, cursor_col: 0 }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    /// Commit the current content. Returns the trimmed text and clears the
    /// buffer, or `None` (leaving the buffer alone) when the content is blank.
    /// This is the single gate between the composer and the store: blank
    /// submissions never produce a message.
    pub fn take_submission(&mut self) -> Option<String> {
        let text = self.text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let submission = trimmed.to_owned();
        self.clear();
        Some(submission)
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        line.insert(byte_idx, c);
        self.cursor_col += 1;
    }

    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        let rest = line[byte_idx..].to_owned();
        line.truncate(byte_idx);
        self.cursor_row += 1;
        self.lines.insert(self.cursor_row, rest);
        self.cursor_col = 0;
    }

    /// Insert pasted text, honoring embedded newlines.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' || c == '\r' {
                self.insert_newline();
            } else {
                self.insert_char(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            self.cursor_col -= 1;
            let byte_idx = char_to_byte_index(line, self.cursor_col);
            line.remove(byte_idx);
        } else if self.cursor_row > 0 {
            // Join this line onto the previous one
            let removed = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].chars().count();
            self.lines[self.cursor_row].push_str(&removed);
        }
    }

    pub fn delete_forward(&mut self) {
        let line_len = self.lines[self.cursor_row].chars().count();
        if self.cursor_col < line_len {
            let line = &mut self.lines[self.cursor_row];
            let byte_idx = char_to_byte_index(line, self.cursor_col);
            line.remove(byte_idx);
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].chars().count();
        }
    }

    pub fn move_right(&mut self) {
        let line_len = self.lines[self.cursor_row].chars().count();
        if self.cursor_col < line_len {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.lines[self.cursor_row].chars().count());
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.lines[self.cursor_row].chars().count());
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_line_end(&mut self) {
        self.cursor_col = self.lines[self.cursor_row].chars().count();
    }

    #[must_use]
    pub fn line_count(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a character index to a byte index within a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 8
    // =====

    use super::*;
    use pretty_assertions::assert_eq;

    fn composer_with(text: &str) -> Composer {
        let mut c = Composer::new();
        c.insert_str(text);
        c
    }

    #[test]
    fn typing_builds_text() {
        let c = composer_with("hello");
        assert_eq!(c.text(), "hello");
        assert!(!c.is_empty());
    }

    #[test]
    fn newline_splits_at_cursor() {
        let mut c = composer_with("hello");
        c.cursor_col = 3;
        c.insert_newline();
        assert_eq!(c.text(), "hel\nlo");
        assert_eq!((c.cursor_row, c.cursor_col), (1, 0));
    }

    #[test]
    fn backspace_joins_lines() {
        let mut c = composer_with("ab\ncd");
        c.cursor_row = 1;
        c.cursor_col = 0;
        c.backspace();
        assert_eq!(c.text(), "abcd");
        assert_eq!((c.cursor_row, c.cursor_col), (0, 2));
    }

    #[test]
    fn take_submission_trims_and_clears() {
        let mut c = composer_with("  hi there \n");
        let text = c.take_submission();
        assert_eq!(text.as_deref(), Some("hi there"));
        assert!(c.is_empty());
    }

    #[test]
    fn blank_submission_is_rejected_and_kept() {
        let mut c = composer_with("   \n  ");
        assert_eq!(c.take_submission(), None);
        // Buffer untouched so the user can keep editing
        assert_eq!(c.text(), "   \n  ");
    }

    #[test]
    fn submission_fires_at_most_once() {
        let mut c = composer_with("once");
        assert_eq!(c.take_submission().as_deref(), Some("once"));
        assert_eq!(c.take_submission(), None);
    }

    #[test]
    fn cursor_clamps_when_moving_to_shorter_line() {
        let mut c = composer_with("long line\nab");
        c.cursor_row = 0;
        c.cursor_col = 8;
        c.move_down();
        assert_eq!((c.cursor_row, c.cursor_col), (1, 2));
    }

    #[test]
    fn multibyte_chars_edit_cleanly() {
        let mut c = composer_with("héllo");
        c.cursor_col = 2;
        c.backspace();
        assert_eq!(c.text(), "hllo");
    }
}
