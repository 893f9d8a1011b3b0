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

mod message;
pub mod transcript;

pub use message::{Direction, Message};

use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A contiguous run of messages sharing one calendar day, rendered under a
/// single date header.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: NaiveDate,
    pub messages: Vec<Message>,
}

/// Minimal-diff descriptor produced by [`GroupedMessageStore::insert`] so the
/// presentation layer can apply a targeted update instead of a full reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The message landed in an existing section; animate one row insertion.
    /// `direction` hints which side the row slides in from.
    Appended { section: usize, row: usize, direction: Direction },
    /// A new trailing section was created holding only this message.
    NewSection { section: usize },
}

/// Owns the canonical message list partitioned into date-keyed sections.
///
/// Invariants: sections are ordered ascending by key after `load_all`, keys
/// are unique, no section is ever empty, and every message lives in exactly
/// one section. Within a section messages keep arrival order; they are never
/// re-sorted by timestamp after insertion.
///
/// `insert` only compares against the *last* section's key. A message whose
/// timestamp falls on an earlier day therefore opens a new trailing section
/// instead of joining its chronological slot. Message arrival is effectively
/// chronological here, so this stays as documented behavior rather than
/// getting a general merge.
#[derive(Debug, Default)]
pub struct GroupedMessageStore {
    sections: Vec<Section>,
}

impl GroupedMessageStore {
    #[must_use]
    pub fn new() -> Self {
        Self { sections: Vec::new() }
    }

    /// Bulk (re)grouping for an initial load or refresh. Replaces any
    /// existing state. Sections come out ascending by day; the relative order
    /// of messages sharing a day is preserved from the input.
    pub fn load_all(&mut self, messages: impl IntoIterator<Item = Message>) -> &[Section] {
        let mut by_day: BTreeMap<NaiveDate, Vec<Message>> = BTreeMap::new();
        for message in messages {
            by_day.entry(message.date_key()).or_default().push(message);
        }
        self.sections =
            by_day.into_iter().map(|(key, messages)| Section { key, messages }).collect();
        &self.sections
    }

    /// Incremental insertion of one newly arrived message (either side).
    ///
    /// # Panics
    /// Panics if `message.text` is blank after trimming -- the composer and
    /// feed both enforce non-empty text, so a blank here is a caller bug and
    /// must not silently become an empty bubble.
    pub fn insert(&mut self, message: Message) -> InsertOutcome {
        assert!(!message.text.trim().is_empty(), "blank message text reached the store");

        let key = message.date_key();
        let direction = message.direction;
        let last_index = self.sections.len().wrapping_sub(1);
        match self.sections.last_mut() {
            Some(last) if last.key == key => {
                last.messages.push(message);
                InsertOutcome::Appended {
                    section: last_index,
                    row: last.messages.len() - 1,
                    direction,
                }
            }
            _ => {
                self.sections.push(Section { key, messages: vec![message] });
                InsertOutcome::NewSection { section: self.sections.len() - 1 }
            }
        }
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of messages in `section`. Out-of-range is a programming error
    /// and panics -- a desynchronized caller must surface loudly.
    #[must_use]
    pub fn row_count(&self, section: usize) -> usize {
        self.sections[section].messages.len()
    }

    /// The message at `(section, row)`. Out-of-range panics.
    #[must_use]
    pub fn message(&self, section: usize, row: usize) -> &Message {
        &self.sections[section].messages[row]
    }

    /// First message of `section`, which supplies the date header timestamp.
    /// The section index itself must be in range.
    #[must_use]
    pub fn first_message_in_section(&self, section: usize) -> Option<&Message> {
        self.sections[section].messages.first()
    }

    /// Coordinates of the most recently inserted message, or `None` when
    /// empty. Insertion is append-only, so this is always the tail.
    #[must_use]
    pub fn last_position(&self) -> Option<(usize, usize)> {
        let section = self.sections.last()?;
        Some((self.sections.len() - 1, section.messages.len() - 1))
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
