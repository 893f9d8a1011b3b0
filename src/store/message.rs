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

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which side of the conversation a message belongs to.
///
/// Rendering (bubble alignment, colors) is a pure function of this tag --
/// there is no per-message dynamic dispatch anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outgoing,
    Incoming,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub timestamp: DateTime<Local>,
    pub direction: Direction,
}

impl Message {
    pub fn outgoing(text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self { text: text.into(), timestamp, direction: Direction::Outgoing }
    }

    pub fn incoming(text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self { text: text.into(), timestamp, direction: Direction::Incoming }
    }

    /// Calendar-day grouping key in the local calendar. Two messages with the
    /// same key belong to the same section regardless of time-of-day.
    #[must_use]
    pub fn date_key(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    #[must_use]
    pub fn is_outgoing(&self) -> bool {
        self.direction == Direction::Outgoing
    }
}
