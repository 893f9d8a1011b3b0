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

use crate::ui::theme;
use chrono::NaiveDate;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Header text for a section's day: "Today", "Yesterday", or the date.
/// Deterministic in `(key, today)` so it stays testable without a clock.
#[must_use]
pub fn label(key: NaiveDate, today: NaiveDate) -> String {
    if key == today {
        "Today".to_owned()
    } else if today.pred_opt() == Some(key) {
        "Yesterday".to_owned()
    } else {
        key.format("%d/%m/%Y").to_string()
    }
}

/// The centered header pill rendered above each section.
#[must_use]
pub fn line(key: NaiveDate, today: NaiveDate) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} ", label(key, today)),
        Style::default().fg(theme::HEADER_FG).bg(theme::HEADER_BG),
    ))
    .alignment(Alignment::Center)
}
