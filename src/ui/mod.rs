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

mod bubble;
mod chat;
mod date_header;
mod input;
mod layout;
pub mod theme;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();

    let input_visual_lines = input::visual_line_count(app, frame_area.width);
    let areas = layout::compute(frame_area, input_visual_lines);

    // Body: sectioned message list (includes the empty-state hint)
    chat::render(frame, areas.body, app);

    render_separator(frame, areas.input_sep);
    input::render(frame, areas.input, app);

    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area);
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let line = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(line, Style::default().fg(theme::DIM)))),
        area,
    );
}

const FOOTER_PAD: &str = "  ";

fn render_footer(frame: &mut Frame, area: Rect) {
    let hint = format!(
        "{FOOTER_PAD}Enter send · Shift+Enter newline · Ctrl+R fetch · Ctrl+Up/Down scroll · Ctrl+C quit"
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(theme::DIM)))),
        area,
    );
}
