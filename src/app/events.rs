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

use super::feed::{self, FeedEvent};
use super::input_submit::submit_message;
use super::state::App;
use crate::store::InsertOutcome;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

const MOUSE_SCROLL_LINES: usize = 3;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key(app, key);
        }
        Event::Mouse(mouse) => {
            handle_mouse_event(app, mouse);
        }
        Event::Paste(text) => {
            app.composer.insert_str(&text);
        }
        // Resize is handled automatically by ratatui
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        // Ctrl+C: quit
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        // Ctrl+R: pull the scripted received messages (the demo feed)
        (KeyCode::Char('r'), m) if m.contains(KeyModifiers::CONTROL) => {
            feed::request_refresh(app);
        }
        // Ctrl+L: force full terminal redraw
        (KeyCode::Char('l'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.force_redraw = true;
        }
        // Enter (no shift): submit the composer
        (KeyCode::Enter, m) if !m.contains(KeyModifiers::SHIFT) => {
            submit_message(app);
        }
        // Shift+Enter: insert newline
        (KeyCode::Enter, _) => {
            app.composer.insert_newline();
        }
        (KeyCode::Up, m) if m.contains(KeyModifiers::CONTROL) => {
            // Ctrl+Up: scroll history up, leaving scroll-follow
            app.scroll_target = app.scroll_target.saturating_sub(1);
            app.auto_scroll = false;
        }
        (KeyCode::Down, m) if m.contains(KeyModifiers::CONTROL) => {
            // Ctrl+Down: scroll history down (clamped in chat::render)
            app.scroll_target = app.scroll_target.saturating_add(1);
        }
        // Composer navigation and editing
        (KeyCode::Left, _) => app.composer.move_left(),
        (KeyCode::Right, _) => app.composer.move_right(),
        (KeyCode::Up, _) => app.composer.move_up(),
        (KeyCode::Down, _) => app.composer.move_down(),
        (KeyCode::Home, _) => app.composer.move_line_start(),
        (KeyCode::End, _) => app.composer.move_line_end(),
        (KeyCode::Backspace, _) => app.composer.backspace(),
        (KeyCode::Delete, _) => app.composer.delete_forward(),
        (KeyCode::Char(c), m) if m.is_empty() || m == KeyModifiers::SHIFT => {
            app.composer.insert_char(c);
        }
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_target = app.scroll_target.saturating_sub(MOUSE_SCROLL_LINES);
            app.auto_scroll = false;
        }
        MouseEventKind::ScrollDown => {
            app.scroll_target = app.scroll_target.saturating_add(MOUSE_SCROLL_LINES);
            // auto_scroll re-engagement handled by chat::render clamping
        }
        _ => {}
    }
}

/// Apply one feed event. Insertion happens here, on the UI thread, so the
/// store sees exactly one writer.
pub fn handle_feed_event(app: &mut App, event: FeedEvent) {
    match event {
        FeedEvent::Received(message) => {
            if message.text.trim().is_empty() {
                // The store fails fast on blanks; a misbehaving feed is
                // dropped here instead of taking the screen down.
                tracing::warn!("dropping blank message from feed");
                return;
            }
            let outcome = app.store.insert(message);
            match outcome {
                InsertOutcome::Appended { section, row, .. } => {
                    tracing::debug!(section, row, "received message appended");
                }
                InsertOutcome::NewSection { section } => {
                    tracing::debug!(section, "received message opened new section");
                }
            }
            app.engage_auto_scroll();
        }
    }
}
