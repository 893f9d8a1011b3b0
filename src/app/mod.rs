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

mod composer;
mod events;
pub mod feed;
mod input_submit;
mod state;

pub use composer::Composer;
pub use events::{handle_feed_event, handle_terminal_event};
pub use feed::FeedEvent;
pub use state::App;

use crate::Cli;
use crate::store::{GroupedMessageStore, transcript};
use crossterm::event::{
    EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use futures::{FutureExt as _, StreamExt as _};
use std::time::{Duration, Instant};

/// Build the screen state: an empty store, optionally pre-populated from a
/// transcript file via a single bulk regroup.
pub fn create_app(cli: &Cli) -> anyhow::Result<App> {
    let mut store = GroupedMessageStore::new();
    if let Some(path) = cli.transcript.as_ref() {
        let messages = transcript::load(path)?;
        store.load_all(messages);
        tracing::info!(sections = store.section_count(), "history grouped");
    }
    Ok(App::new(store))
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Enable bracketed paste and mouse capture (ignore error on unsupported terminals)
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::EnableBracketedPaste,
        crossterm::event::EnableMouseCapture,
        // Enable enhanced keyboard protocol for reliable modifier detection (e.g. Shift+Enter)
        PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    );

    let mut terminal_events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = terminal_events.next() => {
                events::handle_terminal_event(app, event);
            }
            Some(event) = app.feed_rx.recv() => {
                events::handle_feed_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Try terminal events first (keeps typing responsive)
            if let Some(Some(Ok(event))) = terminal_events.next().now_or_never() {
                events::handle_terminal_event(app, event);
                continue;
            }
            // Then feed events
            match app.feed_rx.try_recv() {
                Ok(event) => {
                    events::handle_feed_event(app, event);
                }
                Err(_) => break,
            }
        }

        if app.should_quit {
            break;
        }

        // Phase 3: render once
        if app.force_redraw {
            terminal.clear()?;
            app.force_redraw = false;
        }
        terminal.draw(|f| crate::ui::render(f, app))?;
        last_render = Instant::now();
    }

    // Restore terminal
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableBracketedPaste,
        crossterm::event::DisableMouseCapture,
        PopKeyboardEnhancementFlags
    );
    ratatui::restore();

    Ok(())
}
