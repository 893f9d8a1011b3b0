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

use crate::app::feed::FeedEvent;
use crate::store::GroupedMessageStore;
use tokio::sync::mpsc;

use super::composer::Composer;

/// All mutable screen state. The store is injected and explicitly owned here;
/// nothing in the crate reaches it through a global.
pub struct App {
    pub store: GroupedMessageStore,
    pub composer: Composer,
    /// Rendered scroll offset (rounded from scroll_pos).
    pub scroll_offset: usize,
    /// Target scroll offset requested by user input or scroll-follow.
    pub scroll_target: usize,
    /// Smooth scroll position (fractional) for animation.
    pub scroll_pos: f32,
    /// When true the viewport follows the newest message (scroll-to-bottom).
    /// Re-engaged by every insert, disengaged by scrolling up.
    pub auto_scroll: bool,
    pub should_quit: bool,
    /// Force a full terminal clear on next render frame.
    pub force_redraw: bool,
    /// Feed channel: received messages arrive here as explicit events rather
    /// than through callbacks. The sender side is cloned by whatever produces
    /// messages; the event loop drains the receiver on the UI thread, so the
    /// store is only ever touched from one thread.
    pub feed_tx: mpsc::UnboundedSender<FeedEvent>,
    pub feed_rx: mpsc::UnboundedReceiver<FeedEvent>,
}

impl App {
    #[must_use]
    pub fn new(store: GroupedMessageStore) -> Self {
        let (feed_tx, feed_rx) = mpsc::unbounded_channel();
        Self {
            store,
            composer: Composer::new(),
            scroll_offset: 0,
            scroll_target: 0,
            scroll_pos: 0.0,
            auto_scroll: true,
            should_quit: false,
            force_redraw: false,
            feed_tx,
            feed_rx,
        }
    }

    /// Snap the viewport back onto the newest message on the next frame.
    pub fn engage_auto_scroll(&mut self) {
        self.auto_scroll = true;
    }

    /// Build a minimal `App` for tests. No terminal, just state.
    #[must_use]
    pub fn test_default() -> Self {
        Self::new(GroupedMessageStore::new())
    }
}
