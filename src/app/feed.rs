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

//! The feed collaborator: incoming messages modeled as an explicit event
//! stream. There is no real transport -- a refresh action enqueues a fixed
//! demo conversation, stamped with the current time, onto the feed channel.

use crate::app::state::App;
use crate::store::Message;
use chrono::{DateTime, Local};

/// Events delivered from the feed to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    Received(Message),
}

/// The scripted "received" conversation, in arrival order.
#[must_use]
pub fn demo_received_messages(now: DateTime<Local>) -> Vec<Message> {
    vec![
        Message::incoming("Hi", now),
        Message::incoming("I am good", now),
        Message::incoming("How are you?", now),
    ]
}

/// Queue the demo conversation for delivery. The messages surface on the
/// feed channel and are inserted one at a time, in order, by the event loop.
pub fn request_refresh(app: &App) {
    let now = Local::now();
    for message in demo_received_messages(now) {
        // Send only fails when the receiver is gone, i.e. during shutdown.
        let _ = app.feed_tx.send(FeedEvent::Received(message));
    }
    tracing::debug!("demo refresh queued");
}
