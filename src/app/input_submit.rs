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

use super::state::App;
use crate::store::Message;
use chrono::Local;

/// Composer → store: runs once per Enter press, on the UI thread.
/// A blank composer submits nothing.
pub(super) fn submit_message(app: &mut App) {
    let Some(text) = app.composer.take_submission() else {
        return;
    };

    let outcome = app.store.insert(Message::outgoing(text, Local::now()));
    tracing::debug!(?outcome, "outgoing message inserted");
    app.engage_auto_scroll();
}
