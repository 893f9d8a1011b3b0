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

//! Optional startup history: a JSON array of messages fed to
//! [`GroupedMessageStore::load_all`] before the first frame. Read once at
//! startup; there is no runtime reload.
//!
//! [`GroupedMessageStore::load_all`]: crate::store::GroupedMessageStore::load_all

use crate::error::AppError;
use crate::store::Message;
use std::path::Path;

/// Load a transcript file. Blank-texted entries are dropped here so they can
/// never reach the store's fail-fast guard.
///
/// The `AppError` is the root cause so it survives `err.chain()` walks and
/// maps to the right exit code; the detail rides on top as context.
pub fn load(path: &Path) -> anyhow::Result<Vec<Message>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        anyhow::Error::new(AppError::TranscriptUnreadable)
            .context(format!("reading transcript {}: {e}", path.display()))
    })?;
    let messages: Vec<Message> = serde_json::from_str(&raw).map_err(|e| {
        anyhow::Error::new(AppError::TranscriptMalformed)
            .context(format!("parsing transcript {}: {e}", path.display()))
    })?;
    let total = messages.len();
    let messages: Vec<Message> =
        messages.into_iter().filter(|m| !m.text.trim().is_empty()).collect();
    if messages.len() < total {
        tracing::warn!(dropped = total - messages.len(), "transcript contained blank messages");
    }
    tracing::info!(count = messages.len(), path = %path.display(), "transcript loaded");
    Ok(messages)
}
