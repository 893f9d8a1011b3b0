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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Transcript file could not be read")]
    TranscriptUnreadable,
    #[error("Transcript file is not valid JSON")]
    TranscriptMalformed,
}

impl AppError {
    pub const TRANSCRIPT_UNREADABLE_EXIT_CODE: i32 = 20;
    pub const TRANSCRIPT_MALFORMED_EXIT_CODE: i32 = 21;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TranscriptUnreadable => Self::TRANSCRIPT_UNREADABLE_EXIT_CODE,
            Self::TranscriptMalformed => Self::TRANSCRIPT_MALFORMED_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::TranscriptUnreadable => {
                "Could not read the transcript file. Check the path passed to --transcript."
            }
            Self::TranscriptMalformed => {
                "The transcript file is not a valid JSON message array. \
Expected [{\"text\", \"timestamp\", \"direction\"}, ...]."
            }
        }
    }
}
