// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Input lens of the host application.
///
/// The engine only steers a few of these itself: it enters `Follow` for the
/// lifetime of a session, hands out `Insert` around click synthesis, and
/// treats `Pointer`/`Visual` as cursor placement rather than clicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Normal,
    Insert,
    Command,
    Search,
    Explore,
    Follow,
    Pointer,
    Visual,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Insert => "insert",
            Mode::Command => "command",
            Mode::Search => "search",
            Mode::Explore => "explore",
            Mode::Follow => "follow",
            Mode::Pointer => "pointer",
            Mode::Visual => "visual",
        }
    }

    /// Pointer and visual place a cursor instead of clicking on activation.
    pub fn is_pointer_lens(self) -> bool {
        matches!(self, Mode::Pointer | Mode::Visual)
    }

    /// The mode a new session should restore afterwards when this mode was
    /// active at entry. Re-entering follow from follow falls back to normal
    /// so sessions never stack.
    pub fn follow_restore_target(self) -> Mode {
        if self == Mode::Follow {
            Mode::Normal
        } else {
            self
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
