// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hinterland: keyboard-driven link hinting (labels, reconciliation, sessions).
//!
//! The engine lives in [`session`]; it leans on [`labels`] for prefix-free
//! hint codes, [`reconcile`] for index-stable target lists, and [`overlay`]
//! for drawable hint geometry. Everything host-specific sits behind the
//! traits in [`host`]; [`tui`] is a self-contained terminal playground.

pub mod host;
pub mod labels;
pub mod model;
pub mod overlay;
pub mod reconcile;
pub mod session;
pub mod tui;
