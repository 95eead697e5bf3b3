// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Targets are the interactive elements discovered on a page; the target list
//! keeps them at stable indices across rescans so their hint labels survive.

pub mod list;
pub mod mode;
pub mod target;

pub use list::{TargetList, MAX_TARGETS};
pub use mode::Mode;
pub use target::{PageRect, Target, TargetKind};
