// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rescan reconciliation.
//!
//! Pages are rescanned while hints are showing, so the fresh candidate list
//! has to be merged into the previous one without moving targets the user may
//! already be typing a label for. Vanished targets leave holes, new targets
//! fill the lowest hole before the list grows, and only trailing holes are
//! dropped.

use crate::model::{Target, TargetList, MAX_TARGETS};

/// Merge a freshly scanned candidate list into the previous stable list.
///
/// A target present in both (by geometry and kind) keeps its slot and its
/// previously stored value. Duplicates within one scan collapse to a single
/// slot. The result never exceeds [`MAX_TARGETS`] slots; excess candidates
/// are dropped in favour of lower indices.
pub fn reconcile(previous: &TargetList, scanned: &[Target]) -> TargetList {
    let mut merged = previous.clone();
    for index in 0..merged.len() {
        let vanished = match merged.get(index) {
            Some(held) => !scanned.iter().any(|fresh| fresh.same_place(held)),
            None => false,
        };
        if vanished {
            merged.clear_slot(index);
        }
    }
    for fresh in scanned {
        if merged.contains(fresh) {
            continue;
        }
        match merged.first_hole() {
            Some(hole) => merged.set_slot(hole, fresh.clone()),
            None => merged.push(fresh.clone()),
        }
    }
    merged.trim_trailing_holes();
    merged.truncate(MAX_TARGETS);
    merged
}
