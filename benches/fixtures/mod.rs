// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use hinterland::model::{PageRect, Target, TargetKind, TargetList};
use hinterland::reconcile::reconcile;

const GRID_COLUMNS: usize = 40;
const CELL_WIDTH: f64 = 24.0;
const CELL_HEIGHT: f64 = 18.0;

fn kind_for(index: usize) -> TargetKind {
    match index % 5 {
        0 => TargetKind::Url,
        1 => TargetKind::Click,
        2 => TargetKind::InputClick,
        3 => TargetKind::InputInsert,
        _ => TargetKind::Other,
    }
}

fn target_at(index: usize, offset: f64) -> Target {
    let column = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    let kind = kind_for(index);
    let href = match kind {
        TargetKind::Url => Some(format!("https://bench.example/page/{index}")),
        _ => None,
    };
    Target::new(
        kind,
        PageRect::new(
            column as f64 * CELL_WIDTH + offset,
            row as f64 * CELL_HEIGHT,
            CELL_WIDTH - 4.0,
            CELL_HEIGHT - 4.0,
        ),
        href,
    )
}

/// A page-like grid of `count` mixed-kind targets.
pub fn target_grid(count: usize) -> Vec<Target> {
    (0..count).map(|index| target_at(index, 0.0)).collect()
}

/// The same grid with every `stride`-th target nudged sideways, so it reads
/// as a vanished box plus a brand new one.
pub fn churned_grid(count: usize, stride: usize) -> Vec<Target> {
    (0..count)
        .map(|index| {
            let offset = if stride > 0 && index % stride == 0 { 3.0 } else { 0.0 };
            target_at(index, offset)
        })
        .collect()
}

/// A reconciled list holding `count` grid targets.
pub fn settled_list(count: usize) -> TargetList {
    reconcile(&TargetList::new(), &target_grid(count))
}
