// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::target::Target;

/// Hard cap on hinted targets. Two letters from a 26-letter alphabet can
/// address exactly this many slots.
pub const MAX_TARGETS: usize = 676;

/// Sparse, index-stable sequence of targets.
///
/// A `None` slot is a hole left by a target that vanished; the index stays
/// reserved until reconciliation refills it, so the labels of surviving
/// neighbours never shift underneath the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetList {
    slots: Vec<Option<Target>>,
}

impl TargetList {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of slots, holes included. Labels are derived from this.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Target> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> &[Option<Target>] {
        &self.slots
    }

    /// Occupied slots in index order.
    pub fn iter_present(&self) -> impl Iterator<Item = (usize, &Target)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|target| (index, target)))
    }

    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn contains(&self, target: &Target) -> bool {
        self.iter_present().any(|(_, held)| held.same_place(target))
    }

    pub(crate) fn clear_slot(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    pub(crate) fn first_hole(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub(crate) fn set_slot(&mut self, index: usize, target: Target) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(target);
        }
    }

    pub(crate) fn push(&mut self, target: Target) {
        self.slots.push(Some(target));
    }

    pub(crate) fn trim_trailing_holes(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
    }

    pub(crate) fn truncate(&mut self, max: usize) {
        self.slots.truncate(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::target::{PageRect, TargetKind};

    fn target(x: f64) -> Target {
        Target::new(TargetKind::Click, PageRect::new(x, 0.0, 10.0, 10.0), None)
    }

    #[test]
    fn iter_present_skips_holes_and_keeps_indices() {
        let mut list = TargetList::new();
        list.push(target(1.0));
        list.push(target(2.0));
        list.push(target(3.0));
        list.clear_slot(1);
        let indices: Vec<usize> = list.iter_present().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.present_count(), 2);
    }

    #[test]
    fn first_hole_finds_the_lowest_cleared_slot() {
        let mut list = TargetList::new();
        for i in 0..4 {
            list.push(target(i as f64));
        }
        list.clear_slot(2);
        list.clear_slot(1);
        assert_eq!(list.first_hole(), Some(1));
        list.set_slot(1, target(9.0));
        assert_eq!(list.first_hole(), Some(2));
    }

    #[test]
    fn trim_drops_only_trailing_holes() {
        let mut list = TargetList::new();
        for i in 0..4 {
            list.push(target(i as f64));
        }
        list.clear_slot(1);
        list.clear_slot(2);
        list.clear_slot(3);
        list.trim_trailing_holes();
        assert_eq!(list.len(), 1);
        assert!(list.get(0).is_some());
    }
}
