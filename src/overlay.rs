// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Overlay element construction.
//!
//! The engine never draws anything itself; it turns the reconciled target
//! list into plain geometry records (a border around each target and a badge
//! carrying the label text) and hands the whole batch to the overlay
//! collaborator. The batch is rebuilt from scratch on every change.

use crate::labels::label;
use crate::model::{TargetKind, TargetList};

/// What an overlay element is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRole {
    /// Label text anchored near the target's top-right corner.
    Badge,
    /// Outline of the target's (scaled) bounding box.
    Border,
}

/// One drawable overlay record, in view coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayElement {
    /// Slot index in the target list; stable across rescans.
    pub slot: usize,
    pub kind: TargetKind,
    pub role: OverlayRole,
    pub left: f64,
    pub top: f64,
    /// Zero for badges; the surface sizes those from the text.
    pub width: f64,
    pub height: f64,
    /// Remaining label text for badges (already typed letters stripped).
    pub text: Option<String>,
    /// Stacking tier; higher draws above lower.
    pub z: i32,
}

/// Kind-to-stacking-tier assignment for overlay elements.
///
/// The four main kinds rotate so the user can cycle which kind draws on top
/// when badges overlap; `Other` stays pinned underneath the rotation. Purely
/// cosmetic, label matching never looks at this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerOrder {
    order: [TargetKind; 4],
}

impl Default for LayerOrder {
    fn default() -> Self {
        Self {
            order: [
                TargetKind::Url,
                TargetKind::Click,
                TargetKind::InputClick,
                TargetKind::InputInsert,
            ],
        }
    }
}

impl LayerOrder {
    /// Send the bottom kind to the top tier; every other kind drops one.
    pub fn rotate(&mut self) {
        self.order.rotate_left(1);
    }

    fn position(&self, kind: TargetKind) -> Option<usize> {
        self.order.iter().position(|&k| k == kind)
    }

    pub fn badge_z(&self, kind: TargetKind) -> i32 {
        match self.position(kind) {
            Some(tier) => tier as i32 + 10,
            None => 9,
        }
    }

    pub fn border_z(&self, kind: TargetKind) -> i32 {
        match self.position(kind) {
            Some(tier) => tier as i32 + 5,
            None => 4,
        }
    }
}

/// Layout inputs for badge placement.
#[derive(Debug, Clone, Copy)]
pub struct OverlayMetrics {
    /// Current zoom factor of the page view.
    pub zoom: f64,
    /// Width of the scrollable page surface, used to keep badges on screen.
    pub scroll_width: f64,
    /// Font size preference; badge text width is estimated from it.
    pub font_size: f64,
}

/// Build the full overlay for the given list, keeping only targets whose
/// label starts with `prefix` and stripping that prefix from the badge text.
///
/// Labels are derived from the slot index and the hole-inclusive list length,
/// so a hole still reserves its code.
pub fn build_overlay(
    targets: &TargetList,
    prefix: &str,
    metrics: &OverlayMetrics,
    layers: &LayerOrder,
) -> Vec<OverlayElement> {
    let total = targets.len();
    let mut elements = Vec::with_capacity(targets.present_count() * 2);
    for (slot, target) in targets.iter_present() {
        let code = label(slot, total);
        let Some(remainder) = code.as_str().strip_prefix(prefix) else {
            continue;
        };
        let bounds = target.bounds().scaled(metrics.zoom);
        let char_width = metrics.font_size * 0.6;
        let right_margin = char_width * remainder.len() as f64 + metrics.font_size * 0.5;
        let mut badge_left = bounds.x + bounds.width;
        if badge_left > metrics.scroll_width - right_margin {
            badge_left = metrics.scroll_width - right_margin;
        }
        elements.push(OverlayElement {
            slot,
            kind: target.kind(),
            role: OverlayRole::Badge,
            left: badge_left,
            top: bounds.y.max(0.0),
            width: 0.0,
            height: 0.0,
            text: Some(remainder.to_string()),
            z: layers.badge_z(target.kind()),
        });
        elements.push(OverlayElement {
            slot,
            kind: target.kind(),
            role: OverlayRole::Border,
            left: bounds.x,
            top: bounds.y,
            width: bounds.width,
            height: bounds.height,
            text: None,
            z: layers.border_z(target.kind()),
        });
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageRect, Target, TargetList};
    use crate::reconcile::reconcile;

    fn metrics() -> OverlayMetrics {
        OverlayMetrics { zoom: 1.0, scroll_width: 1000.0, font_size: 14.0 }
    }

    fn list_of(targets: Vec<Target>) -> TargetList {
        reconcile(&TargetList::new(), &targets)
    }

    fn target(kind: TargetKind, x: f64, y: f64) -> Target {
        Target::new(kind, PageRect::new(x, y, 100.0, 20.0), None)
    }

    #[test]
    fn each_target_gets_a_badge_and_a_border() {
        let list = list_of(vec![target(TargetKind::Url, 10.0, 30.0)]);
        let elements = build_overlay(&list, "", &metrics(), &LayerOrder::default());
        assert_eq!(elements.len(), 2);
        let badge = &elements[0];
        assert_eq!(badge.role, OverlayRole::Badge);
        assert_eq!(badge.text.as_deref(), Some("A"));
        assert_eq!(badge.left, 110.0);
        assert_eq!(badge.top, 30.0);
        let border = &elements[1];
        assert_eq!(border.role, OverlayRole::Border);
        assert_eq!((border.left, border.top), (10.0, 30.0));
        assert_eq!((border.width, border.height), (100.0, 20.0));
    }

    #[test]
    fn zoom_scales_geometry_and_clamps_badge_top_at_zero() {
        let list = list_of(vec![target(TargetKind::Click, 10.0, -8.0)]);
        let m = OverlayMetrics { zoom: 2.0, ..metrics() };
        let elements = build_overlay(&list, "", &m, &LayerOrder::default());
        let badge = &elements[0];
        assert_eq!(badge.left, 220.0);
        assert_eq!(badge.top, 0.0);
        let border = &elements[1];
        assert_eq!(border.top, -16.0);
        assert_eq!(border.width, 200.0);
    }

    #[test]
    fn badge_never_overflows_the_right_edge() {
        let list = list_of(vec![target(TargetKind::Url, 950.0, 10.0)]);
        let elements = build_overlay(&list, "", &metrics(), &LayerOrder::default());
        let badge = &elements[0];
        // char width 8.4 for one letter plus half the font size of margin.
        assert_eq!(badge.left, 1000.0 - (14.0 * 0.6 + 7.0));
    }

    #[test]
    fn prefix_filters_and_strips_badge_text() {
        let targets: Vec<Target> =
            (0..30).map(|i| target(TargetKind::Url, i as f64 * 10.0, 5.0)).collect();
        let list = list_of(targets);
        let elements = build_overlay(&list, "B", &metrics(), &LayerOrder::default());
        // Slots 26..=29 carry BA..BD; everything else is filtered out.
        let badges: Vec<(usize, String)> = elements
            .iter()
            .filter(|e| e.role == OverlayRole::Badge)
            .map(|e| (e.slot, e.text.clone().unwrap()))
            .collect();
        assert_eq!(
            badges,
            vec![
                (26, "A".to_string()),
                (27, "B".to_string()),
                (28, "C".to_string()),
                (29, "D".to_string()),
            ]
        );
    }

    #[test]
    fn holes_keep_reserving_a_code() {
        let base: Vec<Target> =
            (0..3).map(|i| target(TargetKind::Url, i as f64 * 10.0, 5.0)).collect();
        let list = list_of(base.clone());
        let shrunk = reconcile(&list, &[base[0].clone(), base[2].clone()]);
        let elements = build_overlay(&shrunk, "", &metrics(), &LayerOrder::default());
        let badges: Vec<(usize, String)> = elements
            .iter()
            .filter(|e| e.role == OverlayRole::Badge)
            .map(|e| (e.slot, e.text.clone().unwrap()))
            .collect();
        // Slot 1 is a hole; its letter stays reserved.
        assert_eq!(badges, vec![(0, "A".to_string()), (2, "C".to_string())]);
    }

    #[test]
    fn layer_rotation_cycles_the_top_kind() {
        let mut layers = LayerOrder::default();
        assert_eq!(layers.badge_z(TargetKind::Url), 10);
        assert_eq!(layers.border_z(TargetKind::Url), 5);
        assert_eq!(layers.badge_z(TargetKind::InputInsert), 13);
        layers.rotate();
        assert_eq!(layers.badge_z(TargetKind::Url), 13);
        assert_eq!(layers.badge_z(TargetKind::Click), 10);
        layers.rotate();
        layers.rotate();
        layers.rotate();
        assert_eq!(layers.badge_z(TargetKind::Url), 10);
    }

    #[test]
    fn other_kind_is_pinned_below_the_rotation() {
        let mut layers = LayerOrder::default();
        assert_eq!(layers.badge_z(TargetKind::Other), 9);
        assert_eq!(layers.border_z(TargetKind::Other), 4);
        layers.rotate();
        assert_eq!(layers.badge_z(TargetKind::Other), 9);
        assert_eq!(layers.border_z(TargetKind::Other), 4);
    }
}
