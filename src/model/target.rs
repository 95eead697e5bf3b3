// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a target reacts when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// A link with a resolvable destination; activation can navigate directly.
    #[serde(rename = "url")]
    Url,
    /// An element with a click handler and no known destination.
    #[serde(rename = "onclick")]
    Click,
    /// An input that is operated by clicking (checkbox, radio, button).
    #[serde(rename = "inputs-click")]
    InputClick,
    /// An input that takes typed text; activation focuses it for insert mode.
    #[serde(rename = "inputs-insert")]
    InputInsert,
    /// Anything else the scanner considered worth hinting.
    #[serde(rename = "other")]
    Other,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Url => "url",
            TargetKind::Click => "onclick",
            TargetKind::InputClick => "inputs-click",
            TargetKind::InputInsert => "inputs-insert",
            TargetKind::Other => "other",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned box in page coordinates, before zoom is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// The same box in view coordinates for the given zoom factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// One discovered interactive element.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    bounds: PageRect,
    kind: TargetKind,
    href: Option<String>,
}

impl Target {
    pub fn new(kind: TargetKind, bounds: PageRect, href: Option<String>) -> Self {
        Self { bounds, kind, href }
    }

    pub fn bounds(&self) -> &PageRect {
        &self.bounds
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Reconciliation identity: geometry and kind. Href is deliberately
    /// ignored, so a link whose destination changed in place keeps its slot.
    pub fn same_place(&self, other: &Target) -> bool {
        self.kind == other.kind
            && self.bounds.x == other.bounds.x
            && self.bounds.y == other.bounds.y
            && self.bounds.width == other.bounds.width
            && self.bounds.height == other.bounds.height
    }

    /// Whether the href names an explicit protocol, e.g. `https://`.
    /// Only such targets make sense in a new tab.
    pub fn has_protocol(&self) -> bool {
        match self.href.as_deref() {
            Some(href) => url::Url::parse(href).is_ok(),
            None => false,
        }
    }

    /// Copy of this target re-typed as a plain link.
    pub fn as_url_kind(&self) -> Target {
        Target { kind: TargetKind::Url, ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> PageRect {
        PageRect::new(10.0, 20.0, 120.0, 16.0)
    }

    #[test]
    fn same_place_ignores_href() {
        let a = Target::new(TargetKind::Url, rect(), Some("https://one.example".into()));
        let b = Target::new(TargetKind::Url, rect(), Some("https://two.example".into()));
        assert!(a.same_place(&b));
    }

    #[test]
    fn same_place_distinguishes_kind_and_geometry() {
        let a = Target::new(TargetKind::Url, rect(), None);
        let b = Target::new(TargetKind::Click, rect(), None);
        assert!(!a.same_place(&b));
        let shifted = Target::new(TargetKind::Url, PageRect::new(11.0, 20.0, 120.0, 16.0), None);
        assert!(!a.same_place(&shifted));
    }

    #[test]
    fn has_protocol_requires_a_parseable_absolute_url() {
        let abs = Target::new(TargetKind::Url, rect(), Some("https://example.com/a".into()));
        assert!(abs.has_protocol());
        let rel = Target::new(TargetKind::Url, rect(), Some("/relative/path".into()));
        assert!(!rel.has_protocol());
        let none = Target::new(TargetKind::Url, rect(), None);
        assert!(!none.has_protocol());
    }

    #[test]
    fn scaled_rect_scales_position_and_size() {
        let scaled = rect().scaled(2.0);
        assert_eq!(scaled, PageRect::new(20.0, 40.0, 240.0, 32.0));
        assert_eq!(scaled.center_x(), 140.0);
        assert_eq!(scaled.center_y(), 56.0);
    }

    #[test]
    fn kind_serializes_to_the_scanner_names() {
        let json = serde_json::to_string(&TargetKind::InputInsert).unwrap();
        assert_eq!(json, "\"inputs-insert\"");
        let back: TargetKind = serde_json::from_str("\"onclick\"").unwrap();
        assert_eq!(back, TargetKind::Click);
    }
}
