// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire types for the collaborator boundary.
//!
//! Scan results and synthesized input events cross a process boundary in a
//! real embedding; these mirror that JSON shape so a shell can forward them
//! verbatim.

use serde::{Deserialize, Serialize};

use crate::model::{PageRect, Target, TargetKind};

/// One candidate reported by the content scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedTarget {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "type")]
    pub kind: TargetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<ScannedTarget> for Target {
    fn from(scanned: ScannedTarget) -> Self {
        Target::new(
            scanned.kind,
            PageRect::new(scanned.x, scanned.y, scanned.width, scanned.height),
            scanned.url,
        )
    }
}

impl From<&Target> for ScannedTarget {
    fn from(target: &Target) -> Self {
        let bounds = target.bounds();
        ScannedTarget {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            kind: target.kind(),
            url: target.href().map(str::to_string),
        }
    }
}

/// Mouse button carried by a synthesized or reported pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    #[serde(rename = "mouseEnter")]
    Enter,
    #[serde(rename = "mouseDown")]
    Down,
    #[serde(rename = "mouseUp")]
    Up,
    #[serde(rename = "mouseLeave")]
    Leave,
}

/// A synthesized input event, in view coordinates.
///
/// Shapes match what an embedder forwards to its input pipeline: down events
/// carry a button and a click count, up events a button only, enter and
/// leave just the position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(rename = "type")]
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<PointerButton>,
    #[serde(rename = "clickCount", default, skip_serializing_if = "Option::is_none")]
    pub click_count: Option<u32>,
}

impl PointerEvent {
    pub fn enter(x: f64, y: f64) -> Self {
        Self { kind: PointerEventKind::Enter, x, y, button: None, click_count: None }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Down,
            x,
            y,
            button: Some(PointerButton::Left),
            click_count: Some(1),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Up,
            x,
            y,
            button: Some(PointerButton::Left),
            click_count: None,
        }
    }

    pub fn leave(x: f64, y: f64) -> Self {
        Self { kind: PointerEventKind::Leave, x, y, button: None, click_count: None }
    }
}
