// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Collaborator interfaces.
//!
//! The engine talks to the surrounding application exclusively through these
//! traits. All methods are synchronous: commands are fire-and-forget sends,
//! reads return whatever the host currently knows. Page commands return
//! `Err(PageGone)` when the page has been destroyed; callers match on it and
//! deliberately drop the failure, since activating a vanished target must
//! never take the session down.

pub mod proto;

use std::error::Error;
use std::fmt;

use crate::model::Mode;
use crate::overlay::OverlayElement;

pub use proto::{PointerButton, PointerEvent, PointerEventKind, ScannedTarget};

/// The page addressed by a command has been destroyed or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGone;

impl fmt::Display for PageGone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("page is gone")
    }
}

impl Error for PageGone {}

/// Channel to the content-scan process.
///
/// Scan results come back asynchronously; the shell feeds them into the
/// engine via `FollowEngine::apply_scan_results`.
pub trait ContentChannel: Send + Sync {
    /// Ask the current page for a fresh candidate scan.
    fn request_scan(&self);
    /// Tell the current page to stop scanning.
    fn stop_scan(&self);
    /// Tell every known page to stop scanning. A session can outlive a tab
    /// switch, so winding down must not trust "current" alone.
    fn stop_scan_all(&self);
}

/// The currently displayed page and its tab strip.
pub trait PageSurface: Send + Sync {
    /// Current zoom factor; 1.0 when unknown.
    fn zoom_factor(&self) -> f64;
    /// Width of the scrollable page surface in view pixels.
    fn scroll_width(&self) -> f64;
    fn navigate(&self, url: &str) -> Result<(), PageGone>;
    fn open_tab(&self, url: &str, switch_to: bool);
    fn dispatch_pointer_event(&self, event: PointerEvent) -> Result<(), PageGone>;
    fn focus_input_at(&self, x: f64, y: f64) -> Result<(), PageGone>;
}

/// The host's input mode switch.
pub trait ModeHost: Send + Sync {
    fn current_mode(&self) -> Mode;
    fn set_mode(&self, mode: Mode);
}

/// The visual pointer cursor, for activations that place instead of click.
pub trait PointerHost: Send + Sync {
    fn start(&self);
    fn move_to(&self, x: f64, y: f64);
}

/// Receiver for overlay batches. The engine always replaces the whole
/// overlay rather than patching individual elements.
pub trait OverlayHost: Send + Sync {
    fn replace(&self, elements: Vec<OverlayElement>);
    fn clear(&self);
    /// Hide any transient link-hover indicator after a synthesized click.
    fn hide_hover(&self);
}

/// Read-only settings snapshot consulted by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    follow_new_tab_switch: bool,
    mouse_new_tab_switch: bool,
    font_size: f64,
}

const FONT_SIZE_MIN: f64 = 8.0;
const FONT_SIZE_MAX: f64 = 30.0;

impl Default for Preferences {
    fn default() -> Self {
        Self {
            follow_new_tab_switch: true,
            mouse_new_tab_switch: true,
            font_size: 14.0,
        }
    }
}

impl Preferences {
    pub fn new(follow_new_tab_switch: bool, mouse_new_tab_switch: bool, font_size: f64) -> Self {
        Self {
            follow_new_tab_switch,
            mouse_new_tab_switch,
            font_size: font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
        }
    }

    /// Whether a tab opened by keyboard activation should take focus.
    pub fn follow_new_tab_switch(&self) -> bool {
        self.follow_new_tab_switch
    }

    /// Whether a tab opened by middle-click should take focus.
    pub fn mouse_new_tab_switch(&self) -> bool {
        self.mouse_new_tab_switch
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }
}
