// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Activation of one resolved target.
//!
//! The interaction depends on the target kind and on the mode that was
//! active before the session: pointer lenses place the cursor instead of
//! clicking, known link destinations navigate directly, text inputs get
//! focused, and everything else receives a full synthesized click sequence
//! so page scripts that ignore programmatic clicks still react.
//!
//! Page commands may hit a page that no longer exists; those results are
//! dropped on purpose, a stale activation must never surface as an error.

use std::time::Duration;

use tokio::time::sleep;

use crate::host::PointerEvent;
use crate::model::{Mode, Target, TargetKind};

use super::EngineHosts;

/// Pause around synthesized input, letting the page's own handlers run
/// before overlay and mode cleanup continue.
const CLICK_SETTLE_DELAY: Duration = Duration::from_millis(2);

pub(super) async fn activate(hosts: &EngineHosts, target: &Target, restore_mode: Mode) {
    let factor = hosts.page.zoom_factor();
    let bounds = target.bounds();
    if restore_mode.is_pointer_lens() {
        hosts.pointer.start();
        if restore_mode == Mode::Visual {
            hosts.modes.set_mode(Mode::Visual);
        }
        hosts
            .pointer
            .move_to(bounds.center_x() * factor, bounds.center_y() * factor);
        return;
    }
    if target.kind() == TargetKind::Url {
        if let Some(href) = target.href() {
            if url::Url::parse(href).is_ok() {
                let _ = hosts.page.navigate(href);
                return;
            }
        }
    }
    hosts.modes.set_mode(Mode::Insert);
    sleep(CLICK_SETTLE_DELAY).await;
    if target.kind() == TargetKind::InputInsert {
        let _ = hosts
            .page
            .focus_input_at(bounds.center_x() * factor, bounds.center_y() * factor);
    } else {
        let scaled = bounds.scaled(factor);
        let _ = hosts
            .page
            .dispatch_pointer_event(PointerEvent::enter(scaled.x, scaled.y));
        let _ = hosts
            .page
            .dispatch_pointer_event(PointerEvent::down(scaled.center_x(), scaled.center_y()));
        let _ = hosts
            .page
            .dispatch_pointer_event(PointerEvent::up(scaled.center_x(), scaled.center_y()));
        let _ = hosts
            .page
            .dispatch_pointer_event(PointerEvent::leave(scaled.x, scaled.y));
    }
    sleep(CLICK_SETTLE_DELAY).await;
    hosts.overlay.hide_hover();
}
