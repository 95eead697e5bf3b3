// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The follow session engine.
//!
//! A session starts when the user asks for hints, keeps the target list fresh
//! through periodic rescans, narrows candidates as label letters are typed,
//! and ends by activating exactly one target, aborting, or being cancelled.
//! All state lives behind one handle; collaborators are injected as trait
//! objects and never called back into from their own methods.

mod dispatch;

use std::sync::Arc;
use std::time::Duration;

use smallvec::SmallVec;
use tokio::sync::Mutex;
use tokio::time::{self, MissedTickBehavior};

use crate::host::{
    ContentChannel, ModeHost, OverlayHost, PageSurface, PointerButton, PointerHost, Preferences,
};
use crate::labels::label;
use crate::model::{Mode, Target, TargetKind, TargetList};
use crate::overlay::{build_overlay, LayerOrder, OverlayMetrics};
use crate::reconcile::reconcile;

/// How often an active session re-requests a content scan.
const RESCAN_INTERVAL: Duration = Duration::from_millis(100);

/// Result of feeding one keystroke to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A unique target was resolved and dispatched.
    Activated,
    /// The session is still narrowing; more input is needed.
    Waiting,
    /// Nothing matched (or no session is running); the session ended.
    Aborted,
}

/// The collaborator bundle a session operates against.
#[derive(Clone)]
pub struct EngineHosts {
    pub content: Arc<dyn ContentChannel>,
    pub page: Arc<dyn PageSurface>,
    pub modes: Arc<dyn ModeHost>,
    pub pointer: Arc<dyn PointerHost>,
    pub overlay: Arc<dyn OverlayHost>,
}

struct FollowState {
    active: bool,
    /// Set once a keystroke is being resolved; pauses rescans so a pending
    /// activation never races a list update.
    resolving: bool,
    new_tab_intent: bool,
    restore_mode: Mode,
    entered: SmallVec<[char; 2]>,
    targets: TargetList,
    layers: LayerOrder,
    pump_running: bool,
}

impl FollowState {
    fn new() -> Self {
        Self {
            active: false,
            resolving: false,
            new_tab_intent: false,
            restore_mode: Mode::Normal,
            entered: SmallVec::new(),
            targets: TargetList::new(),
            layers: LayerOrder::default(),
            pump_running: false,
        }
    }

    fn entered_prefix(&self) -> String {
        self.entered.iter().collect()
    }
}

/// Cheaply cloneable handle to one follow engine.
///
/// Methods are async because they share one state lock and because
/// activation dispatch sleeps briefly between synthesized events; they must
/// be called from within a tokio runtime (the rescan pump is a spawned
/// task).
#[derive(Clone)]
pub struct FollowEngine {
    state: Arc<Mutex<FollowState>>,
    hosts: EngineHosts,
    prefs: Preferences,
}

impl FollowEngine {
    pub fn new(hosts: EngineHosts, prefs: Preferences) -> Self {
        Self {
            state: Arc::new(Mutex::new(FollowState::new())),
            hosts,
            prefs,
        }
    }

    /// Enter follow mode. With `new_tab_intent`, only real links are hinted
    /// and the resolved one opens in a new tab.
    ///
    /// The previous target list is kept: if the page is unchanged since the
    /// last session, targets keep their slots and therefore their labels.
    pub async fn start_follow(&self, new_tab_intent: bool) {
        let mut state = self.state.lock().await;
        self.begin_session(&mut state, new_tab_intent);
    }

    /// Tear the session down without activating anything. The pre-follow
    /// mode is not restored here; shells that cancel on behalf of the user
    /// read [`Self::mode_before_follow`] and switch modes themselves.
    pub async fn cancel_follow(&self) {
        let mut state = self.state.lock().await;
        self.end_session(&mut state);
        self.hosts.content.stop_scan_all();
    }

    /// Feed one typed character into the resolver.
    pub async fn handle_key(&self, ch: char) -> KeyOutcome {
        let mut state = self.state.lock().await;
        if !state.active {
            return KeyOutcome::Aborted;
        }
        let lowered: String = ch.to_lowercase().collect();
        let key: String = ch.to_uppercase().collect();
        if lowered == key {
            // No case distinction means this can never be a label letter.
            return KeyOutcome::Waiting;
        }
        let sticky = key == ch.to_string();
        state.resolving = true;

        let mut prefix = state.entered_prefix();
        prefix.push_str(&key);
        let total = state.targets.len();
        let matches: Vec<usize> = state
            .targets
            .iter_present()
            .filter(|(slot, _)| label(*slot, total).as_str().starts_with(&prefix))
            .map(|(slot, _)| slot)
            .collect();

        match matches.as_slice() {
            [] => {
                self.hosts.modes.set_mode(state.restore_mode);
                self.end_session(&mut state);
                if sticky {
                    let intent = state.new_tab_intent;
                    self.begin_session(&mut state, intent);
                }
                KeyOutcome::Aborted
            }
            [slot] => {
                let Some(target) = state.targets.get(*slot).cloned() else {
                    return KeyOutcome::Aborted;
                };
                self.activate_resolved(&mut state, &target, sticky).await;
                KeyOutcome::Activated
            }
            _ => {
                state.entered.extend(key.chars());
                self.render_overlay(&state);
                KeyOutcome::Waiting
            }
        }
    }

    /// Feed an asynchronous scan reply into the session.
    ///
    /// Replies are dropped while no session is active, while a keystroke is
    /// being resolved, and when the mode collaborator has already left
    /// follow mode behind the engine's back.
    pub async fn apply_scan_results(&self, scanned: Vec<Target>) {
        let mut state = self.state.lock().await;
        if !state.active
            || state.resolving
            || self.hosts.modes.current_mode() != Mode::Follow
        {
            return;
        }
        let scanned: Vec<Target> = if state.new_tab_intent {
            scanned
                .iter()
                .filter(|target| target.has_protocol())
                .map(Target::as_url_kind)
                .collect()
        } else {
            scanned
        };
        state.targets = reconcile(&state.targets, &scanned);
        self.render_overlay(&state);
    }

    /// Rotate which target kind draws on top when overlay elements overlap.
    /// Cosmetic only; the rotation is kept across sessions.
    pub async fn reorder_overlay_layers(&self) {
        let mut state = self.state.lock().await;
        state.layers.rotate();
        if state.active {
            self.render_overlay(&state);
        }
    }

    /// Activate the target at `slot` because the user clicked its overlay
    /// element. Middle-click on a real link opens it in a new tab instead of
    /// synthesizing a click.
    pub async fn activate_pointer(&self, slot: usize, button: PointerButton) {
        let mut state = self.state.lock().await;
        if !state.active {
            return;
        }
        let Some(target) = state.targets.get(slot).cloned() else {
            return;
        };
        state.resolving = true;
        if button == PointerButton::Middle && target.has_protocol() {
            self.hosts.modes.set_mode(state.restore_mode);
            self.end_session(&mut state);
            if let Some(href) = target.href() {
                self.hosts
                    .page
                    .open_tab(href, self.prefs.mouse_new_tab_switch());
            }
            return;
        }
        let restore = state.restore_mode;
        dispatch::activate(&self.hosts, &target, restore).await;
        if target.kind() != TargetKind::InputInsert {
            self.hosts.modes.set_mode(restore);
        }
        self.end_session(&mut state);
    }

    /// The mode that was active when the current (or last) session started.
    pub async fn mode_before_follow(&self) -> Mode {
        self.state.lock().await.restore_mode
    }

    pub async fn is_active(&self) -> bool {
        self.state.lock().await.active
    }

    fn begin_session(&self, state: &mut FollowState, new_tab_intent: bool) {
        state.new_tab_intent = new_tab_intent;
        self.hosts.overlay.clear();
        state.restore_mode = self.hosts.modes.current_mode().follow_restore_target();
        self.hosts.modes.set_mode(Mode::Follow);
        state.active = true;
        state.resolving = false;
        state.entered.clear();
        self.hosts.content.request_scan();
        if !state.pump_running {
            state.pump_running = true;
            let engine = self.clone();
            tokio::spawn(async move {
                engine.run_scan_pump().await;
            });
        }
    }

    fn end_session(&self, state: &mut FollowState) {
        state.active = false;
        state.resolving = false;
        state.entered.clear();
        self.hosts.overlay.clear();
    }

    async fn activate_resolved(&self, state: &mut FollowState, target: &Target, sticky: bool) {
        if state.new_tab_intent {
            self.hosts.modes.set_mode(Mode::Normal);
            self.end_session(state);
            if sticky {
                self.begin_session(state, true);
            }
            if let Some(href) = target.href() {
                let switch_to = !sticky && self.prefs.follow_new_tab_switch();
                self.hosts.page.open_tab(href, switch_to);
            }
            return;
        }
        let restore = state.restore_mode;
        dispatch::activate(&self.hosts, target, restore).await;
        if target.kind() == TargetKind::InputInsert {
            // The dispatcher switched to insert mode; leave it in place and
            // skip any sticky restart, typing comes next.
            self.end_session(state);
            return;
        }
        self.hosts.modes.set_mode(restore);
        self.end_session(state);
        if sticky {
            let intent = state.new_tab_intent;
            self.begin_session(state, intent);
        }
    }

    fn render_overlay(&self, state: &FollowState) {
        let metrics = OverlayMetrics {
            zoom: self.hosts.page.zoom_factor(),
            scroll_width: self.hosts.page.scroll_width(),
            font_size: self.prefs.font_size(),
        };
        let elements =
            build_overlay(&state.targets, &state.entered_prefix(), &metrics, &state.layers);
        self.hosts.overlay.replace(elements);
    }

    /// Periodic rescan driver. One pump runs per engine while a session is
    /// active; it re-requests a scan every tick unless a keystroke is being
    /// resolved, and winds down (telling the page to stop scanning) once the
    /// session went inactive or the host left follow mode.
    async fn run_scan_pump(self) {
        let mut ticker = time::interval(RESCAN_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately; the session entry
        // already sent its own request.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let mut state = self.state.lock().await;
            if !state.active || self.hosts.modes.current_mode() != Mode::Follow {
                if state.active {
                    // The host switched modes without cancelling.
                    self.end_session(&mut state);
                }
                state.pump_running = false;
                drop(state);
                self.hosts.content.stop_scan();
                return;
            }
            if !state.resolving {
                self.hosts.content.request_scan();
            }
        }
    }
}
