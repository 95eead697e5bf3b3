// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Demo page and in-process collaborator implementations.
//!
//! The demo "page" is a JSON script of labelled boxes in terminal cell
//! coordinates. The shell implements every engine collaborator against plain
//! shared state: scans are answered from the script, page commands append to
//! a visible event log instead of reaching a real browser.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::Deserialize;

use crate::host::{
    ContentChannel, ModeHost, OverlayHost, PageGone, PageSurface, PointerEvent, PointerHost,
    ScannedTarget,
};
use crate::model::{Mode, Target};
use crate::overlay::OverlayElement;
use crate::session::EngineHosts;

const EVENT_LOG_CAP: usize = 64;

#[derive(Debug)]
pub enum PageScriptError {
    Json { source: serde_json::Error },
    Dimensions { width: f64, height: f64 },
}

impl fmt::Display for PageScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "page script is not valid JSON: {source}"),
            Self::Dimensions { width, height } => write!(
                f,
                "page dimensions must be finite and positive, got {width}x{height}"
            ),
        }
    }
}

impl std::error::Error for PageScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::Dimensions { .. } => None,
        }
    }
}

/// A scripted page: a titled set of hintable boxes.
#[derive(Debug, Clone, Deserialize)]
pub struct PageScript {
    title: String,
    width: f64,
    height: f64,
    boxes: Vec<PageBox>,
}

/// One box on the scripted page. Geometry and kind are exactly what the
/// scanner would report; `label` is only drawn, `flicker` makes the box
/// appear and disappear with the given period (in ticks) when churn is on.
#[derive(Debug, Clone, Deserialize)]
pub struct PageBox {
    #[serde(flatten)]
    target: ScannedTarget,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    flicker: Option<u64>,
}

impl PageBox {
    pub(crate) fn target(&self) -> &ScannedTarget {
        &self.target
    }

    pub(crate) fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    fn visible_at(&self, tick: u64, churn: bool) -> bool {
        match self.flicker {
            Some(period) if churn && period > 0 => (tick / period) % 2 == 0,
            _ => true,
        }
    }
}

impl PageScript {
    pub fn from_json(json: &str) -> Result<Self, PageScriptError> {
        let script: Self =
            serde_json::from_str(json).map_err(|source| PageScriptError::Json { source })?;
        let sane = script.width.is_finite()
            && script.width > 0.0
            && script.height.is_finite()
            && script.height > 0.0;
        if !sane {
            return Err(PageScriptError::Dimensions {
                width: script.width,
                height: script.height,
            });
        }
        Ok(script)
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub(crate) fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn boxes_at(&self, tick: u64, churn: bool) -> impl Iterator<Item = &PageBox> {
        self.boxes.iter().filter(move |b| b.visible_at(tick, churn))
    }

    /// What a content scan of this page reports right now.
    pub fn scan_at(&self, tick: u64, churn: bool) -> Vec<Target> {
        self.boxes_at(tick, churn).map(|b| Target::from(b.target.clone())).collect()
    }
}

const DEMO_PAGE_JSON: &str = r##"{
  "title": "hinterland demo page",
  "width": 110,
  "height": 30,
  "boxes": [
    {"x": 2, "y": 1, "width": 22, "height": 3, "type": "url",
     "url": "https://example.com/docs", "label": "Documentation"},
    {"x": 27, "y": 1, "width": 16, "height": 3, "type": "url",
     "url": "https://example.com/blog", "label": "Blog"},
    {"x": 46, "y": 1, "width": 16, "height": 3, "type": "url",
     "url": "/settings", "label": "Settings"},
    {"x": 65, "y": 1, "width": 20, "height": 3, "type": "other",
     "label": "Sponsored"},
    {"x": 2, "y": 6, "width": 26, "height": 3, "type": "onclick",
     "label": "Expand comments"},
    {"x": 31, "y": 6, "width": 22, "height": 3, "type": "inputs-click",
     "label": "[x] Subscribe"},
    {"x": 2, "y": 11, "width": 36, "height": 3, "type": "inputs-insert",
     "label": "Search this site"},
    {"x": 41, "y": 11, "width": 12, "height": 3, "type": "inputs-click",
     "label": "Go"},
    {"x": 2, "y": 16, "width": 30, "height": 3, "type": "url",
     "url": "https://example.com/news/1", "label": "Breaking: lists reconciled", "flicker": 140},
    {"x": 35, "y": 16, "width": 30, "height": 3, "type": "url",
     "url": "https://example.com/news/2", "label": "Labels survive rescans", "flicker": 200},
    {"x": 2, "y": 21, "width": 24, "height": 3, "type": "onclick",
     "label": "Load more", "flicker": 170},
    {"x": 30, "y": 21, "width": 26, "height": 3, "type": "url",
     "url": "https://example.com/about", "label": "About this demo"}
  ]
}"##;

/// The built-in page used when no script file is given.
pub fn demo_page() -> PageScript {
    PageScript::from_json(DEMO_PAGE_JSON).expect("built-in demo page parses")
}

/// Scan request mailbox between the engine and the frame loop.
#[derive(Default)]
pub(crate) struct ScanQueue {
    pending: AtomicBool,
    stopped: AtomicBool,
}

impl ScanQueue {
    /// Consume one pending request, if any.
    pub(crate) fn take_request(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }

    pub(crate) fn stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

impl ContentChannel for ScanQueue {
    fn request_scan(&self) {
        self.stopped.store(false, Ordering::SeqCst);
        self.pending.store(true, Ordering::SeqCst);
    }

    fn stop_scan(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn stop_scan_all(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

/// Stand-in for the displayed page; commands become log lines.
pub(crate) struct DemoSurface {
    scroll_width: f64,
    zoom: Mutex<f64>,
    events: Mutex<VecDeque<String>>,
}

impl DemoSurface {
    fn new(scroll_width: f64) -> Self {
        Self {
            scroll_width,
            zoom: Mutex::new(1.0),
            events: Mutex::new(VecDeque::new()),
        }
    }

    fn push_event(&self, line: String) {
        let mut events = self.events.lock().expect("event log lock poisoned");
        events.push_back(line);
        while events.len() > EVENT_LOG_CAP {
            events.pop_front();
        }
    }

    pub(crate) fn recent_events(&self, count: usize) -> Vec<String> {
        let events = self.events.lock().expect("event log lock poisoned");
        events.iter().rev().take(count).rev().cloned().collect()
    }
}

impl PageSurface for DemoSurface {
    fn zoom_factor(&self) -> f64 {
        *self.zoom.lock().expect("zoom lock poisoned")
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn navigate(&self, url: &str) -> Result<(), PageGone> {
        self.push_event(format!("navigate {url}"));
        Ok(())
    }

    fn open_tab(&self, url: &str, switch_to: bool) {
        let placement = if switch_to { "foreground" } else { "background" };
        self.push_event(format!("open {placement} tab {url}"));
    }

    fn dispatch_pointer_event(&self, event: PointerEvent) -> Result<(), PageGone> {
        match serde_json::to_string(&event) {
            Ok(json) => self.push_event(format!("input {json}")),
            Err(err) => self.push_event(format!("input <{err}>")),
        }
        Ok(())
    }

    fn focus_input_at(&self, x: f64, y: f64) -> Result<(), PageGone> {
        self.push_event(format!("focus input at ({x:.0}, {y:.0})"));
        Ok(())
    }
}

pub(crate) struct SharedMode {
    current: Mutex<Mode>,
}

impl Default for SharedMode {
    fn default() -> Self {
        Self { current: Mutex::new(Mode::Normal) }
    }
}

impl ModeHost for SharedMode {
    fn current_mode(&self) -> Mode {
        *self.current.lock().expect("mode lock poisoned")
    }

    fn set_mode(&self, mode: Mode) {
        *self.current.lock().expect("mode lock poisoned") = mode;
    }
}

/// Visual cursor the pointer lens moves around.
#[derive(Default)]
pub(crate) struct DemoPointer {
    cursor: Mutex<Option<(f64, f64)>>,
}

impl DemoPointer {
    pub(crate) fn position(&self) -> Option<(f64, f64)> {
        *self.cursor.lock().expect("cursor lock poisoned")
    }
}

impl PointerHost for DemoPointer {
    fn start(&self) {
        let mut cursor = self.cursor.lock().expect("cursor lock poisoned");
        if cursor.is_none() {
            *cursor = Some((0.0, 0.0));
        }
    }

    fn move_to(&self, x: f64, y: f64) {
        *self.cursor.lock().expect("cursor lock poisoned") = Some((x, y));
    }
}

#[derive(Default)]
pub(crate) struct OverlayBuffer {
    elements: Mutex<Vec<OverlayElement>>,
}

impl OverlayBuffer {
    pub(crate) fn snapshot(&self) -> Vec<OverlayElement> {
        self.elements.lock().expect("overlay lock poisoned").clone()
    }
}

impl OverlayHost for OverlayBuffer {
    fn replace(&self, elements: Vec<OverlayElement>) {
        *self.elements.lock().expect("overlay lock poisoned") = elements;
    }

    fn clear(&self) {
        self.elements.lock().expect("overlay lock poisoned").clear();
    }

    fn hide_hover(&self) {}
}

/// Every collaborator the demo wires the engine to.
pub(crate) struct DemoShell {
    pub(crate) content: Arc<ScanQueue>,
    pub(crate) page: Arc<DemoSurface>,
    pub(crate) modes: Arc<SharedMode>,
    pub(crate) pointer: Arc<DemoPointer>,
    pub(crate) overlay: Arc<OverlayBuffer>,
}

impl DemoShell {
    pub(crate) fn new(scroll_width: f64) -> Self {
        Self {
            content: Arc::new(ScanQueue::default()),
            page: Arc::new(DemoSurface::new(scroll_width)),
            modes: Arc::new(SharedMode::default()),
            pointer: Arc::new(DemoPointer::default()),
            overlay: Arc::new(OverlayBuffer::default()),
        }
    }

    pub(crate) fn engine_hosts(&self) -> EngineHosts {
        EngineHosts {
            content: self.content.clone(),
            page: self.page.clone(),
            modes: self.modes.clone(),
            pointer: self.pointer.clone(),
            overlay: self.overlay.clone(),
        }
    }
}
