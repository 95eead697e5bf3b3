// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal playground.
//!
//! Renders a scripted demo page (ratatui + crossterm), wires a follow engine
//! to in-process collaborators, and lets the keyboard drive hint sessions
//! the way a real embedding would. Page commands show up in an event log
//! instead of reaching a browser.

use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tokio::time::{self, MissedTickBehavior};

use crate::host::{ModeHost, Preferences};
use crate::model::{Mode, TargetKind};
use crate::overlay::OverlayRole;
use crate::session::FollowEngine;

mod page;

pub use page::{demo_page, PageScript, PageScriptError};

use page::DemoShell;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const EVENT_PANEL_HEIGHT: u16 = 7;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅷 🅸 🅽 🆃 🅴 🆁 🅻 🅰 🅽 🅳 ";
const BADGE_FG: Color = Color::Black;
const BADGE_BG: Color = Color::LightYellow;
const POINTER_CURSOR: &str = "✛";

/// Runs the playground on the built-in demo page.
pub async fn run() -> Result<(), Box<dyn Error>> {
    run_with_page(demo_page(), Preferences::default(), true).await
}

/// Runs the playground on the given page script.
pub async fn run_with_page(
    script: PageScript,
    prefs: Preferences,
    churn: bool,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(script, prefs, churn);
    let mut ticker = time::interval(FRAME_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while !app.should_quit {
        ticker.tick().await;
        app.advance().await;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key).await;
                }
                _ => {}
            }
        }
        terminal.draw(|frame| draw(frame, &app))?;
    }

    Ok(())
}

struct App {
    engine: FollowEngine,
    shell: DemoShell,
    script: PageScript,
    churn: bool,
    ticks: u64,
    should_quit: bool,
}

impl App {
    fn new(script: PageScript, prefs: Preferences, churn: bool) -> Self {
        let shell = DemoShell::new(script.width());
        let engine = FollowEngine::new(shell.engine_hosts(), prefs);
        Self {
            engine,
            shell,
            script,
            churn,
            ticks: 0,
            should_quit: false,
        }
    }

    /// One frame tick: progress page churn and answer pending scan requests.
    async fn advance(&mut self) {
        self.ticks += 1;
        if self.shell.content.take_request() {
            let scanned = self.script.scan_at(self.ticks, self.churn);
            self.engine.apply_scan_results(scanned).await;
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let mode = self.shell.modes.current_mode();
        match (mode, key.code) {
            (Mode::Follow, KeyCode::Esc) => {
                self.engine.cancel_follow().await;
                let restore = self.engine.mode_before_follow().await;
                self.shell.modes.set_mode(restore);
            }
            (Mode::Follow, KeyCode::Char(ch)) => {
                self.engine.handle_key(ch).await;
            }
            (Mode::Normal, KeyCode::Char('q')) => self.should_quit = true,
            (Mode::Normal | Mode::Pointer | Mode::Visual, KeyCode::Char('f')) => {
                self.engine.start_follow(false).await;
            }
            (Mode::Normal | Mode::Pointer | Mode::Visual, KeyCode::Char('F')) => {
                self.engine.start_follow(true).await;
            }
            (Mode::Normal, KeyCode::Char('r')) => {
                self.engine.reorder_overlay_layers().await;
            }
            (Mode::Normal, KeyCode::Char('p')) => self.shell.modes.set_mode(Mode::Pointer),
            (Mode::Normal, KeyCode::Char('v')) => self.shell.modes.set_mode(Mode::Visual),
            (_, KeyCode::Esc) => self.shell.modes.set_mode(Mode::Normal),
            _ => {}
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

include!("chrome.rs");
