// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hinterland CLI entrypoint.
//!
//! Runs the terminal hint playground on a scripted page, on the built-in
//! demo page when no script is given.

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<page.json>] [--no-churn] [--font-size <px>] [--background-tabs]\n  {program} [--page <page.json>] [--no-churn] [--font-size <px>] [--background-tabs]\n\nRuns the hint playground on a scripted page; without a script the built-in\ndemo page is used.\n\n--no-churn freezes the page. By default some boxes appear and disappear so\nthe hint labels can be watched staying put across rescans.\n\n--font-size <px> sets the badge font size used for overlay placement (clamped to 8-30).\n\n--background-tabs opens activated new tabs without switching to them."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    page_file: Option<String>,
    font_size: Option<f64>,
    no_churn: bool,
    background_tabs: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--page" => {
                if options.page_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.page_file = Some(path);
            }
            "--font-size" => {
                if options.font_size.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let size: f64 = raw.parse().map_err(|_| ())?;
                if !size.is_finite() || size <= 0.0 {
                    return Err(());
                }
                options.font_size = Some(size);
            }
            "--no-churn" => {
                if options.no_churn {
                    return Err(());
                }
                options.no_churn = true;
            }
            "--background-tabs" => {
                if options.background_tabs {
                    return Err(());
                }
                options.background_tabs = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.page_file.is_some() {
                    return Err(());
                }
                options.page_file = Some(arg);
            }
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "hinterland".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let script = match &options.page_file {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|err| format!("read page script {path}: {err}"))?;
                hinterland::tui::PageScript::from_json(&json)
                    .map_err(|err| format!("parse page script {path}: {err}"))?
            }
            None => hinterland::tui::demo_page(),
        };

        let switch_to_new_tabs = !options.background_tabs;
        let prefs = hinterland::host::Preferences::new(
            switch_to_new_tabs,
            switch_to_new_tabs,
            options.font_size.unwrap_or(14.0),
        );

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(hinterland::tui::run_with_page(script, prefs, !options.no_churn))?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("hinterland: {err}");
        std::process::exit(1);
    }
}
