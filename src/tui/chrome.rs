// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(EVENT_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    draw_page(frame, layout[0], app);
    draw_event_log(frame, layout[1], app);
    draw_footer(frame, layout[2], app);
}

fn draw_page(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        " {} ({:.0}x{:.0}) ",
        app.script.title(),
        app.script.width(),
        app.script.height()
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for page_box in app.script.boxes_at(app.ticks, app.churn) {
        let target = page_box.target();
        let Some(rect) = cell_rect(inner, target.x, target.y, target.width, target.height)
        else {
            continue;
        };
        let body = Paragraph::new(page_box.label().to_string())
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(body, rect);
    }

    // Overlay elements, lowest stacking tier first so higher tiers win.
    let mut elements = app.shell.overlay.snapshot();
    elements.sort_by_key(|element| element.z);
    for element in &elements {
        match element.role {
            OverlayRole::Border => {
                let Some(rect) =
                    cell_rect(inner, element.left, element.top, element.width, element.height)
                else {
                    continue;
                };
                let border = Block::default().borders(Borders::ALL).border_style(
                    Style::default().fg(kind_color(element.kind)).add_modifier(Modifier::BOLD),
                );
                frame.render_widget(border, rect);
            }
            OverlayRole::Badge => {
                let text = element.text.as_deref().unwrap_or("");
                let width = text.chars().count() as f64 + 2.0;
                let Some(rect) = cell_rect(inner, element.left, element.top, width, 1.0) else {
                    continue;
                };
                let badge = Paragraph::new(format!(" {text} ")).style(
                    Style::default().fg(BADGE_FG).bg(BADGE_BG).add_modifier(Modifier::BOLD),
                );
                frame.render_widget(badge, rect);
            }
        }
    }

    if let Some((x, y)) = app.shell.pointer.position() {
        if let Some(rect) = cell_rect(inner, x, y, 1.0, 1.0) {
            let cursor = Paragraph::new(POINTER_CURSOR).style(
                Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
            );
            frame.render_widget(cursor, rect);
        }
    }
}

fn draw_event_log(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" page events ");
    let inner_height = block.inner(area).height as usize;
    let lines = app.shell.page.recent_events(inner_height);
    let body = Paragraph::new(lines.join("\n"))
        .style(Style::default().fg(Color::Gray))
        .block(block);
    frame.render_widget(body, area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let mode = app.shell.modes.current_mode();
    let line = footer_line(mode, app.shell.content.stopped());
    frame.render_widget(Paragraph::new(line), area);

    let brand = Paragraph::new(Span::styled(
        FOOTER_BRAND,
        Style::default().fg(FOOTER_BRAND_COLOR),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(brand, area);
}

fn footer_line(mode: Mode, scan_stopped: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode.as_str().to_uppercase()),
            Style::default().fg(Color::Black).bg(mode_color(mode)).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    let keys: &[(&str, &str)] = match mode {
        Mode::Follow => &[
            ("a-z", "select hint"),
            ("A-Z", "select and keep hinting"),
            ("Esc", "cancel"),
        ],
        Mode::Insert => &[("Esc", "back to normal")],
        Mode::Pointer | Mode::Visual => &[("f", "follow"), ("Esc", "normal")],
        _ => &[
            ("f", "follow"),
            ("F", "follow into new tab"),
            ("p", "pointer"),
            ("v", "visual"),
            ("r", "rotate layers"),
            ("q", "quit"),
        ],
    };

    for (index, (key, label)) in keys.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }

    if scan_stopped && mode != Mode::Follow {
        spans.push(Span::styled(
            "  [scan idle]",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Follow => Color::LightYellow,
        Mode::Insert => Color::LightGreen,
        Mode::Pointer => Color::LightMagenta,
        Mode::Visual => Color::LightBlue,
        _ => Color::Gray,
    }
}

fn kind_color(kind: TargetKind) -> Color {
    match kind {
        TargetKind::Url => Color::LightCyan,
        TargetKind::Click => Color::LightRed,
        TargetKind::InputClick => Color::LightYellow,
        TargetKind::InputInsert => Color::LightGreen,
        TargetKind::Other => Color::DarkGray,
    }
}

/// Map page coordinates into terminal cells inside `area`, clipping to it.
/// Returns `None` when nothing of the box is visible.
fn cell_rect(area: Rect, left: f64, top: f64, width: f64, height: f64) -> Option<Rect> {
    if !(left.is_finite() && top.is_finite() && width.is_finite() && height.is_finite()) {
        return None;
    }
    let x0 = i64::from(area.x) + left.round() as i64;
    let y0 = i64::from(area.y) + top.round() as i64;
    let x1 = x0 + (width.round() as i64).max(1);
    let y1 = y0 + (height.round() as i64).max(1);

    let clip_x0 = x0.max(i64::from(area.x));
    let clip_y0 = y0.max(i64::from(area.y));
    let clip_x1 = x1.min(i64::from(area.x) + i64::from(area.width));
    let clip_y1 = y1.min(i64::from(area.y) + i64::from(area.height));
    if clip_x0 >= clip_x1 || clip_y0 >= clip_y1 {
        return None;
    }
    Some(Rect {
        x: clip_x0 as u16,
        y: clip_y0 as u16,
        width: (clip_x1 - clip_x0) as u16,
        height: (clip_y1 - clip_y0) as u16,
    })
}
