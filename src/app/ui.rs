//! Frame rendering: layout, panels, footer, and the toast overlay.

use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::wheel::SignalWheel;

use super::{App, ButtonState};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(f.area());

    draw_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    // Left column: the wheel, controlled by the app-owned selection
    let selection = app.selection;
    let wheel = SignalWheel::new(&selection).config(app.wheel_config);
    f.render_stateful_widget(wheel, main_chunks[0], &mut app.wheel);

    // Right column: button, scenario, signals
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(50),
            Constraint::Min(1),
        ])
        .split(main_chunks[1]);

    draw_button(f, right_chunks[0], app);
    draw_scenario(f, right_chunks[1], app);
    draw_signals(f, right_chunks[2], app);

    draw_footer(f, chunks[2], app);
    draw_toast(f, app);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Rgb(120, 255, 138))),
        Span::styled("SEED", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("  SPECULATIVE DESIGN PLATFORM", Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(header, area);
}

fn draw_button(f: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match app.button {
        ButtonState::Loading => (
            "Generating...".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        ButtonState::Success => (
            "Scenario Ready!".to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ButtonState::Default => {
            let label = if app.current_scenario.is_some() {
                "Regenerate Scenario [g]"
            } else {
                "Generate Scenario [g]"
            };
            (label.to_string(), Style::default().fg(Color::White))
        }
    };
    let button = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn draw_scenario(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Scenario ");
    let paragraph = match &app.current_scenario {
        Some(scn) => {
            let meta = format!(
                "{} / {} ({:.0}%) / {} years",
                scn.polarity, scn.likelihood, scn.likelihood_value, scn.timeframe
            );
            let mut lines = vec![
                Line::styled(scn.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(meta, Style::default().fg(Color::DarkGray)),
                Line::raw(""),
                Line::raw(scn.description.clone()),
            ];
            if let Some(sources) = &scn.sources {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    format!("Sources: {}", sources.join(", ")),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block)
        }
        None => Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                "No scenario selected",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw("Select a polarity and likelihood, then press g."),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block),
    };
    f.render_widget(paragraph, area);
}

fn draw_signals(f: &mut Frame, area: Rect, app: &App) {
    let signals = app.visible_signals();
    let items: Vec<ListItem> = signals
        .iter()
        .map(|sig| {
            ListItem::new(vec![
                Line::styled(sig.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(
                    format!("  Source: {}", sig.attribution()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Signals Used [↑/↓ e:edit d:delete] "),
        )
        .highlight_style(Style::default().bg(Color::Rgb(41, 62, 107)))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !signals.is_empty() {
        state.select(Some(app.list_cursor.min(signals.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let separator = Paragraph::new(Line::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(separator, Rect { height: 1, ..area });

    let status_area = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(status_area);

    let left = Paragraph::new("SEED v0.1 - SPECULATIVE FUTURES")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(left, halves[0]);

    let year = chrono::Local::now().year();
    let right = Paragraph::new(format!(
        "{year} DESIGN FUTURES LAB | SIGNALS: {} | SCENARIOS: {} | COVERAGE: {}/6",
        app.visible_signals().len(),
        app.catalog.scenarios_matching(app.selection).len(),
        app.catalog.covered_combinations(),
    ))
    .alignment(Alignment::Right)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(right, halves[1]);
}

fn draw_toast(f: &mut Frame, app: &App) {
    let Some(toast) = app.toasts.latest() else {
        return;
    };
    let screen = f.area();
    let width = 40.min(screen.width);
    let area = Rect {
        x: screen.width.saturating_sub(width + 1),
        y: 1,
        width,
        height: 4.min(screen.height),
    };
    f.render_widget(Clear, area);
    let body = Paragraph::new(toast.body.clone())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", toast.title))
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(body, area);
}
