//! UI rendering for the TUI.
//!
//! A single-screen calculator: per-person headline on a lavender card,
//! bill field, split controls, stat cards and the tip slider below.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Focus, MessageType, Screen};
use crate::tui::components::{InlineStat, Slider, StatCard};
use crate::tui::theme::{icons, theme};

use tipsplit_core::prelude::TipDisplay;

// ═══════════════════════════════════════════════════════════════════════════
// TOP-LEVEL DRAW
// ═══════════════════════════════════════════════════════════════════════════

/// Paints the whole frame: calculator screen plus any overlay on top.
pub fn ui(frame: &mut Frame, app: &App) {
    let t = theme();

    // Wipe the frame so a dismissed popup leaves no stale cells behind,
    // then lay down the slate background
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(t.bg()), frame.area());

    let root_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // top bar
            Constraint::Min(0),    // calculator
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

    let display = app.display();

    render_header(frame, root_layout[0], &display);
    render_calculator(frame, root_layout[1], app, &display);
    render_status_bar(frame, root_layout[2], app);

    // Popups draw after everything else so they sit on top
    if app.screen == Screen::Help {
        render_help(frame, frame.area());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER
// ═══════════════════════════════════════════════════════════════════════════

fn render_header(frame: &mut Frame, area: Rect, display: &TipDisplay) {
    let t = theme();

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(t.slate_light))
        .style(t.bg());

    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    // Brand on the left, session facts on the right
    let brand = Line::from(vec![
        Span::raw(" "),
        Span::styled(icons::RECEIPT, Style::default().fg(t.lavender)),
        Span::raw(" "),
        Span::styled("TIP", t.title()),
        Span::styled(
            "SPLIT",
            Style::default()
                .fg(t.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Left), layout[0]);

    // Right: Currency and current tip rate
    let status_line = Line::from(vec![
        Span::styled("Currency: ", Style::default().fg(t.text_muted)),
        Span::styled(
            display.currency_code.clone(),
            Style::default().fg(t.text_primary),
        ),
        Span::raw("  "),
        Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
        Span::raw("  "),
        Span::styled("Tip: ", Style::default().fg(t.lavender)),
        Span::styled(
            display.percent_label.clone(),
            Style::default().fg(t.text_primary),
        ),
        Span::raw(" "),
    ]);

    frame.render_widget(
        Paragraph::new(status_line).alignment(Alignment::Right),
        layout[1],
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// CALCULATOR
// ═══════════════════════════════════════════════════════════════════════════

fn render_calculator(frame: &mut Frame, area: Rect, app: &App, display: &TipDisplay) {
    // Center a column of controls
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Per-person headline card
            Constraint::Length(3), // Bill amount field
            Constraint::Length(3), // Split controls
            Constraint::Length(6), // Tip / total stat cards
            Constraint::Length(4), // Tip slider
            Constraint::Min(0),
        ])
        .split(columns[1]);

    render_headline_card(frame, rows[0], display);
    render_bill_field(frame, rows[1], app);
    render_split_row(frame, rows[2], app, display);
    render_stat_cards(frame, rows[3], display);
    render_slider_row(frame, rows[4], app, display);
}

/// The lavender card with the number everyone actually wants to see.
fn render_headline_card(frame: &mut Frame, area: Rect, display: &TipDisplay) {
    let t = theme();

    let card = Block::default().style(t.headline_card());
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Total per person")
            .style(Style::default().fg(t.ink))
            .alignment(Alignment::Center),
        lines[0],
    );
    frame.render_widget(
        Paragraph::new(display.per_person.clone())
            .style(Style::default().fg(t.ink).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        lines[1],
    );
}

fn render_bill_field(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();
    let focused = app.focus == Focus::Bill;

    let block = Block::default()
        .title(" Bill amount ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            t.border_active()
        } else {
            t.border_inactive()
        })
        .style(t.bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = app.input.value();
    let paragraph = if value.is_empty() {
        Paragraph::new("0.00").style(
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Paragraph::new(value).style(if focused { t.value() } else { t.text() })
    };
    frame.render_widget(paragraph, inner);

    // Set cursor position while the field is being edited
    if focused && app.screen == Screen::Calculator {
        frame.set_cursor_position((inner.x + app.input.visual_cursor() as u16, inner.y));
    }
}

fn render_split_row(frame: &mut Frame, area: Rect, app: &App, display: &TipDisplay) {
    let t = theme();
    let focused = app.focus == Focus::Split;

    let block = Block::default()
        .title(" Split between ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            t.border_active()
        } else {
            t.border_inactive()
        })
        .style(t.bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button_style = if focused {
        t.highlight()
    } else {
        Style::default().fg(t.text_muted)
    };
    let noun = if display.split_count == 1 {
        "person"
    } else {
        "people"
    };

    let line = Line::from(vec![
        Span::styled("[-]", button_style),
        Span::raw("   "),
        Span::styled(
            format!("{} {}", icons::PEOPLE, display.split_count),
            t.value(),
        ),
        Span::styled(format!(" {}", noun), Style::default().fg(t.text_muted)),
        Span::raw("   "),
        Span::styled("[+]", button_style),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        inner,
    );
}

fn render_stat_cards(frame: &mut Frame, area: Rect, display: &TipDisplay) {
    let t = theme();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    StatCard::new("Tip amount", &display.tip)
        .value_color(t.lavender)
        .render(frame, cards[0]);

    StatCard::new("Total with tip", &display.total)
        .value_color(t.text_primary)
        .render(frame, cards[1]);
}

fn render_slider_row(frame: &mut Frame, area: Rect, app: &App, display: &TipDisplay) {
    let t = theme();
    let focused = app.focus == Focus::Rate;

    let block = Block::default()
        .title(" Tip ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            t.border_active()
        } else {
            t.border_inactive()
        })
        .style(t.bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    Slider::new(app.slider_pos, app.config.rate_steps)
        .width(inner.width)
        .focused(focused)
        .render(frame, lines[0]);

    frame.render_widget(
        Paragraph::new(
            InlineStat::new("Tip", &display.percent_label)
                .value_color(t.lavender)
                .to_line(),
        )
        .alignment(Alignment::Center),
        lines[1],
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP OVERLAY
// ═══════════════════════════════════════════════════════════════════════════

fn render_help(frame: &mut Frame, area: Rect) {
    let t = theme();

    let popup_area = centered_rect(60, 75, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .title_style(t.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_active())
        .style(t.bg());

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "NAVIGATION",
            Style::default()
                .fg(t.lavender)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Tab / ↓    ", t.accent_style()),
            Span::raw("Next field"),
        ]),
        Line::from(vec![
            Span::styled("  S-Tab / ↑  ", t.accent_style()),
            Span::raw("Previous field"),
        ]),
        Line::from(vec![
            Span::styled("  ← / →      ", t.accent_style()),
            Span::raw("Adjust the focused control"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "CONTROLS",
            Style::default()
                .fg(t.lavender)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  0-9 . ,    ", t.accent_style()),
            Span::raw("Type the bill amount"),
        ]),
        Line::from(vec![
            Span::styled("  + / -      ", t.accent_style()),
            Span::raw("More / fewer people"),
        ]),
        Line::from(vec![
            Span::styled("  Enter      ", t.accent_style()),
            Span::raw("Confirm the bill amount"),
        ]),
        Line::from(vec![
            Span::styled("  ?          ", t.accent_style()),
            Span::raw("Show or hide this help"),
        ]),
        Line::from(vec![
            Span::styled("  q / Ctrl+C ", t.accent_style()),
            Span::raw("Quit the calculator"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Esc] to close",
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

// ═══════════════════════════════════════════════════════════════════════════
// STATUS BAR
// ═══════════════════════════════════════════════════════════════════════════

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let mode = match app.screen {
        Screen::Calculator => "CALCULATOR",
        Screen::Help => "HELP",
    };

    // Transient messages take the badge slot; otherwise show the mode
    let status = if let Some((msg, kind)) = &app.message {
        let color = match kind {
            MessageType::Error => t.error,
            MessageType::Success => t.success,
            MessageType::Warning => t.warning,
            MessageType::Info => t.accent,
        };
        Span::styled(format!(" {} ", msg), Style::default().bg(color).fg(t.slate))
    } else {
        Span::styled(
            format!(" {} ", mode),
            Style::default().bg(t.slate_light).fg(t.text_muted),
        )
    };

    let keys = Span::styled(
        " [Tab] Next field  [+/-] Split  [←→] Adjust  [?] Help  [Q] Quit ",
        Style::default().fg(t.text_muted),
    );

    let bar = Line::from(vec![status, Span::raw(" "), keys]);

    frame.render_widget(Paragraph::new(bar).style(t.bg()), area);
}

// ═══════════════════════════════════════════════════════════════════════════
// UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Centers a rect of the given percentage size inside `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
#[path = "ui_tests.rs"]
mod ui_tests;
