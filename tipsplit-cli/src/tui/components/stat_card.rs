//! Labelled value cards.
//!
//! [`StatCard`] is a small bordered box with a muted label over a bold
//! amount, used for the tip and grand-total readouts. [`InlineStat`] is the
//! same idea squeezed onto one line for tight spots like the slider caption.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::theme::theme;

pub struct StatCard<'a> {
    label: &'a str,
    amount: &'a str,
    amount_color: Color,
}

impl<'a> StatCard<'a> {
    pub fn new(label: &'a str, amount: &'a str) -> Self {
        Self {
            label,
            amount,
            amount_color: theme().text_primary,
        }
    }

    pub fn value_color(mut self, color: Color) -> Self {
        self.amount_color = color;
        self
    }

    /// Draws the card. Wants six rows; in less the amount row is dropped
    /// before the label row.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_inactive())
            .style(t.bg());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(inner);

        frame.render_widget(Paragraph::new(self.label).style(t.subtitle()), rows[0]);
        frame.render_widget(
            Paragraph::new(self.amount).style(
                Style::default()
                    .fg(self.amount_color)
                    .add_modifier(Modifier::BOLD),
            ),
            rows[1],
        );
    }
}

/// One-line `label value` pair.
pub struct InlineStat<'a> {
    label: &'a str,
    value: &'a str,
    value_color: Color,
}

impl<'a> InlineStat<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            value_color: theme().text_primary,
        }
    }

    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    pub fn to_line(&self) -> Line<'a> {
        let t = theme();
        Line::from(vec![
            Span::styled(self.label, Style::default().fg(t.text_muted)),
            Span::raw(" "),
            Span::styled(
                self.value,
                Style::default()
                    .fg(self.value_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }
}
