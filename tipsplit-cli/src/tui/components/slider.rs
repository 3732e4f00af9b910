//! Tip Slider Widget
//!
//! A discrete horizontal slider rendered as a character track with a knob.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::super::theme::{icons, theme};

/// A discrete slider with `steps + 1` stops from 0% to 100%.
pub struct Slider {
    /// Current stop, in `0..=steps`
    position: u32,
    /// Number of intervals on the track
    steps: u32,
    /// Track width in characters
    width: u16,
    /// Whether the slider has keyboard focus
    focused: bool,
}

impl Slider {
    pub fn new(position: u32, steps: u32) -> Self {
        Self {
            position: position.min(steps),
            steps,
            width: 24,
            focused: false,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width.max(3);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Generate the track as a styled Line.
    pub fn to_line(&self) -> Line<'static> {
        let t = theme();

        let track = self.width.saturating_sub(1) as usize;
        let knob_at = if self.steps > 0 {
            (self.position as usize * track) / self.steps as usize
        } else {
            0
        };

        let (filled_style, knob_style, empty_style) = if self.focused {
            (
                Style::default().fg(t.lavender),
                Style::default().fg(t.lavender).add_modifier(Modifier::BOLD),
                Style::default().fg(t.slate_light),
            )
        } else {
            (
                Style::default().fg(t.text_muted),
                Style::default().fg(t.text_muted),
                Style::default().fg(t.slate_light),
            )
        };

        Line::from(vec![
            Span::styled(icons::PROGRESS_FULL.repeat(knob_at), filled_style),
            Span::styled(icons::SLIDER_KNOB, knob_style),
            Span::styled(icons::PROGRESS_EMPTY.repeat(track - knob_at), empty_style),
        ])
    }

    /// Render the slider to the frame.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.to_line()), area);
    }
}
