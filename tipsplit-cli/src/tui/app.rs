//! What the TUI remembers between frames: focus, screen, messages.

use rust_decimal::Decimal;
use std::str::FromStr;
use tui_input::Input;

use tipsplit_core::prelude::*;

/// Which view the keyboard currently drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The calculator itself
    Calculator,
    /// Key reference overlay
    Help,
}

/// Control currently holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The bill amount text field
    #[default]
    Bill,
    /// The split +/- control
    Split,
    /// The tip slider
    Rate,
}

/// Severity of a status-bar message, which picks its badge color
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

/// Everything the draw and event loops share
pub struct App {
    /// Cleared when the user asks to quit
    pub running: bool,
    /// Active view
    pub screen: Screen,
    /// Control that receives arrow/typing input
    pub focus: Focus,
    /// Calculator inputs and derived totals
    pub state: CalculatorState,
    /// Display configuration
    pub config: TipConfig,
    /// Text input widget state for the bill field
    pub input: Input,
    /// Current slider stop, in `0..=config.rate_steps`
    pub slider_pos: u32,
    /// One-line feedback shown in the status bar
    pub message: Option<(String, MessageType)>,
}

impl App {
    /// Builds the app around an already-populated calculator state
    pub fn new(config: TipConfig, state: CalculatorState) -> Self {
        let slider_pos = state.tip_rate().nearest_position(config.rate_steps);
        let input = if state.bill_amount() > Decimal::ZERO {
            Input::default().with_value(state.bill_amount().to_string())
        } else {
            Input::default()
        };

        Self {
            running: true,
            screen: Screen::Calculator,
            focus: Focus::Bill,
            state,
            config,
            input,
            slider_pos,
            message: None,
        }
    }

    /// Move focus to the next control
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Bill => Focus::Split,
            Focus::Split => Focus::Rate,
            Focus::Rate => Focus::Bill,
        };
    }

    /// Move focus to the previous control
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Bill => Focus::Rate,
            Focus::Split => Focus::Bill,
            Focus::Rate => Focus::Split,
        };
    }

    /// Reparse the bill field and update the totals.
    /// Called after every edit so the totals track the text live.
    pub fn sync_bill_from_input(&mut self) {
        self.state.set_bill_text(self.input.value());
    }

    /// Confirm the bill field, reporting what happened in the status bar
    pub fn apply_bill_input(&mut self) {
        let text = self.input.value().trim().to_string();
        if text.is_empty() {
            self.message = Some(("Bill unchanged".to_string(), MessageType::Info));
            return;
        }

        match Decimal::from_str(&text) {
            Ok(amount) if amount >= Decimal::ZERO => {
                self.state.set_bill_text(&text);
                self.message = Some(("✓ Bill updated".to_string(), MessageType::Success));
            }
            Ok(_) => {
                self.message = Some((
                    "Bill amount cannot be negative".to_string(),
                    MessageType::Error,
                ));
            }
            Err(_) => {
                self.message = Some((
                    format!("Not a valid amount: {}", text),
                    MessageType::Error,
                ));
            }
        }
    }

    /// One more person joins the bill
    pub fn increment_split(&mut self) {
        self.state.increment_split();
    }

    /// One person leaves the bill
    pub fn decrement_split(&mut self) {
        if self.state.split_count() == SplitCount::MIN {
            self.message = Some((
                "Already splitting for one person".to_string(),
                MessageType::Warning,
            ));
            return;
        }
        self.state.decrement_split();
    }

    /// Move the tip slider one stop left
    pub fn slider_left(&mut self) {
        if self.slider_pos > 0 {
            self.slider_pos -= 1;
            self.apply_slider();
        }
    }

    /// Move the tip slider one stop right
    pub fn slider_right(&mut self) {
        if self.slider_pos < self.config.rate_steps {
            self.slider_pos += 1;
            self.apply_slider();
        }
    }

    fn apply_slider(&mut self) {
        self.state
            .set_rate_position(self.slider_pos, self.config.rate_steps);
    }

    /// Show the help screen
    pub fn show_help(&mut self) {
        self.screen = Screen::Help;
    }

    /// Go back to the calculator
    pub fn go_back(&mut self) {
        self.message = None;
        self.screen = Screen::Calculator;
    }

    /// Stop the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Ready-to-render strings for the current state
    pub fn display(&self) -> TipDisplay {
        self.state.display(&self.config)
    }
}
