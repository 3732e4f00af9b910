//! Screen state for an interactive calculator.
//!
//! [`CalculatorState`] owns the three inputs and the derived totals, and
//! applies edits the way a touch UI expects: malformed text never tears down
//! the screen, it is logged and the previous numbers stay put.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::config::TipConfig;
use crate::rate::TipRate;
use crate::split::SplitCount;
use crate::types::{TipBreakdown, TipDisplay};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorState {
    bill_amount: Decimal,
    split_count: SplitCount,
    tip_rate: TipRate,
    totals: TipBreakdown,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState {
            bill_amount: Decimal::ZERO,
            split_count: SplitCount::default(),
            tip_rate: TipRate::ZERO,
            totals: TipBreakdown::empty(),
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the current text of the bill field.
    ///
    /// Empty, malformed, and negative input all leave the state untouched.
    pub fn set_bill_text(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Empty bill input, keeping previous amount");
            return;
        }

        match Decimal::from_str(trimmed) {
            Ok(amount) if amount >= Decimal::ZERO => {
                self.bill_amount = amount;
                self.recompute();
            }
            Ok(amount) => {
                debug!(%amount, "Negative bill input rejected");
            }
            Err(e) => {
                debug!(input = trimmed, error = %e, "Unparseable bill input ignored");
            }
        }
    }

    pub fn increment_split(&mut self) {
        self.split_count = self.split_count.increment();
        self.recompute();
    }

    pub fn decrement_split(&mut self) {
        let next = self.split_count.decrement();
        if next != self.split_count {
            self.split_count = next;
            self.recompute();
        }
    }

    pub fn set_rate(&mut self, rate: TipRate) {
        self.tip_rate = rate;
        self.recompute();
    }

    /// Sets the rate from a discrete slider position.
    pub fn set_rate_position(&mut self, position: u32, steps: u32) {
        self.set_rate(TipRate::from_position(position, steps));
    }

    pub fn bill_amount(&self) -> Decimal {
        self.bill_amount
    }

    pub fn split_count(&self) -> SplitCount {
        self.split_count
    }

    pub fn tip_rate(&self) -> TipRate {
        self.tip_rate
    }

    pub fn totals(&self) -> &TipBreakdown {
        &self.totals
    }

    pub fn display(&self, config: &TipConfig) -> TipDisplay {
        self.totals.to_display(config)
    }

    fn recompute(&mut self) {
        match TipBreakdown::new(self.bill_amount, self.tip_rate, self.split_count) {
            Ok(totals) => self.totals = totals,
            Err(e) => {
                warn!(error = %e, "Recompute failed, keeping previous totals");
            }
        }
    }
}
