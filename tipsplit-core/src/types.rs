use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TipConfig;
use crate::currency::CurrencyFormatter;
use crate::math::TipDecimal;
use crate::rate::TipRate;
use crate::split::SplitCount;

/// Represents a single step in the tip calculation process.
///
/// This struct provides transparency into how the per-person total was derived,
/// enabling users to understand and verify each step of the calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationStep {
    /// Human-readable description of what this step does.
    pub description: String,
    /// The value at this step (if applicable).
    pub amount: Option<Decimal>,
    /// The operation type: "Initial", "Add", "rate", "divide", "result", "info"
    pub operation: String,
}

impl CalculationStep {
    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "Initial".to_string(),
        }
    }

    pub fn add(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "Add".to_string(),
        }
    }

    pub fn rate(description: impl Into<String>, rate: Decimal) -> Self {
        CalculationStep {
            description: description.into(),
            amount: Some(rate),
            operation: "rate".to_string(),
        }
    }

    pub fn divide(description: impl Into<String>, amount: Decimal) -> Self {
        CalculationStep {
            description: description.into(),
            amount: Some(amount),
            operation: "divide".to_string(),
        }
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        CalculationStep {
            description: description.into(),
            amount: Some(amount),
            operation: "result".to_string(),
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        CalculationStep {
            description: description.into(),
            amount: None,
            operation: "info".to_string(),
        }
    }
}

/// Represents the detailed breakdown of a split bill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipBreakdown {
    /// The bill amount before gratuity.
    pub bill_amount: Decimal,
    /// The gratuity rate applied, as a fraction in [0, 1].
    pub tip_rate: TipRate,
    /// Number of people sharing the bill.
    pub split_count: SplitCount,
    /// Gratuity amount (bill_amount * tip_rate).
    pub tip_amount: Decimal,
    /// Bill plus gratuity (bill_amount + tip_amount).
    pub bill_with_tip: Decimal,
    /// Share owed by each person (bill_with_tip / split_count).
    pub total_per_person: Decimal,
    /// Optional label for the bill (e.g. "Dinner", "Team Lunch").
    pub label: Option<String>,
    /// Step-by-step trace of how this breakdown was derived.
    pub calculation_trace: Vec<CalculationStep>,
}

impl TipBreakdown {
    /// Computes a breakdown from the three inputs, building the standard trace.
    pub fn new(
        bill_amount: Decimal,
        tip_rate: TipRate,
        split_count: SplitCount,
    ) -> Result<Self, TipError> {
        let mut trace = vec![
            CalculationStep::initial("Bill Amount", bill_amount),
            CalculationStep::rate("Tip Rate", tip_rate.fraction()),
        ];

        let tip_amount = TipDecimal::new(bill_amount).safe_mul(tip_rate.fraction())?;
        let tip_value = *tip_amount;
        trace.push(CalculationStep::add("Tip Amount", tip_value));

        let bill_with_tip = tip_amount.safe_add(bill_amount)?;
        let total_value = *bill_with_tip;
        trace.push(CalculationStep::result("Bill With Tip", total_value));

        trace.push(CalculationStep::divide(
            "Split Between",
            split_count.as_decimal(),
        ));
        let total_per_person = bill_with_tip.safe_div(split_count.as_decimal())?;
        trace.push(CalculationStep::result("Total Per Person", *total_per_person));

        Ok(TipBreakdown {
            bill_amount,
            tip_rate,
            split_count,
            tip_amount: tip_value,
            bill_with_tip: total_value,
            total_per_person: *total_per_person,
            label: None,
            calculation_trace: trace,
        })
    }

    /// The breakdown of a bill nobody has entered yet. Everything is zero.
    pub fn empty() -> Self {
        TipBreakdown {
            bill_amount: Decimal::ZERO,
            tip_rate: TipRate::ZERO,
            split_count: SplitCount::default(),
            tip_amount: Decimal::ZERO,
            bill_with_tip: Decimal::ZERO,
            total_per_person: Decimal::ZERO,
            label: None,
            calculation_trace: vec![CalculationStep::info("No bill entered")],
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the per-person total formatted as a string with 2 decimal places.
    pub fn format_per_person(&self) -> String {
        use rust_decimal::RoundingStrategy;
        let rounded = self
            .total_per_person
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }

    /// Returns a concise status string.
    /// Format: "{Label}: {split} way(s) - Each: {Amount}"
    pub fn summary(&self) -> String {
        let label_str = self.label.as_deref().unwrap_or("Bill");
        format!(
            "{}: {} way(s) - Each: {}",
            label_str,
            self.split_count,
            self.format_per_person()
        )
    }

    /// Generates a human-readable explanation of the split.
    ///
    /// The output is formatted as a step-by-step list, showing operations
    /// and their results, so users can see exactly how the per-person total
    /// was determined.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();
        let label = self.label.as_deref().unwrap_or("Bill");

        writeln!(&mut output, "Breakdown for '{}':", label).unwrap();
        writeln!(&mut output, "{:-<50}", "").unwrap();

        // Find the maximum description length for alignment
        let max_desc_len = self
            .calculation_trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(20)
            .max(20);

        for step in &self.calculation_trace {
            let op_symbol = match step.operation.as_str() {
                "Initial" => " ",
                "Add" => "+",
                "rate" => "x",
                "divide" => "/",
                "result" => "=",
                _ => " ",
            };

            let amount_str = if let Some(amt) = step.amount {
                if step.operation == "rate" {
                    format!("{:.3}", amt)
                } else {
                    format!("{:.2}", amt)
                }
            } else {
                String::new()
            };

            if step.operation == "info" {
                writeln!(&mut output, "  INFO: {}", step.description).unwrap();
            } else if !amount_str.is_empty() {
                writeln!(
                    &mut output,
                    "  {:<width$} : {} {:>10} ({})",
                    step.description,
                    op_symbol,
                    amount_str,
                    step.operation,
                    width = max_desc_len
                )
                .unwrap();
            } else {
                writeln!(
                    &mut output,
                    "  {:<width$} : [No Amount] ({})",
                    step.description,
                    step.operation,
                    width = max_desc_len
                )
                .unwrap();
            }
        }

        writeln!(&mut output, "{:-<50}", "").unwrap();
        writeln!(
            &mut output,
            "Split {} way(s) - Each person pays: {}",
            self.split_count,
            self.format_per_person()
        )
        .unwrap();

        output
    }

    /// Builds the ready-to-render view model for a calculator screen,
    /// formatting every amount in the configured currency.
    pub fn to_display(&self, config: &TipConfig) -> TipDisplay {
        let currency = config.currency;
        TipDisplay {
            bill: currency.format_currency(self.bill_amount),
            tip: currency.format_currency(self.tip_amount),
            total: currency.format_currency(self.bill_with_tip),
            per_person: currency.format_currency(self.total_per_person),
            percent_label: self.tip_rate.percent_label(),
            split_count: self.split_count.get(),
            currency_code: currency.code().to_string(),
        }
    }
}

impl std::fmt::Display for TipBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label_str = self.label.as_deref().unwrap_or("Bill");

        writeln!(f, "Bill: {} (split {} ways)", label_str, self.split_count)?;
        writeln!(
            f,
            "Subtotal: {} | Tip: {} ({})",
            self.bill_amount,
            self.tip_amount,
            self.tip_rate.percent_label()
        )?;
        write!(
            f,
            "Total: {} -> {} per person",
            self.bill_with_tip,
            self.format_per_person()
        )
    }
}

/// Ready-to-render strings for a calculator screen.
///
/// Amounts carry the currency symbol and exactly two decimal places; the
/// percent label carries one decimal place (e.g. "15.0%").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipDisplay {
    pub bill: String,
    pub tip: String,
    pub total: String,
    pub per_person: String,
    pub percent_label: String,
    pub split_count: u32,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum TipError {
    #[error("Invalid Input [Bill: {}]: {reason} (field '{field}', value '{value}')", .source_label.as_deref().unwrap_or("Unknown"))]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
        source_label: Option<String>,
    },
    #[error("Configuration Error [Bill: {}]: {reason}", .source_label.as_deref().unwrap_or("Unknown"))]
    ConfigurationError {
        reason: String,
        source_label: Option<String>,
    },
    #[error("Calculation Error [Bill: {}]: {reason}", .source_label.as_deref().unwrap_or("Unknown"))]
    Calculation {
        reason: String,
        source_label: Option<String>,
    },
    #[error("Arithmetic Overflow [Bill: {}]: Operation '{operation}' failed", .source_label.as_deref().unwrap_or("Unknown"))]
    Overflow {
        operation: String,
        source_label: Option<String>,
    },
}

impl TipError {
    pub fn with_source(self, source: String) -> Self {
        match self {
            TipError::InvalidInput {
                field,
                value,
                reason,
                ..
            } => TipError::InvalidInput {
                field,
                value,
                reason,
                source_label: Some(source),
            },
            TipError::ConfigurationError { reason, .. } => TipError::ConfigurationError {
                reason,
                source_label: Some(source),
            },
            TipError::Calculation { reason, .. } => TipError::Calculation {
                reason,
                source_label: Some(source),
            },
            TipError::Overflow { operation, .. } => TipError::Overflow {
                operation,
                source_label: Some(source),
            },
        }
    }
}
