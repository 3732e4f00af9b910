//! Bill splitting with gratuity.
//!
//! The canonical formula is `(bill * (1 + rate)) / split`: the tip is taken
//! on the whole bill first, then the grand total is shared evenly. Both the
//! fluent [`TipCalculator`] and the standalone [`compute_total_per_person`]
//! apply this same formula.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inputs::IntoTipDecimal;
use crate::rate::TipRate;
use crate::split::SplitCount;
use crate::types::{TipBreakdown, TipError};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct TipCalculator {
    pub bill_amount: Decimal,
    pub tip_rate: TipRate,
    pub split_count: SplitCount,
    pub label: Option<String>,
}

impl TipCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(mut self, amount: impl IntoTipDecimal) -> Self {
        if let Ok(a) = amount.into_tip_decimal() {
            self.bill_amount = a;
        }
        self
    }

    pub fn rate(mut self, rate: TipRate) -> Self {
        self.tip_rate = rate;
        self
    }

    pub fn split(mut self, split: SplitCount) -> Self {
        self.split_count = split;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn calculate(&self) -> Result<TipBreakdown, TipError> {
        if self.bill_amount < Decimal::ZERO {
            return Err(TipError::InvalidInput {
                field: "bill_amount".to_string(),
                value: self.bill_amount.to_string(),
                reason: "Bill amount must be non-negative".to_string(),
                source_label: self.label.clone(),
            });
        }

        let breakdown = TipBreakdown::new(self.bill_amount, self.tip_rate, self.split_count)
            .map_err(|e| e.with_source(self.label.clone().unwrap_or_default()))?;

        Ok(match &self.label {
            Some(label) => breakdown.with_label(label.clone()),
            None => breakdown,
        })
    }
}

/// Computes each person's share of a bill after gratuity.
///
/// Returns `(bill * (1 + rate)) / split` without building a full breakdown.
pub fn compute_total_per_person(
    bill_amount: impl IntoTipDecimal,
    split_count: SplitCount,
    tip_rate: TipRate,
) -> Result<Decimal, TipError> {
    let bill = bill_amount.into_tip_decimal()?;
    if bill < Decimal::ZERO {
        return Err(TipError::InvalidInput {
            field: "bill_amount".to_string(),
            value: bill.to_string(),
            reason: "Bill amount must be non-negative".to_string(),
            source_label: None,
        });
    }
    let breakdown = TipBreakdown::new(bill, tip_rate, split_count)?;
    Ok(breakdown.total_per_person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculator_canonical_split() {
        // 100 with 10% tip is 110, halved is 55.
        let breakdown = TipCalculator::new()
            .bill(dec!(100))
            .rate(TipRate::new(dec!(0.1)).unwrap())
            .split(SplitCount::new(2).unwrap())
            .calculate()
            .unwrap();

        assert_eq!(breakdown.total_per_person, dec!(55));
    }

    #[test]
    fn test_calculator_rejects_negative_bill() {
        let result = TipCalculator::new()
            .bill(dec!(-10))
            .label("Bad Bill")
            .calculate();

        match result {
            Err(TipError::InvalidInput { source_label, .. }) => {
                assert_eq!(source_label, Some("Bad Bill".to_string()));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_calculator_ignores_malformed_fluent_input() {
        // A bad string leaves the default of zero in place.
        let breakdown = TipCalculator::new().bill("not a number").calculate().unwrap();
        assert_eq!(breakdown.bill_amount, Decimal::ZERO);
        assert_eq!(breakdown.total_per_person, Decimal::ZERO);
    }

    #[test]
    fn test_compute_total_per_person() {
        let per_person = compute_total_per_person(
            dec!(100),
            SplitCount::new(2).unwrap(),
            TipRate::new(dec!(0.1)).unwrap(),
        )
        .unwrap();
        assert_eq!(per_person, dec!(55));

        let solo = compute_total_per_person(dec!(80), SplitCount::MIN, TipRate::ZERO).unwrap();
        assert_eq!(solo, dec!(80));
    }
}
