use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::inputs::IntoTipDecimal;
use crate::types::TipError;

/// A gratuity rate, stored as a fraction in the closed range [0, 1].
///
/// A rate of `0.15` means a 15% tip. Construction validates the range, so
/// any `TipRate` in circulation is safe to multiply a bill by.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipRate(Decimal);

impl TipRate {
    /// No gratuity at all.
    pub const ZERO: TipRate = TipRate(Decimal::ZERO);

    /// Creates a rate from a fraction, e.g. `0.15` for 15%.
    pub fn new(fraction: impl IntoTipDecimal) -> Result<Self, TipError> {
        let fraction = fraction.into_tip_decimal()?;
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(TipError::InvalidInput {
                field: "tip_rate".to_string(),
                value: fraction.to_string(),
                reason: "Tip rate must be between 0 and 1".to_string(),
                source_label: None,
            });
        }
        Ok(TipRate(fraction))
    }

    /// Creates a rate from a percentage, e.g. `15` for 15%.
    pub fn from_percent(percent: impl IntoTipDecimal) -> Result<Self, TipError> {
        let percent = percent.into_tip_decimal()?;
        TipRate::new(percent / dec!(100))
    }

    /// Maps a discrete slider position onto a rate.
    ///
    /// A slider with `steps` intervals has `steps + 1` positions; position 0
    /// is 0% and position `steps` is 100%. Positions past the end clamp to
    /// the last one.
    pub fn from_position(position: u32, steps: u32) -> Self {
        if steps == 0 {
            return TipRate::ZERO;
        }
        let position = position.min(steps);
        TipRate(Decimal::from(position) / Decimal::from(steps))
    }

    /// The rate as a fraction in [0, 1].
    pub fn fraction(self) -> Decimal {
        self.0
    }

    /// The rate as a percentage in [0, 100].
    pub fn percent(self) -> Decimal {
        self.0 * dec!(100)
    }

    /// Returns the rate formatted as a percentage with 1 decimal place,
    /// e.g. `"15.0%"`.
    pub fn percent_label(self) -> String {
        let rounded = self
            .percent()
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.1}%", rounded)
    }

    /// The slider position whose rate is closest to this one.
    pub fn nearest_position(self, steps: u32) -> u32 {
        if steps == 0 {
            return 0;
        }
        (self.0 * Decimal::from(steps))
            .round()
            .to_u32()
            .unwrap_or(0)
            .min(steps)
    }
}

impl std::fmt::Display for TipRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.percent_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(TipRate::new(dec!(0)).is_ok());
        assert!(TipRate::new(dec!(1)).is_ok());
        assert!(TipRate::new(dec!(0.15)).is_ok());
        assert!(TipRate::new(dec!(1.5)).is_err());
        assert!(TipRate::new(dec!(-0.1)).is_err());
    }

    #[test]
    fn test_from_percent() {
        let rate = TipRate::from_percent(15).unwrap();
        assert_eq!(rate.fraction(), dec!(0.15));
        assert_eq!(rate.percent_label(), "15.0%");
        assert!(TipRate::from_percent(150).is_err());
    }

    #[test]
    fn test_from_position_endpoints() {
        assert_eq!(TipRate::from_position(0, 6), TipRate::ZERO);
        assert_eq!(TipRate::from_position(6, 6).fraction(), Decimal::ONE);
        // Past the end clamps to 100%
        assert_eq!(TipRate::from_position(7, 6).fraction(), Decimal::ONE);
        assert_eq!(TipRate::from_position(3, 0), TipRate::ZERO);
    }

    #[test]
    fn test_position_label_rounding() {
        // 1/6 = 0.1666... shown as 16.7%
        assert_eq!(TipRate::from_position(1, 6).percent_label(), "16.7%");
        assert_eq!(TipRate::from_position(3, 6).percent_label(), "50.0%");
    }

    #[test]
    fn test_nearest_position_round_trips() {
        for position in 0..=6 {
            let rate = TipRate::from_position(position, 6);
            assert_eq!(rate.nearest_position(6), position);
        }
        assert_eq!(TipRate::from_percent(20).unwrap().nearest_position(6), 1);
        assert_eq!(TipRate::ZERO.nearest_position(0), 0);
    }
}
