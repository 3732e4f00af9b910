use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::TipError;

/// Number of people sharing a bill. Always at least one.
///
/// The increment and decrement operations never leave the valid range, so
/// a `SplitCount` held by application state stays usable without re-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitCount(u32);

impl SplitCount {
    /// The smallest valid split: one person paying the whole bill.
    pub const MIN: SplitCount = SplitCount(1);

    pub fn new(count: u32) -> Result<Self, TipError> {
        if count == 0 {
            return Err(TipError::InvalidInput {
                field: "split_count".to_string(),
                value: "0".to_string(),
                reason: "A bill must be split between at least one person".to_string(),
                source_label: None,
            });
        }
        Ok(SplitCount(count))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// One more person joins the bill.
    pub fn increment(self) -> Self {
        SplitCount(self.0.saturating_add(1))
    }

    /// One person leaves the bill. Stays at the floor of one.
    pub fn decrement(self) -> Self {
        if self.0 > 1 {
            SplitCount(self.0 - 1)
        } else {
            self
        }
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        SplitCount::MIN
    }
}

impl std::fmt::Display for SplitCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
