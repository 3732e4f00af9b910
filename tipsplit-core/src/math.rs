use rust_decimal::Decimal;

use crate::types::TipError;

/// A wrapper around [`Decimal`] that carries an optional bill label so
/// arithmetic failures can report which bill they belong to.
///
/// All operations are checked. Overflow and division by zero surface as
/// [`TipError`] instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct TipDecimal {
    value: Decimal,
    source: Option<String>,
}

impl TipDecimal {
    pub fn new(value: Decimal) -> Self {
        TipDecimal {
            value,
            source: None,
        }
    }

    /// Attaches the label of the bill this value belongs to.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn safe_add(self, other: Decimal) -> Result<Self, TipError> {
        match self.value.checked_add(other) {
            Some(value) => Ok(TipDecimal {
                value,
                source: self.source,
            }),
            None => Err(TipError::Overflow {
                operation: format!("{} + {}", self.value, other),
                source_label: self.source,
            }),
        }
    }

    pub fn safe_sub(self, other: Decimal) -> Result<Self, TipError> {
        match self.value.checked_sub(other) {
            Some(value) => Ok(TipDecimal {
                value,
                source: self.source,
            }),
            None => Err(TipError::Overflow {
                operation: format!("{} - {}", self.value, other),
                source_label: self.source,
            }),
        }
    }

    pub fn safe_mul(self, other: Decimal) -> Result<Self, TipError> {
        match self.value.checked_mul(other) {
            Some(value) => Ok(TipDecimal {
                value,
                source: self.source,
            }),
            None => Err(TipError::Overflow {
                operation: format!("{} * {}", self.value, other),
                source_label: self.source,
            }),
        }
    }

    pub fn safe_div(self, other: Decimal) -> Result<Self, TipError> {
        if other.is_zero() {
            return Err(TipError::Calculation {
                reason: "Division by zero".to_string(),
                source_label: self.source,
            });
        }
        match self.value.checked_div(other) {
            Some(value) => Ok(TipDecimal {
                value,
                source: self.source,
            }),
            None => Err(TipError::Overflow {
                operation: format!("{} / {}", self.value, other),
                source_label: self.source,
            }),
        }
    }
}

impl std::ops::Deref for TipDecimal {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_safe_operations_happy_path() {
        let value = TipDecimal::new(dec!(100))
            .safe_mul(dec!(0.1))
            .unwrap()
            .safe_add(dec!(100))
            .unwrap()
            .safe_div(dec!(2))
            .unwrap();

        assert_eq!(*value, dec!(55));
    }

    #[test]
    fn test_safe_mul_overflow() {
        let result = TipDecimal::new(Decimal::MAX).safe_mul(dec!(2));
        assert!(matches!(result, Err(TipError::Overflow { .. })));
    }

    #[test]
    fn test_safe_div_by_zero() {
        let result = TipDecimal::new(dec!(10))
            .with_source(Some("Lunch".to_string()))
            .safe_div(Decimal::ZERO);

        match result {
            Err(TipError::Calculation {
                reason,
                source_label,
            }) => {
                assert_eq!(reason, "Division by zero");
                assert_eq!(source_label, Some("Lunch".to_string()));
            }
            other => panic!("expected Calculation error, got {:?}", other),
        }
    }

    #[test]
    fn test_source_survives_chained_ops() {
        let value = TipDecimal::new(dec!(5))
            .with_source(Some("Dinner".to_string()))
            .safe_add(dec!(5))
            .unwrap();

        let err = value.safe_div(Decimal::ZERO).unwrap_err();
        assert!(err.to_string().contains("Dinner"));
    }
}
