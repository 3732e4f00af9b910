use crate::types::TipError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Trait for converting various types into `Decimal` for bill calculations.
///
/// This trait allows users to pass `i32`, `f64`, `&str`, etc. directly into
/// constructors without needing to wrap them in `dec!()` or `Decimal::from()`.
pub trait IntoTipDecimal {
    fn into_tip_decimal(self) -> Result<Decimal, TipError>;
}

// Implement for Decimal (passthrough)
impl IntoTipDecimal for Decimal {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        Ok(self)
    }
}

// Implement for Integers
macro_rules! impl_into_tip_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoTipDecimal for $t {
                fn into_tip_decimal(self) -> Result<Decimal, TipError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_tip_decimal_int!(i32, u32, i64, u64, isize, usize);

// Implement for Floats
macro_rules! impl_into_tip_decimal_float {
    ($($t:ty),*) => {
        $(
            impl IntoTipDecimal for $t {
                fn into_tip_decimal(self) -> Result<Decimal, TipError> {
                    Decimal::from_f64_retain(self as f64)
                        .ok_or_else(|| TipError::InvalidInput {
                            field: "amount".to_string(),
                            value: format!("{}", self),
                            reason: "Not a representable decimal value".to_string(),
                            source_label: None,
                        })
                }
            }
        )*
    };
}

impl_into_tip_decimal_float!(f32, f64);

// Implement for Strings
impl IntoTipDecimal for &str {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        Decimal::from_str(self).map_err(|e| TipError::InvalidInput {
            field: "amount".to_string(),
            value: self.to_string(),
            reason: format!("Invalid decimal format: {}", e),
            source_label: None,
        })
    }
}

impl IntoTipDecimal for String {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        self.as_str().into_tip_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_integer_conversion() {
        assert_eq!(42.into_tip_decimal().unwrap(), dec!(42));
        assert_eq!(7u32.into_tip_decimal().unwrap(), dec!(7));
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(0.25f64.into_tip_decimal().unwrap(), dec!(0.25));
        assert!(f64::NAN.into_tip_decimal().is_err());
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!("120.50".into_tip_decimal().unwrap(), dec!(120.50));
        assert_eq!("0".to_string().into_tip_decimal().unwrap(), Decimal::ZERO);

        let err = "abc".into_tip_decimal().unwrap_err();
        assert!(matches!(err, TipError::InvalidInput { .. }));
    }
}
