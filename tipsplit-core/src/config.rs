use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::str::FromStr;

use crate::currency::Currency;
use crate::types::TipError;

/// Presentation settings for a calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipConfig {
    /// Currency used when formatting amounts for display.
    pub currency: Currency,
    /// Number of intervals on the tip slider. A slider with 6 intervals
    /// has 7 positions from 0% to 100%.
    pub rate_steps: u32,
}

impl Default for TipConfig {
    fn default() -> Self {
        TipConfig {
            currency: Currency::default(),
            rate_steps: 6,
        }
    }
}

// Ensure the caller can easily create a config
impl FromStr for TipConfig {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: TipConfig = serde_json::from_str(s).map_err(|e| TipError::ConfigurationError {
            reason: format!("Failed to parse config JSON: {}", e),
            source_label: None,
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl TipConfig {
    pub fn new(currency: Currency, rate_steps: u32) -> Result<Self, TipError> {
        let config = TipConfig {
            currency,
            rate_steps,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for logical consistency.
    pub fn validate(&self) -> Result<(), TipError> {
        if self.rate_steps == 0 {
            return Err(TipError::ConfigurationError {
                reason: "Tip slider must have at least one interval".to_string(),
                source_label: None,
            });
        }
        Ok(())
    }

    /// Attempts to load configuration from environment variables.
    ///
    /// `TIPSPLIT_CURRENCY` and `TIPSPLIT_TIP_STEPS` override the defaults
    /// when set. A variable that is set but unparseable is an error.
    pub fn from_env() -> Result<Self, TipError> {
        let mut config = TipConfig::default();

        if let Ok(currency_str) = env::var("TIPSPLIT_CURRENCY") {
            config.currency =
                currency_str
                    .parse::<Currency>()
                    .map_err(|_| TipError::ConfigurationError {
                        reason: format!("Unknown currency code: {}", currency_str),
                        source_label: None,
                    })?;
        }

        if let Ok(steps_str) = env::var("TIPSPLIT_TIP_STEPS") {
            config.rate_steps =
                steps_str
                    .parse::<u32>()
                    .map_err(|e| TipError::ConfigurationError {
                        reason: format!("Invalid slider step count: {}", e),
                        source_label: None,
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Attempts to load configuration from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, TipError> {
        let content = fs::read_to_string(path).map_err(|e| TipError::ConfigurationError {
            reason: format!("Failed to read config file: {}", e),
            source_label: None,
        })?;

        content.parse()
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_rate_steps(mut self, rate_steps: u32) -> Result<Self, TipError> {
        self.rate_steps = rate_steps;
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TipConfig::default();
        assert_eq!(config.currency, Currency::Brl);
        assert_eq!(config.rate_steps, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(matches!(
            TipConfig::new(Currency::Usd, 0),
            Err(TipError::ConfigurationError { .. })
        ));
        assert!(TipConfig::default().with_rate_steps(0).is_err());
    }

    #[test]
    fn test_from_json_str() {
        let config: TipConfig = r#"{"currency":"USD","rate_steps":4}"#.parse().unwrap();
        assert_eq!(config.currency, Currency::Usd);
        assert_eq!(config.rate_steps, 4);

        assert!("not json".parse::<TipConfig>().is_err());
        assert!(r#"{"currency":"USD","rate_steps":0}"#.parse::<TipConfig>().is_err());
    }
}
