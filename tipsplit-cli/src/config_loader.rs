//! Persistent CLI configuration.
//!
//! Settings the user wants on every run live in a small TOML file under the
//! platform config directory: `~/.config/tipsplit/config.toml` on Linux,
//! the usual locations on macOS and Windows. Anything wrong with the file
//! degrades to defaults; a broken config must never block the calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Currency code used for display, e.g. "BRL" or "USD".
    pub currency: Option<String>,
    /// Number of intervals on the tip slider.
    pub tip_steps: Option<u32>,
    /// Tip percentage preselected when the calculator starts.
    pub default_tip_percent: Option<Decimal>,
    /// Turn on file logging without passing --log.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    /// Platform config directory for tipsplit.
    /// - Linux: ~/.config/tipsplit/
    /// - macOS: ~/Library/Application Support/tipsplit/
    /// - Windows: %APPDATA%\tipsplit\
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tipsplit"))
    }

    /// Full path of the config file itself.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Loads the config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            debug!("No config directory on this platform");
            return Self::default();
        };
        if !path.exists() {
            debug!("Config file {:?} not present", path);
            return Self::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read config file {:?}: {}", path, e);
                return Self::default();
            }
        };
        match toml::from_str::<CliConfig>(&content) {
            Ok(config) => {
                debug!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Config file {:?} did not parse: {}", path, e);
                Self::default()
            }
        }
    }

    /// Writes this configuration to the default location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        // The directory may not exist on a first run
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(&path, content)?;
        debug!("Wrote configuration to {:?}", path);
        Ok(())
    }

    /// Writes a starter config and returns where it landed.
    pub fn create_sample() -> Result<PathBuf, std::io::Error> {
        let sample = CliConfig {
            currency: Some("BRL".to_string()),
            tip_steps: Some(6),
            default_tip_percent: Some(Decimal::from(15)),
            enable_logging: Some(false),
        };
        sample.save()?;
        Ok(Self::config_path().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unset() {
        let config = CliConfig::default();
        assert!(config.currency.is_none());
        assert!(config.tip_steps.is_none());
        assert!(config.default_tip_percent.is_none());
        assert!(config.enable_logging.is_none());
    }

    #[test]
    fn test_keys_are_kebab_case() {
        let config = CliConfig {
            currency: Some("GBP".to_string()),
            tip_steps: Some(4),
            default_tip_percent: None,
            enable_logging: Some(true),
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("tip-steps = 4"));
        assert!(toml_str.contains("enable-logging = true"));
        assert!(toml_str.contains("GBP"));
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let config = CliConfig {
            currency: Some("EUR".to_string()),
            tip_steps: Some(10),
            default_tip_percent: Some(Decimal::from(20)),
            enable_logging: Some(true),
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.currency, config.currency);
        assert_eq!(parsed.tip_steps, config.tip_steps);
        assert_eq!(parsed.default_tip_percent, config.default_tip_percent);
        assert_eq!(parsed.enable_logging, config.enable_logging);
    }
}
