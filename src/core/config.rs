//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Lowest accepted age
pub const MIN_AGE: u32 = 1;
/// Highest accepted age
pub const MAX_AGE: u32 = 120;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("home-energy-calc").join("config.toml"))
    }

    /// Load configuration from a file, writing the defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        config.normalize();
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Pull out-of-range values back into their valid ranges
    fn normalize(&mut self) {
        let age = self.form.default_age.clamp(MIN_AGE, MAX_AGE);
        if age != self.form.default_age {
            log::warn!(
                "default_age {} out of range, using {}",
                self.form.default_age,
                age
            );
            self.form.default_age = age;
        }

        let share = self.pricing.peak_offpeak.offpeak_share;
        if !(0.0..=1.0).contains(&share) {
            log::warn!("offpeak_share {} out of range, clamping", share);
            self.pricing.peak_offpeak.offpeak_share = share.clamp(0.0, 1.0);
        }
    }
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "fr"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Initial form values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Age pre-filled in a fresh form
    #[serde(default = "default_age")]
    pub default_age: u32,
}

fn default_age() -> u32 { 25 }

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_age: default_age(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Show cost estimates next to consumption
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Pricing mode: "simple", "peak_offpeak", "seasonal"
    #[serde(default = "default_pricing_mode")]
    pub mode: String,
    /// Currency code (INR, EUR, USD, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Simple mode settings
    #[serde(default)]
    pub simple: SimplePricing,
    /// Peak/off-peak settings
    #[serde(default)]
    pub peak_offpeak: PeakOffpeakPricing,
    /// Seasonal settings
    #[serde(default)]
    pub seasonal: SeasonalPricing,
}

fn default_true() -> bool { true }
fn default_pricing_mode() -> String { "simple".to_string() }
fn default_currency() -> String { "INR".to_string() }
fn default_currency_symbol() -> String { "\u{20B9}".to_string() } // Rupee sign

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: default_pricing_mode(),
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            simple: SimplePricing::default(),
            peak_offpeak: PeakOffpeakPricing::default(),
            seasonal: SeasonalPricing::default(),
        }
    }
}

/// Simple flat rate pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePricing {
    /// Rate per kWh
    #[serde(default = "default_rate")]
    pub rate_per_kwh: f64,
}

fn default_rate() -> f64 { 7.5 }

impl Default for SimplePricing {
    fn default() -> Self {
        Self {
            rate_per_kwh: default_rate(),
        }
    }
}

/// Peak/off-peak pricing, blended by the share of use falling off-peak
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakOffpeakPricing {
    /// Peak rate per kWh
    #[serde(default = "default_peak_rate")]
    pub peak_rate: f64,
    /// Off-peak rate per kWh
    #[serde(default = "default_offpeak_rate")]
    pub offpeak_rate: f64,
    /// Fraction of consumption billed off-peak (0.0 - 1.0)
    #[serde(default = "default_offpeak_share")]
    pub offpeak_share: f64,
}

fn default_peak_rate() -> f64 { 8.5 }
fn default_offpeak_rate() -> f64 { 6.0 }
fn default_offpeak_share() -> f64 { 0.3 }

impl Default for PeakOffpeakPricing {
    fn default() -> Self {
        Self {
            peak_rate: default_peak_rate(),
            offpeak_rate: default_offpeak_rate(),
            offpeak_share: default_offpeak_share(),
        }
    }
}

/// Seasonal pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPricing {
    /// Summer rate per kWh
    #[serde(default = "default_summer_rate")]
    pub summer_rate: f64,
    /// Winter rate per kWh
    #[serde(default = "default_winter_rate")]
    pub winter_rate: f64,
    /// Months considered as winter (1-12)
    #[serde(default = "default_winter_months")]
    pub winter_months: Vec<u32>,
}

fn default_summer_rate() -> f64 { 8.0 }
fn default_winter_rate() -> f64 { 7.0 }
fn default_winter_months() -> Vec<u32> { vec![11, 12, 1, 2] }

impl Default for SeasonalPricing {
    fn default() -> Self {
        Self {
            summer_rate: default_summer_rate(),
            winter_rate: default_winter_rate(),
            winter_months: default_winter_months(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.language = "fr".into();
        config.pricing.mode = "seasonal".into();
        config.form.default_age = 40;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pricing]\nmode = \"peak_offpeak\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.pricing.mode, "peak_offpeak");
        assert_eq!(config.pricing.currency, "INR");
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.form.default_age, 25);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[form]\ndefault_age = 500\n[pricing.peak_offpeak]\noffpeak_share = 1.5\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.form.default_age, MAX_AGE);
        assert_eq!(config.pricing.peak_offpeak.offpeak_share, 1.0);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nlanguage = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
