//! # CLI Configuration
//!
//! Settings the commands fall back to when a flag is not given.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied by commands)         │
//! │     --rate 12 --inclusive --country 1                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     RUPIAH_TAX_RATE=12                                                 │
//! │     RUPIAH_TAX_MODE=inclusive                                          │
//! │     RUPIAH_COUNTRY_CODE=62                                             │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/rupiah/rupiah.toml (Linux)                               │
//! │     ~/Library/Application Support/id.rupiah.rupiah/rupiah.toml (macOS) │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     PPN 11%, inclusive, country code 62                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # rupiah.toml
//! [tax]
//! rate = 11.0          # percent
//! mode = "exclusive"   # exclusive | inclusive
//!
//! [phone]
//! country_code = "62"
//! ```

use std::path::{Path, PathBuf};

use rupiah_core::validation::{validate_country_code, validate_tax_rate};
use rupiah_core::{TaxMode, TaxRate, DEFAULT_COUNTRY_CODE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CliResult, ConfigError};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "rupiah.toml";

// =============================================================================
// Tax Settings
// =============================================================================

/// PPN defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSettings {
    /// Rate in percent.
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Whether amounts already include tax.
    #[serde(default)]
    pub mode: TaxMode,
}

fn default_rate() -> f64 {
    TaxRate::PPN.percentage()
}

impl Default for TaxSettings {
    fn default() -> Self {
        TaxSettings {
            rate: default_rate(),
            mode: TaxMode::default(),
        }
    }
}

impl TaxSettings {
    /// Returns the configured rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_percentage(self.rate)
    }
}

// =============================================================================
// Phone Settings
// =============================================================================

/// Phone normalization defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneSettings {
    /// Country calling code, digits only.
    #[serde(default = "default_country_code")]
    pub country_code: String,
}

fn default_country_code() -> String {
    DEFAULT_COUNTRY_CODE.to_string()
}

impl Default for PhoneSettings {
    fn default() -> Self {
        PhoneSettings {
            country_code: default_country_code(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RupiahConfig {
    #[serde(default)]
    pub tax: TaxSettings,

    #[serde(default)]
    pub phone: PhoneSettings,
}

impl RupiahConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (rupiah.toml)
    /// 3. Environment variables
    ///
    /// A missing file is only skipped for the platform default path; an
    /// explicit `config_path` that does not exist is `ConfigError::NotFound`.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path }.into());
                }
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            }
            None => {
                if let Some(path) = Self::default_config_path().filter(|p| p.exists()) {
                    info!(?path, "Loading config from file");
                    config = Self::from_file(&path)?;
                } else {
                    debug!("No config file found, using defaults");
                }
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying env overrides.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file and returns the path written.
    pub fn save(&self, config_path: Option<PathBuf>) -> CliResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml()?)?;

        info!(?path, "Config saved");
        Ok(path)
    }

    /// Renders the config as pretty TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tax_rate(self.tax.tax_rate())?;
        validate_country_code(&self.phone.country_code)?;
        Ok(())
    }

    /// Applies `RUPIAH_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rate) = lookup("RUPIAH_TAX_RATE") {
            match rate.trim().parse::<f64>() {
                Ok(r) => {
                    debug!(rate = r, "Overriding tax rate from environment");
                    self.tax.rate = r;
                }
                Err(_) => warn!(rate = %rate, "Invalid tax rate in environment"),
            }
        }

        if let Some(mode) = lookup("RUPIAH_TAX_MODE") {
            match mode.parse::<TaxMode>() {
                Ok(m) => {
                    debug!(mode = %m, "Overriding tax mode from environment");
                    self.tax.mode = m;
                }
                Err(_) => warn!(mode = %mode, "Unknown tax mode in environment"),
            }
        }

        if let Some(code) = lookup("RUPIAH_COUNTRY_CODE") {
            debug!(country_code = %code, "Overriding country code from environment");
            self.phone.country_code = code.trim().trim_start_matches('+').to_string();
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("id", "rupiah", "rupiah")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
