//! # CLI Error Types
//!
//! Errors surfaced by the command-line front end.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │     Input       │  │      Output             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Config(..)     │  │  InvalidArgument│  │  Json(..)               │ │
//! │  │  Io(..)         │  │  Core(..)       │  │  TomlSerialize(..)      │ │
//! │  │  TomlParse(..)  │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use rupiah_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// No path to save the config to.
    #[error("No config path available")]
    NoPath,
}

/// Top-level CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A command argument could not be understood.
    #[error("Invalid argument '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// `2` for bad input or config (the user can fix it), `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_)
            | CliError::InvalidArgument { .. }
            | CliError::Core(_)
            | CliError::TomlParse(_) => 2,
            CliError::Io(_) | CliError::TomlSerialize(_) | CliError::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = CliError::InvalidArgument {
            value: "Laptop".to_string(),
            reason: "expected NAME=PRICE".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid argument 'Laptop': expected NAME=PRICE");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: CliError = ConfigError::Invalid(ValidationError::Required {
            field: "country_code".to_string(),
        })
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: country_code is required"
        );
    }
}
