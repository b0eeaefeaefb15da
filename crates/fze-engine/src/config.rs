//! # Fee Schedule
//!
//! The global pricing constants the cost calculator needs besides the
//! catalog itself: the currency code, the fee charged per shareholder
//! beyond the first, and the visa fee used when a package does not price
//! visas.
//!
//! The schedule is read from a YAML document where every field is optional,
//! then environment overrides are applied:
//!
//! | Variable                    | Field                   |
//! |-----------------------------|-------------------------|
//! | `FZE_CURRENCY`              | `currency`              |
//! | `FZE_SHAREHOLDER_UNIT_FEE`  | `shareholder_unit_fee`  |
//! | `FZE_DEFAULT_VISA_UNIT_FEE` | `default_visa_unit_fee` |

use std::path::{Path, PathBuf};

use fze_core::{Amount, ValidationError, MINOR_UNITS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding [`FeeSchedule::currency`].
pub const ENV_CURRENCY: &str = "FZE_CURRENCY";
/// Environment variable overriding [`FeeSchedule::shareholder_unit_fee`].
pub const ENV_SHAREHOLDER_UNIT_FEE: &str = "FZE_SHAREHOLDER_UNIT_FEE";
/// Environment variable overriding [`FeeSchedule::default_visa_unit_fee`].
pub const ENV_DEFAULT_VISA_UNIT_FEE: &str = "FZE_DEFAULT_VISA_UNIT_FEE";

/// Errors loading or overriding a fee schedule.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Fee schedule file does not exist.
    #[error("fee schedule not found: {path}")]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Fee schedule file could not be read.
    #[error("failed to read fee schedule {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Fee schedule YAML is malformed.
    #[error("failed to parse fee schedule {path}: {source}")]
    YamlParse {
        /// The file being parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_yaml::Error,
    },

    /// An environment override holds an unparseable amount.
    #[error("invalid value for {var}: {source}")]
    InvalidOverride {
        /// Variable name.
        var: &'static str,
        /// Parse failure.
        source: ValidationError,
    },

    /// A fee is negative.
    #[error("fee schedule field {field} must be non-negative, got {value}")]
    NegativeFee {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: Amount,
    },

    /// The currency code is blank.
    #[error("fee schedule currency must be non-empty")]
    EmptyCurrency,
}

fn default_currency() -> String {
    "AED".to_string()
}

fn default_shareholder_unit_fee() -> Amount {
    Amount::from_minor(2_000 * MINOR_UNITS)
}

fn default_visa_unit_fee() -> Amount {
    Amount::from_minor(3_750 * MINOR_UNITS)
}

/// Global pricing constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeeSchedule {
    /// Currency code every amount is denominated in.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Fee per shareholder beyond the first.
    #[serde(default = "default_shareholder_unit_fee")]
    pub shareholder_unit_fee: Amount,
    /// Visa fee for packages without their own `per_visa_cost`.
    #[serde(default = "default_visa_unit_fee")]
    pub default_visa_unit_fee: Amount,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            shareholder_unit_fee: default_shareholder_unit_fee(),
            default_visa_unit_fee: default_visa_unit_fee(),
        }
    }
}

impl FeeSchedule {
    /// Load a schedule from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let schedule: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        schedule.validate()?;
        tracing::debug!(path = %path.display(), currency = %schedule.currency, "loaded fee schedule");
        Ok(schedule)
    }

    /// Apply overrides from a variable lookup.
    ///
    /// Unset variables leave the field untouched.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(currency) = lookup(ENV_CURRENCY) {
            self.currency = currency.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_SHAREHOLDER_UNIT_FEE) {
            self.shareholder_unit_fee = parse_override(ENV_SHAREHOLDER_UNIT_FEE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DEFAULT_VISA_UNIT_FEE) {
            self.default_visa_unit_fee = parse_override(ENV_DEFAULT_VISA_UNIT_FEE, &raw)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Resolve the effective schedule: the file when given, else the
    /// defaults, then environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::EmptyCurrency);
        }
        for (field, value) in [
            ("shareholder_unit_fee", self.shareholder_unit_fee),
            ("default_visa_unit_fee", self.default_visa_unit_fee),
        ] {
            if value.is_negative() {
                return Err(ConfigError::NegativeFee { field, value });
            }
        }
        Ok(())
    }
}

fn parse_override(var: &'static str, raw: &str) -> Result<Amount, ConfigError> {
    Amount::parse(raw).map_err(|source| ConfigError::InvalidOverride { var, source })
}
