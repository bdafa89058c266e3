//! Configuration errors.
//!
//! The geometry itself never fails: degenerate configurations come back as
//! `None`. Errors only arise when a caller builds a configuration that cannot
//! describe a distance, which the CLI checks before running anything.

use thiserror::Error;

/// Error raised when validating an analysis configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite distance, got {value} km")]
    NonPositiveDistance { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Check that `value` is usable as a distance in kilometres.
pub(crate) fn ensure_positive_km(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveDistance { name, value })
    }
}
