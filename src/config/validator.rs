//! Configuration validator for the display reader
//!
//! Validates configuration values before any platform call is made.

use super::loader::{Config, ConfigError, LoggingConfig, QueryConfig};
use crate::core::types::QueryFlags;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_query(&config.query)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    /// Validates the query flag names and combination
    fn validate_query(query: &QueryConfig) -> Result<(), ConfigError> {
        if query.flags.is_empty() {
            return Err(ConfigError::Invalid(
                "Query flags cannot be empty".to_string(),
            ));
        }

        QueryFlags::from_names(&query.flags)
            .and_then(QueryFlags::validate)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(())
    }

    /// Validates logging configuration
    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}
