//! Configuration module for the display reader
//!
//! Provides configuration loading, validation, and default settings.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, ConfigDefaults, DEFAULT_CONFIG_FILE};
pub use loader::ConfigLoader;
pub use validator::{validate_config, ConfigValidator};

// Re-export the main configuration structure
pub use loader::{Config, LoggingConfig, OutputConfig, QueryConfig};

// Configuration-related error type
pub use loader::ConfigError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_module_exports() {
        let _config = default_config();
        let _loader = ConfigLoader::new("test.toml");
        let _validator = ConfigValidator;
        assert_eq!(DEFAULT_CONFIG_FILE, "displayconfig.toml");
    }

    #[test]
    fn test_validate_config_export() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_config_error_from_io() {
        use std::io;
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_error: ConfigError = io_error.into();
        assert!(matches!(config_error, ConfigError::Io(_)));
    }
}
