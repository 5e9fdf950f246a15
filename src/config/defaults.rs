//! Default configuration values for the display reader

use crate::display::OutputFormat;
use serde::{Deserialize, Serialize};

/// File read when no path is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "displayconfig.toml";

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub query: QueryDefaults,
    pub output: OutputDefaults,
    pub logging: LoggingDefaults,
}

/// Default query configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryDefaults {
    pub flags: Vec<String>,
}

/// Default output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDefaults {
    pub format: OutputFormat,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
    pub with_target: bool,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        query: QueryDefaults {
            flags: vec![
                "only_active_paths".to_string(),
                "virtual_mode_aware".to_string(),
            ],
        },
        output: OutputDefaults {
            format: OutputFormat::Text,
        },
        logging: LoggingDefaults {
            level: "info".to_string(),
            with_target: false,
        },
    }
}
