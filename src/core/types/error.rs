//! Custom error types for the display reader

use crate::config::ConfigError;
use crate::windows::utils::ErrorCode;
use thiserror::Error;

/// Main error type for display configuration queries
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("{call} failed: {code}")]
    PlatformCall { call: &'static str, code: ErrorCode },

    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("Invalid query flags: {0}")]
    InvalidFlags(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for display configuration queries
pub type DisplayResult<T> = Result<T, DisplayError>;

impl DisplayError {
    /// Creates a platform call error from a raw status code
    pub fn platform_call(call: &'static str, status: u32) -> Self {
        DisplayError::PlatformCall {
            call,
            code: ErrorCode::from(status),
        }
    }

    /// Creates a buffer too small error
    pub fn buffer_too_small(expected: usize, actual: usize) -> Self {
        DisplayError::BufferTooSmall { expected, actual }
    }

    /// Returns the platform error code if this is a platform call failure
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            DisplayError::PlatformCall { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DisplayError::platform_call("GetDisplayConfigBufferSizes", 87);
        assert_eq!(
            err.to_string(),
            "GetDisplayConfigBufferSizes failed: Invalid parameter"
        );

        let err = DisplayError::platform_call("QueryDisplayConfig", 4242);
        assert_eq!(err.to_string(), "QueryDisplayConfig failed: Unknown error: 4242");
    }

    #[test]
    fn test_all_error_variants() {
        let errors: Vec<(DisplayError, &str)> = vec![
            (
                DisplayError::PlatformCall {
                    call: "QueryDisplayConfig",
                    code: ErrorCode::InsufficientBuffer,
                },
                "QueryDisplayConfig failed: Insufficient buffer",
            ),
            (
                DisplayError::BufferTooSmall {
                    expected: 4,
                    actual: 2,
                },
                "Buffer too small: expected 4, got 2",
            ),
            (
                DisplayError::InvalidFlags("no base selector".to_string()),
                "Invalid query flags: no base selector",
            ),
            (
                DisplayError::UnsupportedPlatform("linux".to_string()),
                "Unsupported platform: linux",
            ),
        ];

        for (error, expected) in errors {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_helper_methods() {
        let err = DisplayError::buffer_too_small(256, 128);
        match err {
            DisplayError::BufferTooSmall { expected, actual } => {
                assert_eq!(expected, 256);
                assert_eq!(actual, 128);
            }
            _ => panic!("Wrong error type"),
        }

        let err = DisplayError::platform_call("QueryDisplayConfig", 5);
        assert_eq!(err.code(), Some(ErrorCode::AccessDenied));
        assert_eq!(DisplayError::buffer_too_small(1, 0).code(), None);
    }

    #[test]
    fn test_from_implementations() {
        let json_err = serde_json::from_str::<String>("invalid json").unwrap_err();
        let err: DisplayError = json_err.into();
        assert!(matches!(err, DisplayError::JsonError(_)));

        let err: DisplayError = ConfigError::Invalid("bad".to_string()).into();
        assert!(matches!(err, DisplayError::Config(_)));
    }
}
