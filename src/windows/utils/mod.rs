//! Windows utility functions

pub mod error_codes;

// Re-export commonly used utilities
pub use error_codes::{ErrorCode, WinError};
