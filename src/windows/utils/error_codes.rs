//! Windows error code handling utilities

use crate::core::types::DisplayError;
use std::fmt;

/// Status codes returned by the display configuration functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success,
    AccessDenied,
    GenFailure,
    NotSupported,
    InvalidParameter,
    InsufficientBuffer,
    Unknown(u32),
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            0 => ErrorCode::Success,
            5 => ErrorCode::AccessDenied,
            31 => ErrorCode::GenFailure,
            50 => ErrorCode::NotSupported,
            87 => ErrorCode::InvalidParameter,
            122 => ErrorCode::InsufficientBuffer,
            _ => ErrorCode::Unknown(code),
        }
    }
}

impl ErrorCode {
    /// Raw Win32 status value
    pub fn raw(self) -> u32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::AccessDenied => 5,
            ErrorCode::GenFailure => 31,
            ErrorCode::NotSupported => 50,
            ErrorCode::InvalidParameter => 87,
            ErrorCode::InsufficientBuffer => 122,
            ErrorCode::Unknown(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        self == ErrorCode::Success
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Success => write!(f, "Success"),
            ErrorCode::AccessDenied => write!(f, "Access denied"),
            ErrorCode::GenFailure => write!(f, "General failure"),
            ErrorCode::NotSupported => write!(f, "Not supported"),
            ErrorCode::InvalidParameter => write!(f, "Invalid parameter"),
            ErrorCode::InsufficientBuffer => write!(f, "Insufficient buffer"),
            ErrorCode::Unknown(code) => write!(f, "Unknown error: {}", code),
        }
    }
}

/// Status code of a named platform call
#[derive(Debug, Clone, Copy)]
pub struct WinError {
    code: ErrorCode,
    call: &'static str,
}

impl WinError {
    /// Create with specific error code
    pub fn with_code(code: ErrorCode, call: &'static str) -> Self {
        WinError { code, call }
    }

    /// Create from a raw status value
    pub fn from_status(status: u32, call: &'static str) -> Self {
        WinError::with_code(ErrorCode::from(status), call)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Convert to DisplayError
    pub fn to_display_error(self) -> DisplayError {
        DisplayError::PlatformCall {
            call: self.call,
            code: self.code,
        }
    }
}

/// Maps a raw status to `Ok(())` or a platform call error
pub fn check_status(status: u32, call: &'static str) -> Result<(), DisplayError> {
    let err = WinError::from_status(status, call);
    if err.code().is_success() {
        Ok(())
    } else {
        Err(err.to_display_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_conversion() {
        assert_eq!(ErrorCode::from(0), ErrorCode::Success);
        assert_eq!(ErrorCode::from(87), ErrorCode::InvalidParameter);
        assert_eq!(ErrorCode::from(122), ErrorCode::InsufficientBuffer);
        assert_eq!(ErrorCode::from(999), ErrorCode::Unknown(999));

        for raw in [0, 5, 31, 50, 87, 122, 999] {
            assert_eq!(ErrorCode::from(raw).raw(), raw);
        }
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "Success");
        assert_eq!(format!("{}", ErrorCode::NotSupported), "Not supported");
        assert_eq!(format!("{}", ErrorCode::Unknown(123)), "Unknown error: 123");
    }

    #[test]
    fn test_win_error() {
        let err = WinError::with_code(ErrorCode::InvalidParameter, "QueryDisplayConfig");
        let display_err = err.to_display_error();
        assert!(display_err.to_string().contains("QueryDisplayConfig"));
        assert!(display_err.to_string().contains("Invalid parameter"));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(0, "GetDisplayConfigBufferSizes").is_ok());
        let err = check_status(31, "GetDisplayConfigBufferSizes").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::GenFailure));
    }
}
