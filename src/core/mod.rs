//! Core module containing the fundamental types of the display reader
//!
//! This module provides the building blocks shared by the platform binding,
//! the reader and the report: query flags, refresh-rate rationals, topology
//! identifiers and error types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    decode_refresh_rate, DisplayError, DisplayResult, QueryFlags, Rational, TopologyId,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
