//! Core type definitions for the display reader
//!
//! This module contains the platform-independent types used throughout the
//! crate: the query flag bitmask, rational frequencies, the current topology
//! identifier and the error type.

mod error;
mod flags;
mod rational;
mod topology;

// Re-export all public types
pub use error::{DisplayError, DisplayResult};
pub use flags::QueryFlags;
pub use rational::{decode_refresh_rate, Rational};
pub use topology::TopologyId;

