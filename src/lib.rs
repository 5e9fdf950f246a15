//! Display configuration reader for Windows
//!
//! Queries the active display paths and modes through the two-phase
//! `GetDisplayConfigBufferSizes` / `QueryDisplayConfig` API and renders them
//! as a text or JSON report.

pub mod config;
pub mod core;
pub mod display;
pub mod windows;

// Re-export main types from core module
pub use crate::core::types::{
    decode_refresh_rate, DisplayError, DisplayResult, QueryFlags, Rational, TopologyId,
};

// Re-export the reader surface
pub use display::{
    format_report, BufferSizes, DisplayConfigApi, DisplayConfigReader, DisplayReport,
    DisplaySnapshot, FillCounts, OutputFormat, SimulatedDisplayConfig,
};
pub use crate::windows::{ModeInfo, ModeKind, PathInfo, RawModeInfo, Win32DisplayConfig};
