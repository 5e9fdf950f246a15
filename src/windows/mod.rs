//! Windows display configuration layer
//!
//! Native-layout records for the `DISPLAYCONFIG_*` structures, the single
//! FFI binding to `GetDisplayConfigBufferSizes` / `QueryDisplayConfig`, and
//! platform error code handling. All unsafe code of the crate lives here.

pub mod bindings;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use types::{
    Luid, ModeInfo, ModeKind, PathInfo, PathSourceInfo, PathTargetInfo, RawModeInfo,
    SourceMode, TargetMode, VideoSignalInfo,
};
pub use utils::{ErrorCode, WinError};

// Re-export the platform binding
pub use bindings::user32::Win32DisplayConfig;
