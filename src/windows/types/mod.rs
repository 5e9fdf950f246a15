//! Native-layout display configuration records

pub mod luid;
pub mod mode_info;
pub mod path_info;

// Re-export commonly used types
pub use luid::Luid;
pub use mode_info::{
    DesktopImageInfo, ModeInfo, ModeInfoPayload, ModeKind, PointL, RawModeInfo, RectL, Region2D,
    SourceMode, TargetMode, VideoSignalInfo,
};
pub use path_info::{PathInfo, PathSourceInfo, PathTargetInfo};
