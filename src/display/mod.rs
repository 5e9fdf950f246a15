//! Display configuration reader
//!
//! The reader talks to the platform only through [`DisplayConfigApi`]: a
//! sizing call followed by a fill call into caller-owned buffers. The live
//! implementation is [`crate::windows::Win32DisplayConfig`]; tests drive the
//! same reader through [`simulated::SimulatedDisplayConfig`].

pub mod reader;
pub mod report;
pub mod simulated;

use crate::core::types::{DisplayResult, QueryFlags, TopologyId};
use crate::windows::types::{PathInfo, RawModeInfo};

pub use reader::{DisplayConfigReader, DisplaySnapshot};
pub use report::{format_report, DisplayReport, OutputFormat};
pub use simulated::SimulatedDisplayConfig;

/// Record counts reported by the sizing call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferSizes {
    pub paths: u32,
    pub modes: u32,
}

impl BufferSizes {
    pub fn is_empty(&self) -> bool {
        self.paths == 0 && self.modes == 0
    }
}

/// Record counts actually written by the fill call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillCounts {
    pub paths: u32,
    pub modes: u32,
    /// Present only when the query asked for the current database topology
    pub topology: Option<TopologyId>,
}

/// The two-phase display configuration query
pub trait DisplayConfigApi {
    /// Number of path and mode records the fill call needs room for
    fn buffer_sizes(&self, flags: QueryFlags) -> DisplayResult<BufferSizes>;

    /// Fills `paths` and `modes`, returning how many records were written
    fn query(
        &self,
        flags: QueryFlags,
        paths: &mut [PathInfo],
        modes: &mut [RawModeInfo],
    ) -> DisplayResult<FillCounts>;
}

impl<T: DisplayConfigApi + ?Sized> DisplayConfigApi for &T {
    fn buffer_sizes(&self, flags: QueryFlags) -> DisplayResult<BufferSizes> {
        (**self).buffer_sizes(flags)
    }

    fn query(
        &self,
        flags: QueryFlags,
        paths: &mut [PathInfo],
        modes: &mut [RawModeInfo],
    ) -> DisplayResult<FillCounts> {
        (**self).query(flags, paths, modes)
    }
}
