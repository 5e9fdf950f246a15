//! Size-then-fill reader over a [`DisplayConfigApi`]

use super::{BufferSizes, DisplayConfigApi};
use crate::core::types::{DisplayError, DisplayResult, QueryFlags, TopologyId};
use crate::windows::types::{ModeInfo, PathInfo, RawModeInfo};
use serde::Serialize;
use tracing::{debug, warn};

/// Paths and decoded modes from one query, in platform order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    pub paths: Vec<PathInfo>,
    pub modes: Vec<ModeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology: Option<TopologyId>,
}

impl DisplaySnapshot {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.modes.is_empty()
    }

    /// The mode record a path's target refers to
    pub fn target_mode(&self, path: &PathInfo) -> Option<&ModeInfo> {
        path.target_info
            .mode_index()
            .and_then(|idx| self.modes.get(idx))
    }
}

/// Reads the display topology selected by a fixed flag set
///
/// Each call allocates its own buffers, so a reader may be shared freely.
#[derive(Debug)]
pub struct DisplayConfigReader<A> {
    api: A,
    flags: QueryFlags,
}

impl<A: DisplayConfigApi> DisplayConfigReader<A> {
    /// Reader using `ONLY_ACTIVE_PATHS | VIRTUAL_MODE_AWARE`
    pub fn new(api: A) -> Self {
        DisplayConfigReader {
            api,
            flags: QueryFlags::default(),
        }
    }

    /// Reader with an explicit flag set; exactly one base selector is required
    pub fn with_flags(api: A, flags: QueryFlags) -> DisplayResult<Self> {
        let flags = flags.validate()?;
        Ok(DisplayConfigReader { api, flags })
    }

    pub fn flags(&self) -> QueryFlags {
        self.flags
    }

    /// Asks the platform how many path and mode records to allocate
    pub fn get_buffer_sizes(&self) -> DisplayResult<BufferSizes> {
        let sizes = self.api.buffer_sizes(self.flags)?;
        debug!(
            path_count = sizes.paths,
            mode_info_count = sizes.modes,
            "display config buffer sizes"
        );
        Ok(sizes)
    }

    /// Allocates exactly `sizes` records, fills them and decodes the result
    ///
    /// The counts returned by the fill call are authoritative: if the topology
    /// shrank between the two calls only the confirmed records are returned.
    /// With zero counts the fill call is skipped unless the flags ask for a
    /// topology id, which only the fill call reports.
    pub fn query_paths(&self, sizes: BufferSizes) -> DisplayResult<DisplaySnapshot> {
        if sizes.is_empty() && !self.flags.wants_topology_id() {
            debug!("no display paths or modes to query");
            return Ok(DisplaySnapshot::default());
        }

        let mut paths = vec![PathInfo::default(); sizes.paths as usize];
        let mut raw_modes = vec![RawModeInfo::default(); sizes.modes as usize];

        let filled = self.api.query(self.flags, &mut paths, &mut raw_modes)?;

        let path_count = filled.paths as usize;
        let mode_count = filled.modes as usize;
        if path_count > paths.len() {
            return Err(DisplayError::buffer_too_small(path_count, paths.len()));
        }
        if mode_count > raw_modes.len() {
            return Err(DisplayError::buffer_too_small(mode_count, raw_modes.len()));
        }
        if path_count < paths.len() || mode_count < raw_modes.len() {
            warn!(
                sized_paths = sizes.paths,
                filled_paths = filled.paths,
                sized_modes = sizes.modes,
                filled_modes = filled.modes,
                "display topology shrank between sizing and fill"
            );
        }

        paths.truncate(path_count);
        let modes = raw_modes[..mode_count].iter().map(ModeInfo::decode).collect();

        Ok(DisplaySnapshot {
            paths,
            modes,
            topology: filled.topology,
        })
    }

    /// Sizing call followed by the fill call; fails fast on either error
    pub fn read(&self) -> DisplayResult<DisplaySnapshot> {
        let sizes = self.get_buffer_sizes()?;
        self.query_paths(sizes)
    }
}
