//! In-memory display configuration platform
//!
//! Behaves like the live API: the sizing call reports the record counts, the
//! fill call rejects buffers that are too small and writes the records in
//! order. Counts and failures can be overridden to reproduce topology changes
//! between the two calls.

use super::{BufferSizes, DisplayConfigApi, FillCounts};
use crate::core::types::{DisplayError, DisplayResult, QueryFlags, TopologyId};
use crate::windows::bindings::user32::{GET_BUFFER_SIZES, QUERY_DISPLAY_CONFIG};
use crate::windows::types::{PathInfo, RawModeInfo};
use crate::windows::ErrorCode;
use std::cell::Cell;

#[derive(Debug)]
pub struct SimulatedDisplayConfig {
    paths: Vec<PathInfo>,
    modes: Vec<RawModeInfo>,
    topology: TopologyId,
    sizes_override: Option<BufferSizes>,
    fill_override: Option<(u32, u32)>,
    sizing_error: Option<ErrorCode>,
    query_error: Option<ErrorCode>,
    sizing_calls: Cell<usize>,
    fill_calls: Cell<usize>,
    last_capacity: Cell<Option<BufferSizes>>,
}

impl Default for SimulatedDisplayConfig {
    fn default() -> Self {
        SimulatedDisplayConfig {
            paths: Vec::new(),
            modes: Vec::new(),
            topology: TopologyId::Extend,
            sizes_override: None,
            fill_override: None,
            sizing_error: None,
            query_error: None,
            sizing_calls: Cell::new(0),
            fill_calls: Cell::new(0),
            last_capacity: Cell::new(None),
        }
    }
}

impl SimulatedDisplayConfig {
    /// Empty topology: no paths, no modes
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathInfo>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_modes(mut self, modes: Vec<RawModeInfo>) -> Self {
        self.modes = modes;
        self
    }

    pub fn with_topology(mut self, topology: TopologyId) -> Self {
        self.topology = topology;
        self
    }

    /// Sizing call reports these counts instead of the record counts
    pub fn report_sizes(mut self, paths: u32, modes: u32) -> Self {
        self.sizes_override = Some(BufferSizes { paths, modes });
        self
    }

    /// Fill call reports these counts instead of the records written
    pub fn report_fill_counts(mut self, paths: u32, modes: u32) -> Self {
        self.fill_override = Some((paths, modes));
        self
    }

    pub fn fail_sizing(mut self, code: ErrorCode) -> Self {
        self.sizing_error = Some(code);
        self
    }

    pub fn fail_query(mut self, code: ErrorCode) -> Self {
        self.query_error = Some(code);
        self
    }

    pub fn sizing_calls(&self) -> usize {
        self.sizing_calls.get()
    }

    pub fn fill_calls(&self) -> usize {
        self.fill_calls.get()
    }

    /// Buffer lengths passed to the most recent fill call
    pub fn last_capacity(&self) -> Option<BufferSizes> {
        self.last_capacity.get()
    }
}

impl DisplayConfigApi for SimulatedDisplayConfig {
    fn buffer_sizes(&self, flags: QueryFlags) -> DisplayResult<BufferSizes> {
        self.sizing_calls.set(self.sizing_calls.get() + 1);

        if let Some(code) = self.sizing_error {
            return Err(DisplayError::PlatformCall {
                call: GET_BUFFER_SIZES,
                code,
            });
        }
        if flags.validate().is_err() {
            return Err(DisplayError::PlatformCall {
                call: GET_BUFFER_SIZES,
                code: ErrorCode::InvalidParameter,
            });
        }

        Ok(self.sizes_override.unwrap_or(BufferSizes {
            paths: self.paths.len() as u32,
            modes: self.modes.len() as u32,
        }))
    }

    fn query(
        &self,
        flags: QueryFlags,
        paths: &mut [PathInfo],
        modes: &mut [RawModeInfo],
    ) -> DisplayResult<FillCounts> {
        self.fill_calls.set(self.fill_calls.get() + 1);
        self.last_capacity.set(Some(BufferSizes {
            paths: paths.len() as u32,
            modes: modes.len() as u32,
        }));

        if let Some(code) = self.query_error {
            return Err(DisplayError::PlatformCall {
                call: QUERY_DISPLAY_CONFIG,
                code,
            });
        }
        if self.paths.len() > paths.len() || self.modes.len() > modes.len() {
            return Err(DisplayError::PlatformCall {
                call: QUERY_DISPLAY_CONFIG,
                code: ErrorCode::InsufficientBuffer,
            });
        }

        paths[..self.paths.len()].copy_from_slice(&self.paths);
        modes[..self.modes.len()].copy_from_slice(&self.modes);

        let (path_count, mode_count) = self
            .fill_override
            .unwrap_or((self.paths.len() as u32, self.modes.len() as u32));

        Ok(FillCounts {
            paths: path_count,
            modes: mode_count,
            topology: flags.wants_topology_id().then_some(self.topology),
        })
    }
}
