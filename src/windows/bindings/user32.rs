//! User32.dll bindings for the display configuration query functions

use crate::core::types::{DisplayError, DisplayResult, QueryFlags};
use crate::display::{BufferSizes, DisplayConfigApi, FillCounts};
use crate::windows::types::{PathInfo, RawModeInfo};
#[cfg(windows)]
use crate::windows::utils::error_codes::check_status;

pub const GET_BUFFER_SIZES: &str = "GetDisplayConfigBufferSizes";
pub const QUERY_DISPLAY_CONFIG: &str = "QueryDisplayConfig";

/// The live platform binding
///
/// Holds no handles: user32 is linked at load time, so every call pair is
/// independent and any number of readers may coexist.
#[derive(Debug)]
pub struct Win32DisplayConfig {
    _private: (),
}

impl Win32DisplayConfig {
    /// Creates the binding, failing on targets without the display configuration API
    pub fn new() -> DisplayResult<Self> {
        if cfg!(windows) {
            Ok(Win32DisplayConfig { _private: () })
        } else {
            Err(DisplayError::UnsupportedPlatform(
                std::env::consts::OS.to_string(),
            ))
        }
    }
}

#[cfg(windows)]
mod ffi {
    use super::*;
    use crate::core::types::TopologyId;
    use crate::windows::types::PathTargetInfo;
    use std::mem::{align_of, offset_of, size_of};
    use ::windows::Win32::Devices::Display::{
        GetDisplayConfigBufferSizes, QueryDisplayConfig, DISPLAYCONFIG_MODE_INFO,
        DISPLAYCONFIG_PATH_INFO, DISPLAYCONFIG_PATH_TARGET_INFO, DISPLAYCONFIG_TOPOLOGY_ID,
        QUERY_DISPLAY_CONFIG_FLAGS,
    };

    // Our records are handed to the platform in place of the SDK types.
    const _: () = assert!(size_of::<PathInfo>() == size_of::<DISPLAYCONFIG_PATH_INFO>());
    const _: () = assert!(align_of::<PathInfo>() == align_of::<DISPLAYCONFIG_PATH_INFO>());
    const _: () = assert!(size_of::<RawModeInfo>() == size_of::<DISPLAYCONFIG_MODE_INFO>());
    const _: () = assert!(align_of::<RawModeInfo>() == align_of::<DISPLAYCONFIG_MODE_INFO>());

    const _: () = assert!(
        offset_of!(PathInfo, target_info) == offset_of!(DISPLAYCONFIG_PATH_INFO, targetInfo)
    );
    const _: () =
        assert!(offset_of!(PathInfo, flags) == offset_of!(DISPLAYCONFIG_PATH_INFO, flags));
    const _: () = assert!(
        offset_of!(PathTargetInfo, refresh_rate)
            == offset_of!(DISPLAYCONFIG_PATH_TARGET_INFO, refreshRate)
    );
    const _: () = assert!(
        offset_of!(PathTargetInfo, status_flags)
            == offset_of!(DISPLAYCONFIG_PATH_TARGET_INFO, statusFlags)
    );
    const _: () = assert!(
        offset_of!(RawModeInfo, adapter_id) == offset_of!(DISPLAYCONFIG_MODE_INFO, adapterId)
    );
    const _: () = assert!(
        offset_of!(RawModeInfo, payload) == offset_of!(DISPLAYCONFIG_MODE_INFO, Anonymous)
    );

    pub fn buffer_sizes(flags: QueryFlags) -> DisplayResult<BufferSizes> {
        let mut paths = 0u32;
        let mut modes = 0u32;

        // SAFETY: both out pointers reference live locals.
        let status = unsafe {
            GetDisplayConfigBufferSizes(
                QUERY_DISPLAY_CONFIG_FLAGS(flags.bits()),
                &mut paths,
                &mut modes,
            )
        };
        check_status(status.0, GET_BUFFER_SIZES)?;

        Ok(BufferSizes { paths, modes })
    }

    pub fn query(
        flags: QueryFlags,
        paths: &mut [PathInfo],
        modes: &mut [RawModeInfo],
    ) -> DisplayResult<FillCounts> {
        let mut path_count = paths.len() as u32;
        let mut mode_count = modes.len() as u32;
        let mut topology = DISPLAYCONFIG_TOPOLOGY_ID(0);
        let topology_ptr = flags
            .wants_topology_id()
            .then_some(&mut topology as *mut DISPLAYCONFIG_TOPOLOGY_ID);

        // SAFETY: the counts passed in are the slice lengths, so the platform
        // writes at most that many records. PathInfo and RawModeInfo share
        // size and field layout with the SDK structures (asserted above).
        let status = unsafe {
            QueryDisplayConfig(
                QUERY_DISPLAY_CONFIG_FLAGS(flags.bits()),
                &mut path_count,
                paths.as_mut_ptr().cast::<DISPLAYCONFIG_PATH_INFO>(),
                &mut mode_count,
                modes.as_mut_ptr().cast::<DISPLAYCONFIG_MODE_INFO>(),
                topology_ptr,
            )
        };
        check_status(status.0, QUERY_DISPLAY_CONFIG)?;

        Ok(FillCounts {
            paths: path_count,
            modes: mode_count,
            topology: flags
                .wants_topology_id()
                .then(|| TopologyId::from(topology.0 as u32)),
        })
    }
}

#[cfg(windows)]
impl DisplayConfigApi for Win32DisplayConfig {
    fn buffer_sizes(&self, flags: QueryFlags) -> DisplayResult<BufferSizes> {
        ffi::buffer_sizes(flags)
    }

    fn query(
        &self,
        flags: QueryFlags,
        paths: &mut [PathInfo],
        modes: &mut [RawModeInfo],
    ) -> DisplayResult<FillCounts> {
        ffi::query(flags, paths, modes)
    }
}

#[cfg(not(windows))]
impl DisplayConfigApi for Win32DisplayConfig {
    fn buffer_sizes(&self, _flags: QueryFlags) -> DisplayResult<BufferSizes> {
        Err(DisplayError::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        ))
    }

    fn query(
        &self,
        _flags: QueryFlags,
        _paths: &mut [PathInfo],
        _modes: &mut [RawModeInfo],
    ) -> DisplayResult<FillCounts> {
        Err(DisplayError::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        ))
    }
}
