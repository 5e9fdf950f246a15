//! `DISPLAYCONFIG_PATH_INFO` and its source/target descriptors
//!
//! These records are filled in place by the platform and read as-is; every
//! field is a plain integer so any bit pattern is a valid value.

use super::luid::Luid;
use crate::core::types::Rational;
use serde::{Deserialize, Serialize};
use std::mem;

/// `DISPLAYCONFIG_PATH_ACTIVE`
pub const PATH_ACTIVE: u32 = 0x0000_0001;
/// `DISPLAYCONFIG_SOURCE_IN_USE`
pub const SOURCE_IN_USE: u32 = 0x0000_0001;
/// `DISPLAYCONFIG_TARGET_IN_USE`
pub const TARGET_IN_USE: u32 = 0x0000_0001;
/// `DISPLAYCONFIG_PATH_MODE_IDX_INVALID`
pub const MODE_IDX_INVALID: u32 = 0xFFFF_FFFF;

/// `DISPLAYCONFIG_PATH_SOURCE_INFO`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSourceInfo {
    pub adapter_id: Luid,
    pub id: u32,
    pub mode_info_idx: u32,
    pub status_flags: u32,
}

impl PathSourceInfo {
    pub fn is_in_use(&self) -> bool {
        self.status_flags & SOURCE_IN_USE != 0
    }

    /// Index into the mode array, if the path references a source mode
    pub fn mode_index(&self) -> Option<usize> {
        (self.mode_info_idx != MODE_IDX_INVALID).then_some(self.mode_info_idx as usize)
    }
}

/// `DISPLAYCONFIG_PATH_TARGET_INFO`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathTargetInfo {
    pub adapter_id: Luid,
    pub id: u32,
    pub mode_info_idx: u32,
    pub output_technology: u32,
    pub rotation: u32,
    pub scaling: u32,
    pub refresh_rate: Rational,
    pub scan_line_ordering: u32,
    pub target_available: i32,
    pub status_flags: u32,
}

impl PathTargetInfo {
    pub fn is_available(&self) -> bool {
        self.target_available != 0
    }

    pub fn is_in_use(&self) -> bool {
        self.status_flags & TARGET_IN_USE != 0
    }

    /// Index into the mode array, if the path references a target mode
    pub fn mode_index(&self) -> Option<usize> {
        (self.mode_info_idx != MODE_IDX_INVALID).then_some(self.mode_info_idx as usize)
    }
}

/// `DISPLAYCONFIG_PATH_INFO`: one source-to-target connection
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathInfo {
    pub source_info: PathSourceInfo,
    pub target_info: PathTargetInfo,
    pub flags: u32,
}

impl PathInfo {
    /// Native record size in bytes
    pub const SIZE: usize = 72;

    pub fn is_active(&self) -> bool {
        self.flags & PATH_ACTIVE != 0
    }

    /// Reads a record laid out in native byte order
    ///
    /// Every Windows target is little-endian, so platform dumps decode as-is.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < mem::size_of::<Self>() {
            return None;
        }
        // SAFETY: the length was checked above, the read tolerates any
        // alignment, and every field is an integer so all bit patterns are valid.
        Some(unsafe { bytes.as_ptr().cast::<Self>().read_unaligned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn test_native_layout() {
        assert_eq!(size_of::<PathSourceInfo>(), 20);
        assert_eq!(size_of::<PathTargetInfo>(), 48);
        assert_eq!(size_of::<PathInfo>(), PathInfo::SIZE);
        assert_eq!(align_of::<PathInfo>(), 4);

        assert_eq!(offset_of!(PathTargetInfo, refresh_rate), 28);
        assert_eq!(offset_of!(PathTargetInfo, status_flags), 44);
        assert_eq!(offset_of!(PathInfo, target_info), 20);
        assert_eq!(offset_of!(PathInfo, flags), 68);
    }

    #[test]
    fn test_from_bytes() {
        let mut bytes = [0u8; PathInfo::SIZE];
        bytes[8..12].copy_from_slice(&7u32.to_le_bytes()); // source id
        bytes[28..32].copy_from_slice(&259u32.to_le_bytes()); // target id
        bytes[68..72].copy_from_slice(&PATH_ACTIVE.to_le_bytes());

        let path = PathInfo::from_bytes(&bytes).unwrap();
        assert_eq!(path.source_info.id, 7);
        assert_eq!(path.target_info.id, 259);
        assert!(path.is_active());

        assert!(PathInfo::from_bytes(&bytes[..71]).is_none());
    }

    #[test]
    fn test_mode_index() {
        let mut source = PathSourceInfo::default();
        assert_eq!(source.mode_index(), Some(0));
        source.mode_info_idx = MODE_IDX_INVALID;
        assert_eq!(source.mode_index(), None);

        let target = PathTargetInfo {
            target_available: 1,
            status_flags: TARGET_IN_USE,
            ..Default::default()
        };
        assert!(target.is_available());
        assert!(target.is_in_use());
    }
}
