//! `DISPLAYCONFIG_MODE_INFO` and its tagged union payload
//!
//! The native record carries a type tag and a 48-byte union. `RawModeInfo`
//! mirrors that layout exactly so it can be handed to the platform; it is
//! only ever read back through [`ModeInfo::decode`], which selects the union
//! member by tag.

use super::luid::Luid;
use crate::core::types::{decode_refresh_rate, Rational};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;

/// `DISPLAYCONFIG_MODE_INFO_TYPE_SOURCE`
pub const MODE_INFO_TYPE_SOURCE: u32 = 1;
/// `DISPLAYCONFIG_MODE_INFO_TYPE_TARGET`
pub const MODE_INFO_TYPE_TARGET: u32 = 2;
/// `DISPLAYCONFIG_MODE_INFO_TYPE_DESKTOP_IMAGE`
pub const MODE_INFO_TYPE_DESKTOP_IMAGE: u32 = 3;

/// `DISPLAYCONFIG_2DREGION`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region2D {
    pub cx: u32,
    pub cy: u32,
}

/// `POINTL`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointL {
    pub x: i32,
    pub y: i32,
}

/// `RECTL`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectL {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// `DISPLAYCONFIG_VIDEO_SIGNAL_INFO`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSignalInfo {
    pub pixel_rate: u64,
    pub h_sync_freq: Rational,
    pub v_sync_freq: Rational,
    pub active_size: Region2D,
    pub total_size: Region2D,
    pub video_standard: u32,
    pub scan_line_ordering: u32,
}

impl VideoSignalInfo {
    /// Vertical refresh rate in whole hertz
    pub fn refresh_rate_hz(&self) -> u32 {
        decode_refresh_rate(self.v_sync_freq)
    }
}

/// `DISPLAYCONFIG_TARGET_MODE`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetMode {
    pub target_video_signal_info: VideoSignalInfo,
}

/// `DISPLAYCONFIG_SOURCE_MODE`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMode {
    pub width: u32,
    pub height: u32,
    pub pixel_format: u32,
    pub position: PointL,
}

/// `DISPLAYCONFIG_DESKTOP_IMAGE_INFO`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopImageInfo {
    pub path_source_size: PointL,
    pub desktop_image_region: RectL,
    pub desktop_image_clip: RectL,
}

/// Anonymous union of `DISPLAYCONFIG_MODE_INFO`
#[repr(C)]
#[derive(Clone, Copy)]
pub union ModeInfoPayload {
    pub target_mode: TargetMode,
    pub source_mode: SourceMode,
    pub desktop_image_info: DesktopImageInfo,
}

/// `DISPLAYCONFIG_MODE_INFO` in native layout
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawModeInfo {
    pub info_type: u32,
    pub id: u32,
    pub adapter_id: Luid,
    pub payload: ModeInfoPayload,
}

impl RawModeInfo {
    /// Native record size in bytes
    pub const SIZE: usize = 64;

    pub fn target(id: u32, adapter_id: Luid, mode: TargetMode) -> Self {
        RawModeInfo {
            info_type: MODE_INFO_TYPE_TARGET,
            id,
            adapter_id,
            payload: ModeInfoPayload { target_mode: mode },
        }
    }

    pub fn source(id: u32, adapter_id: Luid, mode: SourceMode) -> Self {
        RawModeInfo {
            info_type: MODE_INFO_TYPE_SOURCE,
            id,
            adapter_id,
            payload: ModeInfoPayload { source_mode: mode },
        }
    }

    pub fn desktop_image(id: u32, adapter_id: Luid, info: DesktopImageInfo) -> Self {
        RawModeInfo {
            info_type: MODE_INFO_TYPE_DESKTOP_IMAGE,
            id,
            adapter_id,
            payload: ModeInfoPayload {
                desktop_image_info: info,
            },
        }
    }

    /// Reads a record laid out in native byte order
    ///
    /// Every Windows target is little-endian, so platform dumps decode as-is.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < mem::size_of::<Self>() {
            return None;
        }
        // SAFETY: the length was checked above, the read tolerates any
        // alignment, and every union member is plain integers.
        Some(unsafe { bytes.as_ptr().cast::<Self>().read_unaligned() })
    }
}

impl Default for RawModeInfo {
    fn default() -> Self {
        // Target mode is the largest member, so this zeroes the whole payload.
        RawModeInfo {
            info_type: 0,
            id: 0,
            adapter_id: Luid::default(),
            payload: ModeInfoPayload {
                target_mode: TargetMode::default(),
            },
        }
    }
}

impl fmt::Debug for RawModeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawModeInfo")
            .field("info_type", &self.info_type)
            .field("id", &self.id)
            .field("adapter_id", &self.adapter_id)
            .finish_non_exhaustive()
    }
}

/// Payload of a mode record, selected by its type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ModeKind {
    Source(SourceMode),
    Target(TargetMode),
    DesktopImage(DesktopImageInfo),
    Unknown { tag: u32 },
}

/// Decoded mode record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfo {
    pub id: u32,
    pub adapter_id: Luid,
    pub kind: ModeKind,
}

impl ModeInfo {
    /// Decodes a native record, reading only the union member named by its tag
    pub fn decode(raw: &RawModeInfo) -> Self {
        // SAFETY: each arm reads the member the platform wrote for that tag;
        // every member is plain integers and fits within the 48-byte payload.
        let kind = unsafe {
            match raw.info_type {
                MODE_INFO_TYPE_SOURCE => ModeKind::Source(raw.payload.source_mode),
                MODE_INFO_TYPE_TARGET => ModeKind::Target(raw.payload.target_mode),
                MODE_INFO_TYPE_DESKTOP_IMAGE => {
                    ModeKind::DesktopImage(raw.payload.desktop_image_info)
                }
                tag => ModeKind::Unknown { tag },
            }
        };

        ModeInfo {
            id: raw.id,
            adapter_id: raw.adapter_id,
            kind,
        }
    }

    /// The video signal, if this is a target mode
    pub fn video_signal(&self) -> Option<&VideoSignalInfo> {
        match &self.kind {
            ModeKind::Target(mode) => Some(&mode.target_video_signal_info),
            _ => None,
        }
    }
}

impl From<&RawModeInfo> for ModeInfo {
    fn from(raw: &RawModeInfo) -> Self {
        ModeInfo::decode(raw)
    }
}
