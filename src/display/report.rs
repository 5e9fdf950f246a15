//! Text and JSON rendering of a display snapshot

use super::reader::DisplaySnapshot;
use crate::core::types::DisplayResult;
use crate::windows::types::{ModeInfo, ModeKind, PathInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Plain-text listing of paths and modes in platform order
///
/// Each path takes two lines, each mode one line.
pub fn format_report(paths: &[PathInfo], modes: &[ModeInfo]) -> String {
    TextReport { paths, modes }.to_string()
}

struct TextReport<'a> {
    paths: &'a [PathInfo],
    modes: &'a [ModeInfo],
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.paths.iter().enumerate() {
            let source = &path.source_info;
            writeln!(f, "Path {}: {} -> {}", i, source.id, path.target_info.id)?;
            writeln!(
                f,
                "  Source: AdapterID: {}, ID: {}, ModeInfoIdx: {}, StatusFlags: {} {}",
                source.adapter_id,
                source.id,
                source.mode_info_idx,
                source.status_flags,
                path.target_info.status_flags
            )?;
        }

        for (i, mode) in self.modes.iter().enumerate() {
            write!(f, "Mode {}: ", i)?;
            match &mode.kind {
                ModeKind::Target(target) => {
                    let signal = &target.target_video_signal_info;
                    writeln!(
                        f,
                        "{} x {} @ {} Hz",
                        signal.active_size.cx,
                        signal.active_size.cy,
                        signal.refresh_rate_hz()
                    )?;
                }
                ModeKind::Source(source) => writeln!(
                    f,
                    "source {} x {} at ({}, {})",
                    source.width, source.height, source.position.x, source.position.y
                )?,
                ModeKind::DesktopImage(image) => writeln!(
                    f,
                    "desktop image {} x {}",
                    image.path_source_size.x, image.path_source_size.y
                )?,
                ModeKind::Unknown { tag } => writeln!(f, "unknown mode type {}", tag)?,
            }
        }

        Ok(())
    }
}

/// A snapshot ready to be written out
#[derive(Debug, Clone, Serialize)]
pub struct DisplayReport<'a> {
    #[serde(flatten)]
    snapshot: &'a DisplaySnapshot,
}

impl<'a> DisplayReport<'a> {
    pub fn new(snapshot: &'a DisplaySnapshot) -> Self {
        DisplayReport { snapshot }
    }

    pub fn render(&self, format: OutputFormat) -> DisplayResult<String> {
        match format {
            OutputFormat::Text => {
                let mut text = String::new();
                if let Some(topology) = self.snapshot.topology {
                    text.push_str(&format!("Topology: {}\n", topology));
                }
                text.push_str(&format_report(&self.snapshot.paths, &self.snapshot.modes));
                Ok(text)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Rational, TopologyId};
    use crate::windows::types::{Luid, RawModeInfo, Region2D, TargetMode, VideoSignalInfo};
    use pretty_assertions::assert_eq;

    fn target_mode(cx: u32, cy: u32, rate: Rational) -> ModeInfo {
        ModeInfo::decode(&RawModeInfo::target(
            0,
            Luid::default(),
            TargetMode {
                target_video_signal_info: VideoSignalInfo {
                    active_size: Region2D { cx, cy },
                    v_sync_freq: rate,
                    ..Default::default()
                },
            },
        ))
    }

    #[test]
    fn test_path_lines() {
        let mut path = PathInfo::default();
        path.source_info.adapter_id = Luid::new(70_123, 0);
        path.source_info.id = 0;
        path.source_info.mode_info_idx = 1;
        path.source_info.status_flags = 1;
        path.target_info.id = 4357;
        path.target_info.status_flags = 3;

        assert_eq!(
            format_report(&[path], &[]),
            "Path 0: 0 -> 4357\n  Source: AdapterID: {70123 0}, ID: 0, ModeInfoIdx: 1, StatusFlags: 1 3\n"
        );
    }

    #[test]
    fn test_mode_lines() {
        let modes = [
            target_mode(1920, 1080, Rational::new(60000, 1001)),
            target_mode(800, 600, Rational::new(60, 0)),
            ModeInfo {
                id: 0,
                adapter_id: Luid::default(),
                kind: ModeKind::Unknown { tag: 7 },
            },
        ];
        assert_eq!(
            format_report(&[], &modes),
            "Mode 0: 1920 x 1080 @ 59 Hz\nMode 1: 800 x 600 @ 0 Hz\nMode 2: unknown mode type 7\n"
        );
    }

    #[test]
    fn test_render_text_with_topology() {
        let snapshot = DisplaySnapshot {
            paths: vec![],
            modes: vec![target_mode(3840, 2160, Rational::new(144, 1))],
            topology: Some(TopologyId::Extend),
        };
        let text = DisplayReport::new(&snapshot).render(OutputFormat::Text).unwrap();
        assert_eq!(text, "Topology: extend\nMode 0: 3840 x 2160 @ 144 Hz\n");
    }

    #[test]
    fn test_render_json() {
        let snapshot = DisplaySnapshot {
            paths: vec![PathInfo::default()],
            modes: vec![target_mode(1280, 720, Rational::new(50, 1))],
            topology: None,
        };
        let json = DisplayReport::new(&snapshot).render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["paths"].as_array().unwrap().len(), 1);
        assert_eq!(value["modes"][0]["kind"]["type"], "target");
        assert_eq!(
            value["modes"][0]["kind"]["targetVideoSignalInfo"]["activeSize"]["cx"],
            1280
        );
        assert!(value.get("topology").is_none());
    }
}
