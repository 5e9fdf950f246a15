//! Topology selection flags for the display configuration queries

use super::error::{DisplayError, DisplayResult};
use bitflags::bitflags;

bitflags! {
    /// `QDC_*` flags passed to both the sizing and the fill call
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QueryFlags: u32 {
        const ALL_PATHS = 0x0000_0001;
        const ONLY_ACTIVE_PATHS = 0x0000_0002;
        const DATABASE_CURRENT = 0x0000_0004;
        const VIRTUAL_MODE_AWARE = 0x0000_0010;
        const INCLUDE_HMD = 0x0000_0020;
        const VIRTUAL_REFRESH_RATE_AWARE = 0x0000_0040;
    }
}

impl Default for QueryFlags {
    fn default() -> Self {
        QueryFlags::ONLY_ACTIVE_PATHS | QueryFlags::VIRTUAL_MODE_AWARE
    }
}

impl QueryFlags {
    /// Selectors of which exactly one must be present
    pub const BASE_SELECTORS: QueryFlags = QueryFlags::ALL_PATHS
        .union(QueryFlags::ONLY_ACTIVE_PATHS)
        .union(QueryFlags::DATABASE_CURRENT);

    /// Checks that exactly one base selector is set
    pub fn validate(self) -> DisplayResult<Self> {
        match self.intersection(Self::BASE_SELECTORS).bits().count_ones() {
            1 => Ok(self),
            0 => Err(DisplayError::InvalidFlags(
                "one of all_paths, only_active_paths or database_current is required"
                    .to_string(),
            )),
            _ => Err(DisplayError::InvalidFlags(format!(
                "base selectors are mutually exclusive: {:?}",
                self.intersection(Self::BASE_SELECTORS)
            ))),
        }
    }

    /// Whether the fill call must receive a topology id out parameter
    pub fn wants_topology_id(self) -> bool {
        self.contains(QueryFlags::DATABASE_CURRENT)
    }

    /// Builds a flag set from configuration names
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> DisplayResult<Self> {
        names.iter().try_fold(QueryFlags::empty(), |acc, name| {
            Ok(acc | QueryFlags::parse_name(name.as_ref())?)
        })
    }

    /// Parses a single configuration name such as `only_active_paths`
    pub fn parse_name(name: &str) -> DisplayResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "all_paths" => Ok(QueryFlags::ALL_PATHS),
            "only_active_paths" => Ok(QueryFlags::ONLY_ACTIVE_PATHS),
            "database_current" => Ok(QueryFlags::DATABASE_CURRENT),
            "virtual_mode_aware" => Ok(QueryFlags::VIRTUAL_MODE_AWARE),
            "include_hmd" => Ok(QueryFlags::INCLUDE_HMD),
            "virtual_refresh_rate_aware" => Ok(QueryFlags::VIRTUAL_REFRESH_RATE_AWARE),
            other => Err(DisplayError::InvalidFlags(format!("unknown flag '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert_eq!(QueryFlags::ALL_PATHS.bits(), 0x01);
        assert_eq!(QueryFlags::ONLY_ACTIVE_PATHS.bits(), 0x02);
        assert_eq!(QueryFlags::DATABASE_CURRENT.bits(), 0x04);
        assert_eq!(QueryFlags::VIRTUAL_MODE_AWARE.bits(), 0x10);
        assert_eq!(QueryFlags::INCLUDE_HMD.bits(), 0x20);
        assert_eq!(QueryFlags::VIRTUAL_REFRESH_RATE_AWARE.bits(), 0x40);
    }

    #[test]
    fn test_default_flags() {
        assert_eq!(QueryFlags::default().bits(), 0x12);
        assert!(QueryFlags::default().validate().is_ok());
        assert!(!QueryFlags::default().wants_topology_id());
    }

    #[test]
    fn test_validate_base_selectors() {
        assert!(QueryFlags::VIRTUAL_MODE_AWARE.validate().is_err());
        assert!((QueryFlags::ALL_PATHS | QueryFlags::ONLY_ACTIVE_PATHS)
            .validate()
            .is_err());
        assert!((QueryFlags::DATABASE_CURRENT | QueryFlags::INCLUDE_HMD)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_from_names() {
        let flags = QueryFlags::from_names(&["only_active_paths", "VIRTUAL_MODE_AWARE"]).unwrap();
        assert_eq!(flags, QueryFlags::default());

        let err = QueryFlags::from_names(&["only_active_paths", "bogus"]).unwrap_err();
        assert!(err.to_string().contains("bogus"));

        let empty: [&str; 0] = [];
        assert_eq!(QueryFlags::from_names(&empty).unwrap(), QueryFlags::empty());
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(
            QueryFlags::parse_name(" Include_HMD ").unwrap(),
            QueryFlags::INCLUDE_HMD
        );
        assert!(QueryFlags::parse_name("INCLUDE-HMD").is_err());
        // bitflags' own lookup uses the constant names verbatim
        assert_eq!(
            QueryFlags::from_name("DATABASE_CURRENT"),
            Some(QueryFlags::DATABASE_CURRENT)
        );
    }
}
