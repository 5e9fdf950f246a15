//! Current topology identifier returned with `QDC_DATABASE_CURRENT`

use serde::{Deserialize, Serialize};
use std::fmt;

/// `DISPLAYCONFIG_TOPOLOGY_ID`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyId {
    Internal,
    Clone,
    Extend,
    External,
    Unknown(u32),
}

impl From<u32> for TopologyId {
    fn from(raw: u32) -> Self {
        match raw {
            0x1 => TopologyId::Internal,
            0x2 => TopologyId::Clone,
            0x4 => TopologyId::Extend,
            0x8 => TopologyId::External,
            other => TopologyId::Unknown(other),
        }
    }
}

impl fmt::Display for TopologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyId::Internal => write!(f, "internal"),
            TopologyId::Clone => write!(f, "clone"),
            TopologyId::Extend => write!(f, "extend"),
            TopologyId::External => write!(f, "external"),
            TopologyId::Unknown(raw) => write!(f, "unknown ({})", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_conversion() {
        assert_eq!(TopologyId::from(1), TopologyId::Internal);
        assert_eq!(TopologyId::from(2), TopologyId::Clone);
        assert_eq!(TopologyId::from(4), TopologyId::Extend);
        assert_eq!(TopologyId::from(8), TopologyId::External);
        assert_eq!(TopologyId::from(3), TopologyId::Unknown(3));
        assert_eq!(TopologyId::Unknown(3).to_string(), "unknown (3)");
    }
}
