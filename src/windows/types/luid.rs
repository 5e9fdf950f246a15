//! Adapter locally unique identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// `LUID`: identifies a graphics adapter for the lifetime of a boot session
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Luid {
    pub low_part: u32,
    pub high_part: i32,
}

impl Luid {
    pub const fn new(low_part: u32, high_part: i32) -> Self {
        Luid {
            low_part,
            high_part,
        }
    }

    /// The identifier as a single 64-bit value
    pub fn as_u64(&self) -> u64 {
        ((self.high_part as u32 as u64) << 32) | self.low_part as u64
    }
}

impl fmt::Display for Luid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.low_part, self.high_part)
    }
}
