//! Rational frequencies as reported by the display configuration API

use serde::{Deserialize, Serialize};
use std::fmt;

/// `DISPLAYCONFIG_RATIONAL`: an exact frequency as numerator / denominator
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    /// Create a new rational
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Rational {
            numerator,
            denominator,
        }
    }

    /// Whether the frequency is unknown (zero denominator)
    pub fn is_unknown(&self) -> bool {
        self.denominator == 0
    }

    /// Whole hertz, truncated; 0 when unknown
    pub fn as_hz(&self) -> u32 {
        decode_refresh_rate(*self)
    }

    /// Fractional hertz, e.g. 59.94 for 60000/1001; 0.0 when unknown
    pub fn as_hz_f64(&self) -> f64 {
        if self.is_unknown() {
            0.0
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Truncating integer refresh rate in Hz. A zero denominator yields 0.
pub fn decode_refresh_rate(rate: Rational) -> u32 {
    rate.numerator.checked_div(rate.denominator).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_refresh_rate() {
        assert_eq!(decode_refresh_rate(Rational::new(60, 1)), 60);
        assert_eq!(decode_refresh_rate(Rational::new(60000, 1001)), 59);
        assert_eq!(decode_refresh_rate(Rational::new(144000, 1000)), 144);
        assert_eq!(decode_refresh_rate(Rational::new(60000, 0)), 0);
        assert_eq!(decode_refresh_rate(Rational::default()), 0);
    }

    #[test]
    fn test_fractional_hz() {
        let ntsc = Rational::new(60000, 1001);
        assert!((ntsc.as_hz_f64() - 59.94).abs() < 0.01);
        assert_eq!(Rational::new(1, 0).as_hz_f64(), 0.0);
        assert!(Rational::new(1, 0).is_unknown());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::new(60000, 1001).to_string(), "60000/1001");
    }
}
