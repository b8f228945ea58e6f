//! Julian centuries since J2000.0.
//!
//! The T parameter of most IAU series: one unit is 36525 days, zero is
//! JD 2451545.0.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
use crate::day::Day;
use std::fmt;

/// Julian centuries elapsed since J2000.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Century(f64);

impl Century {
    pub fn new(centuries: f64) -> Self {
        Self(centuries)
    }

    pub fn j2000() -> Self {
        Self(0.0)
    }

    /// Returns the raw century count.
    pub fn centuries(&self) -> f64 {
        self.0
    }

    /// JD = T * 36525 + 2451545.0
    pub fn to_day(&self) -> Day {
        Day::new(self.centuries() * DAYS_PER_JULIAN_CENTURY + J2000_JD)
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T {:.12}", self.0)
    }
}

impl From<f64> for Century {
    fn from(centuries: f64) -> Self {
        Self::new(centuries)
    }
}

impl From<Century> for f64 {
    fn from(century: Century) -> Self {
        century.centuries()
    }
}
