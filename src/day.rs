//! Julian Day values.
//!
//! A [`Day`] is a continuous count of days since noon, 4713 BCE (proleptic
//! Julian calendar), with the time of day carried in the fractional part.
//! Values are not validated: dates far in the past or future simply become
//! negative or very large numbers.
//!
//! ```
//! use celestial_julian::Day;
//!
//! let noon = Day::j2000();
//! let evening = noon.add(0.25);
//! assert_eq!(evening.days(), 2451545.25);
//! assert_eq!(noon.to_century().centuries(), 0.0);
//! ```

use crate::calendar::julian_day_from_datetime;
use crate::century::Century;
use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
use crate::parsing::parse_iso8601;
use crate::TimeError;
use chrono::{DateTime, TimeZone};
use std::fmt;
use std::str::FromStr;

/// A Julian Day, including the fraction of the day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(f64);

impl Day {
    pub fn new(days: f64) -> Self {
        Self(days)
    }

    /// Returns the J2000.0 epoch, JD 2451545.0.
    pub fn j2000() -> Self {
        Self(J2000_JD)
    }

    /// Converts a timezone-aware timestamp. See [`julian_day_from_datetime`].
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        julian_day_from_datetime(datetime)
    }

    /// Returns the raw day count.
    pub fn days(&self) -> f64 {
        self.0
    }

    /// Returns a new `Day` offset by `delta` days.
    pub fn add(&self, delta: f64) -> Self {
        Self(self.days() + delta)
    }

    /// Julian centuries elapsed since J2000.0.
    ///
    /// T = (JD - 2451545.0) / 36525
    pub fn to_century(&self) -> Century {
        Century::new((self.days() - J2000_JD) / DAYS_PER_JULIAN_CENTURY)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.0)
    }
}

impl From<f64> for Day {
    fn from(days: f64) -> Self {
        Self::new(days)
    }
}

impl From<Day> for f64 {
    fn from(day: Day) -> Self {
        day.days()
    }
}

impl FromStr for Day {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_iso8601(s)?.to_julian_day())
    }
}
