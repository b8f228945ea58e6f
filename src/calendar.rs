//! Calendar timestamps to Julian Days.
//!
//! The integer part comes from the Fliegel–Van Flandern Julian Day Number
//! formula for the proleptic Gregorian calendar. The time of day is added as a
//! fraction measured from noon, and the fixed UTC offset is applied last.
//!
//! # Field validation
//!
//! None. Out-of-range fields (month 13, day 32, hour 30) are fed through the
//! arithmetic and give a well-defined number. Callers that need calendar
//! validation should do it before converting, as [`crate::parsing`] does for
//! text input.
//!
//! # Usage
//!
//! ```
//! use celestial_julian::{convert_calendar_to_julian_day, CalendarTimestamp};
//!
//! let epoch = CalendarTimestamp::new(2000, 1, 1, 12, 0, 0);
//! assert_eq!(convert_calendar_to_julian_day(&epoch, 0).days(), 2451545.0);
//!
//! let reform = CalendarTimestamp::new(1582, 10, 15, 0, 0, 0);
//! assert_eq!(reform.to_julian_day(0).days(), 2299160.5);
//! ```

use crate::constants::{
    HOURS_PER_DAY, JULIAN_DAY_START_HOUR, MILLISECONDS_PER_DAY, MINUTES_PER_DAY,
    NANOSECONDS_PER_MILLISECOND, SECONDS_PER_DAY_F64,
};
use crate::day::Day;
use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

/// Local wall-clock calendar fields, millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarTimestamp {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub millisecond: i32,
}

impl CalendarTimestamp {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond: 0,
        }
    }

    pub fn with_millisecond(self, millisecond: i32) -> Self {
        Self {
            millisecond,
            ..self
        }
    }

    /// Integer Julian Day Number of the calendar date.
    pub fn julian_day_number(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Fraction of the Julian Day elapsed at this time of day.
    ///
    /// Zero at noon, -0.5 at midnight.
    pub fn day_fraction(&self) -> f64 {
        (self.hour as f64 - JULIAN_DAY_START_HOUR) / HOURS_PER_DAY
            + self.minute as f64 / MINUTES_PER_DAY
            + self.second as f64 / SECONDS_PER_DAY_F64
            + self.millisecond as f64 / MILLISECONDS_PER_DAY
    }

    /// See [`convert_calendar_to_julian_day`].
    pub fn to_julian_day(&self, utc_offset_seconds: i32) -> Day {
        convert_calendar_to_julian_day(self, utc_offset_seconds)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for CalendarTimestamp {
    fn from(datetime: &DateTime<Tz>) -> Self {
        Self::new(
            datetime.year(),
            datetime.month() as i32,
            datetime.day() as i32,
            datetime.hour() as i32,
            datetime.minute() as i32,
            datetime.second() as i32,
        )
        .with_millisecond((datetime.nanosecond() / NANOSECONDS_PER_MILLISECOND) as i32)
    }
}

/// Fliegel–Van Flandern Julian Day Number for a proleptic Gregorian date.
///
/// All divisions truncate toward zero, which is what Rust's integer `/` does
/// and what the formula is written for. Evaluated in `i64`.
pub fn julian_day_number(year: i32, month: i32, day: i32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (m - 14) / 12;

    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Converts local calendar fields and a fixed UTC offset to a Julian Day.
///
/// The offset is given in seconds east of UTC and is added to the local
/// Julian Day as `utc_offset_seconds / 86400`. The caller resolves timezone
/// rules (DST, historical changes) into that single value.
pub fn convert_calendar_to_julian_day(
    timestamp: &CalendarTimestamp,
    utc_offset_seconds: i32,
) -> Day {
    let jdn = timestamp.julian_day_number();
    let local = jdn as f64 + timestamp.day_fraction();
    let julian_day = local + utc_offset_seconds as f64 / SECONDS_PER_DAY_F64;

    tracing::trace!(
        jdn,
        local,
        utc_offset_seconds,
        julian_day,
        "calendar to julian day"
    );

    Day::new(julian_day)
}

/// Converts a timezone-aware timestamp, reading its local fields and the
/// offset in effect at that instant.
///
/// Sub-millisecond precision is truncated.
pub fn julian_day_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Day {
    let utc_offset_seconds = datetime.offset().fix().local_minus_utc();
    convert_calendar_to_julian_day(&CalendarTimestamp::from(datetime), utc_offset_seconds)
}
