//! Calendar to Julian Day conversion and Julian centuries since J2000.0.
//!
//! The crate turns a proleptic Gregorian timestamp with a fixed UTC offset
//! into a [`Day`], and moves between [`Day`] and [`Century`] with the affine
//! transform around JD 2451545.0. There is no leap-second handling, no time
//! scale bookkeeping and no ephemeris.
//!
//! # Usage
//!
//! ```
//! use celestial_julian::{CalendarTimestamp, Century, Day};
//!
//! // From calendar fields
//! let day = CalendarTimestamp::new(2000, 1, 1, 12, 0, 0).to_julian_day(0);
//! assert_eq!(day, Day::j2000());
//!
//! // From ISO 8601 text
//! let reform: Day = "1582-10-15T00:00:00Z".parse().unwrap();
//! assert_eq!(reform.days(), 2299160.5);
//!
//! // Centuries since J2000.0
//! assert_eq!(day.to_century(), Century::j2000());
//! assert_eq!(Century::new(1.0).to_day().days(), 2488070.0);
//! ```
//!
//! A `chrono::DateTime` can be converted directly with [`Day::from_datetime`].

pub mod calendar;
pub mod century;
pub mod constants;
pub mod day;
pub mod errors;
pub mod parsing;

pub use calendar::{
    convert_calendar_to_julian_day, julian_day_from_datetime, julian_day_number,
    CalendarTimestamp,
};
pub use century::Century;
pub use day::Day;
pub use errors::{TimeError, TimeResult};
pub use parsing::{parse_iso8601, ParsedTimestamp};
