/// Julian Day of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

pub const NANOSECONDS_PER_MILLISECOND: u32 = 1_000_000;

/// Julian Days start at noon, so the day fraction is measured from hour 12.
pub const JULIAN_DAY_START_HOUR: f64 = 12.0;
