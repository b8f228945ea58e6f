use crate::calendar::{convert_calendar_to_julian_day, CalendarTimestamp};
use crate::constants::NANOSECONDS_PER_MILLISECOND;
use crate::day::Day;
use crate::{TimeError, TimeResult};
use std::ops::RangeInclusive;
use std::str::FromStr;

const MAX_ISO8601_LENGTH: usize = 40;

const SECONDS_PER_HOUR: i32 = 3600;

/// Calendar fields read from text together with the UTC offset they carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedTimestamp {
    pub timestamp: CalendarTimestamp,
    /// Seconds east of UTC. Zero for `Z` or no designator.
    pub utc_offset_seconds: i32,
}

impl ParsedTimestamp {
    pub fn to_julian_day(&self) -> Day {
        convert_calendar_to_julian_day(&self.timestamp, self.utc_offset_seconds)
    }
}

impl FromStr for ParsedTimestamp {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iso8601(s)
    }
}

/// Parses `YYYY-MM-DD[T| ]HH:MM:SS[.fff][Z|+HH:MM|-HH:MM|+HHMM|-HHMM]`.
///
/// Fractional seconds are truncated to milliseconds.
pub fn parse_iso8601(s: &str) -> TimeResult<ParsedTimestamp> {
    parse_timestamp(s).inspect_err(|err| {
        tracing::debug!(input = s, error = %err, "rejected ISO 8601 timestamp");
    })
}

fn parse_timestamp(s: &str) -> TimeResult<ParsedTimestamp> {
    let s = s.trim();

    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::parse_error("Input too long"));
    }

    let separator_pos = s.find('T').or_else(|| s.find(' ')).ok_or_else(|| {
        TimeError::parse_error(format!(
            "Invalid datetime format: '{}'. Expected YYYY-MM-DDTHH:MM:SS",
            s
        ))
    })?;

    let (date_part, time_part_with_sep) = s.split_at(separator_pos);
    let (time_part, utc_offset_seconds) = split_offset(&time_part_with_sep[1..])?;

    let (year, month, day) = parse_date(date_part)?;
    let (hour, minute, second, millisecond) = parse_time(time_part)?;

    Ok(ParsedTimestamp {
        timestamp: CalendarTimestamp::new(year, month, day, hour, minute, second)
            .with_millisecond(millisecond),
        utc_offset_seconds,
    })
}

fn parse_date(date_part: &str) -> TimeResult<(i32, i32, i32)> {
    let (sign, unsigned) = match date_part.as_bytes().first() {
        Some(b'-') => (-1, &date_part[1..]),
        Some(b'+') => (1, &date_part[1..]),
        _ => (1, date_part),
    };

    let date_components: Vec<&str> = unsigned.split('-').collect();
    if date_components.len() != 3 {
        return Err(TimeError::parse_error(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }

    let year = sign * parse_digits(date_components[0], 4..=4, "year")?;
    let month = parse_digits(date_components[1], 1..=2, "month")?;
    let day = parse_digits(date_components[2], 1..=2, "day")?;

    if !(1..=12).contains(&month) {
        return Err(TimeError::parse_error(format!(
            "Month out of range: {}",
            month
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(TimeError::parse_error(format!("Day out of range: {}", day)));
    }

    Ok((year, month, day))
}

fn parse_time(time_part: &str) -> TimeResult<(i32, i32, i32, i32)> {
    let time_components: Vec<&str> = time_part.split(':').collect();
    if time_components.len() != 3 {
        return Err(TimeError::parse_error(format!(
            "Invalid time format: '{}'. Expected HH:MM:SS",
            time_part
        )));
    }

    let hour = parse_digits(time_components[0], 1..=2, "hour")?;
    let minute = parse_digits(time_components[1], 1..=2, "minute")?;

    let (whole, fraction) = match time_components[2].split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (time_components[2], None),
    };
    let second = parse_digits(whole, 1..=2, "second")?;
    let millisecond = match fraction {
        Some(fraction) => parse_millisecond(fraction)?,
        None => 0,
    };

    if hour > 23 {
        return Err(TimeError::parse_error(format!(
            "Hour out of range: {}",
            hour
        )));
    }
    if minute > 59 {
        return Err(TimeError::parse_error(format!(
            "Minute out of range: {}",
            minute
        )));
    }
    // 60 is allowed for a leap second
    if second > 60 {
        return Err(TimeError::parse_error(format!(
            "Second out of range: {}",
            second
        )));
    }

    Ok((hour, minute, second, millisecond))
}

fn parse_millisecond(fraction: &str) -> TimeResult<i32> {
    if fraction.is_empty()
        || fraction.len() > 9
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(TimeError::parse_error(format!(
            "Invalid fractional second: '{}'",
            fraction
        )));
    }

    let nanos = fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32);

    Ok((nanos / NANOSECONDS_PER_MILLISECOND) as i32)
}

/// Splits a trailing `Z` or `±HH:MM` / `±HHMM` designator off the time part.
fn split_offset(time_part: &str) -> TimeResult<(&str, i32)> {
    if let Some(time) = time_part.strip_suffix('Z') {
        return Ok((time, 0));
    }

    let Some(pos) = time_part.find(['+', '-']) else {
        return Ok((time_part, 0));
    };

    let (time, designator) = time_part.split_at(pos);
    let sign = if designator.starts_with('-') { -1 } else { 1 };
    let body = &designator[1..];

    if !body.is_ascii() {
        return Err(TimeError::invalid_offset(format!(
            "Malformed designator: '{}'",
            designator
        )));
    }

    let (hours, minutes) = match body.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None if body.len() == 4 => body.split_at(2),
        None if body.len() == 2 => (body, "00"),
        None => {
            return Err(TimeError::invalid_offset(format!(
                "Malformed designator: '{}'",
                designator
            )))
        }
    };

    let parse = |text: &str| -> TimeResult<i32> {
        parse_digits(text, 2..=2, "offset").map_err(|_| {
            TimeError::invalid_offset(format!("Malformed designator: '{}'", designator))
        })
    };
    let hours = parse(hours)?;
    let minutes = parse(minutes)?;

    if hours > 23 {
        return Err(TimeError::invalid_offset(format!(
            "Hours out of range: {}",
            hours
        )));
    }
    if minutes > 59 {
        return Err(TimeError::invalid_offset(format!(
            "Minutes out of range: {}",
            minutes
        )));
    }

    Ok((time, sign * (hours * SECONDS_PER_HOUR + minutes * 60)))
}

fn parse_digits(text: &str, widths: RangeInclusive<usize>, field: &str) -> TimeResult<i32> {
    if !widths.contains(&text.len()) {
        return Err(TimeError::parse_error(format!(
            "Invalid {} format: '{}'",
            field, text
        )));
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::parse_error(format!(
            "Invalid {}: '{}'",
            field, text
        )));
    }

    Ok(text.bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as i32))
}
