use celestial_julian::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
use celestial_julian::{
    convert_calendar_to_julian_day, julian_day_number, parse_iso8601, CalendarTimestamp, Century,
    Day, TimeError,
};
use chrono::{FixedOffset, TimeZone, Utc};

// --- Known epochs ---

#[test]
fn j2000_calendar_epoch_is_exact() {
    let day = convert_calendar_to_julian_day(&CalendarTimestamp::new(2000, 1, 1, 12, 0, 0), 0);
    assert_eq!(day.days(), J2000_JD);
    assert_eq!(day.to_century().centuries(), 0.0);
}

#[test]
fn gregorian_reform_date() {
    let day = convert_calendar_to_julian_day(&CalendarTimestamp::new(1582, 10, 15, 0, 0, 0), 0);
    assert_eq!(day.days(), 2299160.5);
}

#[test]
fn noon_matches_julian_day_number() {
    for (y, m, d) in [(1858, 11, 17), (1970, 1, 1), (2024, 2, 29), (2100, 12, 31)] {
        let day = convert_calendar_to_julian_day(&CalendarTimestamp::new(y, m, d, 12, 0, 0), 0);
        assert_eq!(day.days(), julian_day_number(y, m, d) as f64);
    }
}

#[test]
fn modified_julian_day_zero_point() {
    // MJD 0 is 1858-11-17T00:00:00, JD 2400000.5
    let day = convert_calendar_to_julian_day(&CalendarTimestamp::new(1858, 11, 17, 0, 0, 0), 0);
    assert_eq!(day.days(), 2400000.5);
}

// --- Timezone offset ---

#[test]
fn one_hour_east_shifts_by_one_twenty_fourth() {
    let ts = CalendarTimestamp::new(2000, 1, 1, 12, 0, 0);
    let utc = convert_calendar_to_julian_day(&ts, 0).days();
    let east = convert_calendar_to_julian_day(&ts, 3600).days();
    assert!((east - utc - 3600.0 / 86400.0).abs() < 1e-9);
}

#[test]
fn chrono_fixed_offset_agrees_with_fields() {
    let tz = FixedOffset::west_opt(8 * 3600).unwrap();
    let dt = tz.with_ymd_and_hms(2021, 7, 4, 6, 30, 0).unwrap();
    let expected = convert_calendar_to_julian_day(
        &CalendarTimestamp::new(2021, 7, 4, 6, 30, 0),
        -8 * 3600,
    );
    assert_eq!(Day::from_datetime(&dt), expected);
}

#[test]
fn chrono_parser_and_fields_agree() {
    let dt = Utc.with_ymd_and_hms(1987, 4, 10, 19, 21, 0).unwrap();
    let parsed: Day = "1987-04-10T19:21:00Z".parse().unwrap();
    let fields = CalendarTimestamp::new(1987, 4, 10, 19, 21, 0).to_julian_day(0);
    assert_eq!(Day::from_datetime(&dt), fields);
    assert_eq!(parsed, fields);
}

// --- Day / Century ---

#[test]
fn day_century_round_trip() {
    for x in [0.0, -1.0e6, 2299160.5, J2000_JD, 2460000.25, 5.0e6] {
        let back = Day::new(x).to_century().to_day().days();
        assert!((back - x).abs() < 1e-12 * x.abs().max(J2000_JD), "{}", x);
    }
}

#[test]
fn century_day_round_trip() {
    for c in [-20.0, -0.5, 0.0, 0.24, 1.0, 30.0] {
        let back = Century::new(c).to_day().to_century().centuries();
        assert!((back - c).abs() < 1e-9, "{}", c);
    }
}

#[test]
fn adding_a_century_of_days() {
    let day = Day::j2000().add(DAYS_PER_JULIAN_CENTURY);
    assert_eq!(day.to_century(), Century::new(1.0));
}

// --- Parsing ---

#[test]
fn parse_errors_are_reported() {
    assert!(matches!(
        parse_iso8601("2000-01-01"),
        Err(TimeError::ParseError(_))
    ));
    assert!(matches!(
        parse_iso8601("2000-01-01T12:00:00+25:00"),
        Err(TimeError::InvalidOffset(_))
    ));
}
