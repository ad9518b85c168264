use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use rstest::rstest;
use timekeeper_core::clock::ManualClock;
use timekeeper_core::errors::TrackerError;
use timekeeper_core::models::DEFAULT_TIMEZONE;
use timekeeper_core::time::{
    expected_shift_end, format_time, local_now, parse_date, parse_time_of_day, reminder_fire_at,
    resolve_timezone, worked_duration,
};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[rstest]
#[case("09:00", "09:00:00")]
#[case("9:05", "09:05:00")]
#[case(" 18:30 ", "18:30:00")]
#[case("23:59:59", "23:59:59")]
#[case("00:00", "00:00:00")]
fn test_parse_time_of_day_normalizes(#[case] input: &str, #[case] expected: &str) {
    let parsed = parse_time_of_day(input).unwrap();
    assert_eq!(format_time(parsed), expected);

    // re-parsing the normalized form is stable
    let again = parse_time_of_day(&format_time(parsed)).unwrap();
    assert_eq!(again, parsed);
}

#[rstest]
#[case("")]
#[case("9")]
#[case("24:00")]
#[case("12:60")]
#[case("12-30")]
#[case("12:30:00 pm")]
#[case("noon")]
fn test_parse_time_of_day_rejects(#[case] input: &str) {
    assert!(matches!(
        parse_time_of_day(input),
        Err(TrackerError::InvalidTimeFormat(_))
    ));
}

#[rstest]
#[case("2025-01-09", Some(d(2025, 1, 9)))]
#[case(" 2024-02-29 ", Some(d(2024, 2, 29)))]
#[case("2023-02-29", None)]
#[case("09.01.2025", None)]
#[case("2025-1-9", None)]
#[case("January 2025", None)]
fn test_parse_date(#[case] input: &str, #[case] expected: Option<NaiveDate>) {
    match expected {
        Some(date) => assert_eq!(parse_date(input).unwrap(), date),
        None => assert!(matches!(parse_date(input), Err(TrackerError::InvalidDateFormat(_)))),
    }
}

#[test]
fn test_same_day_shift() {
    let worked = worked_duration(d(2025, 1, 9), t(9, 0), t(18, 0), chrono_tz::UTC);
    assert_eq!(worked, Duration::hours(9));
}

#[rstest]
#[case(t(22, 0), t(6, 0))]
#[case(t(23, 30), t(0, 15))]
#[case(t(18, 45), t(2, 5))]
#[case(t(12, 0), t(11, 59))]
fn test_overnight_shift_rolls_departure_to_next_day(#[case] arrival: NaiveTime, #[case] departure: NaiveTime) {
    let worked = worked_duration(d(2025, 1, 9), arrival, departure, chrono_tz::UTC);
    let midnight = t(0, 0);
    let until_midnight = Duration::hours(24) - (arrival - midnight);
    let after_midnight = departure - midnight;
    assert!(worked > Duration::zero());
    assert_eq!(worked, until_midnight + after_midnight);
}

#[test]
fn test_night_shift_is_exactly_eight_hours() {
    let worked = worked_duration(d(2025, 1, 9), t(22, 0), t(6, 0), DEFAULT_TIMEZONE);
    assert_eq!(worked, Duration::hours(8));
}

#[test]
fn test_equal_times_are_zero() {
    let worked = worked_duration(d(2025, 1, 9), t(9, 0), t(9, 0), chrono_tz::UTC);
    assert_eq!(worked, Duration::zero());
}

#[test]
fn test_dst_night_counts_real_elapsed_time() {
    // clocks go back at 03:00 on 2024-10-27 in Warsaw, so the night is an hour longer
    let worked = worked_duration(d(2024, 10, 26), t(22, 0), t(6, 0), chrono_tz::Europe::Warsaw);
    assert_eq!(worked, Duration::hours(9));
}

#[test]
fn test_resolve_timezone_falls_back() {
    assert_eq!(resolve_timezone(None), DEFAULT_TIMEZONE);
    assert_eq!(resolve_timezone(Some("Mars/Olympus")), DEFAULT_TIMEZONE);
    assert_eq!(resolve_timezone(Some("Asia/Tokyo")), chrono_tz::Asia::Tokyo);
}

#[test]
fn test_local_now_uses_zone() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 9, 23, 30, 0).unwrap());
    let tokyo: Tz = chrono_tz::Asia::Tokyo;
    let now = local_now(&clock, tokyo);
    assert_eq!(now.date_naive(), d(2025, 1, 10));
    assert_eq!(now.time(), t(8, 30));
}

#[test]
fn test_shift_end_and_reminder() {
    let arrival = chrono_tz::UTC.with_ymd_and_hms(2025, 1, 9, 9, 0, 0).unwrap();
    assert_eq!(expected_shift_end(arrival).time(), t(17, 0));
    let fire_at = reminder_fire_at(arrival);
    assert_eq!(fire_at.time(), t(16, 45));
    assert_eq!(fire_at.date_naive(), d(2025, 1, 9));
}
