use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use timekeeper_core::models::{
    DEFAULT_TIMEZONE, Language, SUPPORTED_TIMEZONES, TimeRecord, YearMonth,
    is_supported_timezone,
};

#[rstest]
#[case("2025-01", Some((2025, 1)))]
#[case("1999-12", Some((1999, 12)))]
#[case("2025-13", None)]
#[case("2025-1", None)]
#[case("January 2025", None)]
#[case("", None)]
fn test_year_month_parse(#[case] input: &str, #[case] expected: Option<(i32, u32)>) {
    let parsed = input.parse::<YearMonth>().ok();
    assert_eq!(parsed.map(|m| (m.year(), m.month())), expected);
}

#[test]
fn test_year_month_token() {
    let month = YearMonth::new(2025, 3).unwrap();
    assert_eq!(month.to_string(), "2025-03");
    assert_eq!("2025-03".parse::<YearMonth>().unwrap(), month);
    assert!(month.contains(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
    assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
}

#[test]
fn test_record_state() {
    let nine = NaiveTime::from_hms_opt(9, 0, 0);
    let six = NaiveTime::from_hms_opt(6, 0, 0);
    let mut record = TimeRecord {
        user_id: 1,
        date: NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
        arrival: nine,
        departure: None,
    };
    assert!(record.is_open());
    assert!(!record.crosses_midnight());

    record.departure = six;
    assert!(record.is_closed());
    assert!(record.crosses_midnight());
}

#[test]
fn test_language_codes() {
    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
    assert_eq!(Language::from_code("de"), None);
    assert_eq!(Language::default(), Language::Ukrainian);
}

#[test]
fn test_supported_timezones_parse() {
    for name in SUPPORTED_TIMEZONES {
        assert!(name.parse::<chrono_tz::Tz>().is_ok(), "{name}");
        assert!(is_supported_timezone(name));
    }
    assert!(!is_supported_timezone("Europe/Berlin"));
}
