use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use timekeeper_core::aggregator::{daily_report, day_report, monthly_report, today_status};
use timekeeper_core::errors::TrackerError;
use timekeeper_core::models::{LineKind, TimeRecord, TodayStatus, YearMonth};

const UTC: chrono_tz::Tz = chrono_tz::UTC;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
}

fn record(day: u32, arrival: Option<NaiveTime>, departure: Option<NaiveTime>) -> TimeRecord {
    TimeRecord {
        user_id: 7,
        date: d(day),
        arrival,
        departure,
    }
}

fn january() -> YearMonth {
    YearMonth::new(2025, 1).unwrap()
}

#[test]
fn test_daily_report_with_rate() {
    let today = record(9, Some(t(9, 0)), Some(t(18, 0)));
    let report = daily_report(d(9), Some(&today), None, Some(20.0), UTC).unwrap();

    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.lines[0].kind, LineKind::Shift);
    assert_eq!(report.lines[0].hours, Some(9.0));
    assert_eq!(report.total_hours, 9.0);
    assert_eq!(report.earnings, Some(180.0));
}

#[test]
fn test_daily_report_without_rate_has_no_earnings() {
    let today = record(9, Some(t(9, 0)), Some(t(17, 30)));
    let report = daily_report(d(9), Some(&today), None, None, UTC).unwrap();
    assert_eq!(report.total_hours, 8.5);
    assert_eq!(report.earnings, None);
}

#[test]
fn test_daily_report_open_overnight_and_closed_today() {
    let yesterday = record(8, Some(t(22, 0)), None);
    let today = record(9, Some(t(9, 0)), Some(t(13, 0)));
    let report = daily_report(d(9), Some(&today), Some(&yesterday), None, UTC).unwrap();

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[0].kind, LineKind::OvernightContinuation);
    assert_eq!(report.lines[0].hours, None);
    assert_eq!(report.lines[1].kind, LineKind::Shift);
    let sum: f64 = report.lines.iter().filter_map(|line| line.hours).sum();
    assert_eq!(report.total_hours, sum);
    assert_eq!(report.total_hours, 4.0);
}

#[test]
fn test_daily_report_closed_overnight_counts_into_total() {
    let yesterday = record(8, Some(t(22, 0)), Some(t(6, 0)));
    let today = record(9, Some(t(14, 0)), Some(t(16, 0)));
    let report = daily_report(d(9), Some(&today), Some(&yesterday), Some(10.0), UTC).unwrap();

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[0].hours, Some(8.0));
    assert_eq!(report.lines[1].hours, Some(2.0));
    assert_eq!(report.total_hours, 10.0);
    assert_eq!(report.earnings, Some(100.0));
}

#[test]
fn test_daily_report_ignores_yesterday_day_shift() {
    let yesterday = record(8, Some(t(9, 0)), Some(t(17, 0)));
    let today = record(9, Some(t(9, 0)), None);
    let report = daily_report(d(9), Some(&today), Some(&yesterday), None, UTC).unwrap();

    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.lines[0].date, d(9));
    assert_eq!(report.lines[0].hours, None);
    assert_eq!(report.total_hours, 0.0);
}

#[test]
fn test_daily_report_nothing_found() {
    let yesterday = record(8, Some(t(9, 0)), Some(t(17, 0)));
    assert!(matches!(
        daily_report(d(9), None, None, None, UTC),
        Err(TrackerError::NoRecords)
    ));
    assert!(matches!(
        daily_report(d(9), None, Some(&yesterday), None, UTC),
        Err(TrackerError::NoRecords)
    ));
}

#[test]
fn test_monthly_report_sorts_before_grouping() {
    // day 5 rows arrive interleaved with day 3 rows
    let rows = vec![
        record(5, Some(t(9, 0)), Some(t(10, 0))),
        record(3, Some(t(8, 0)), Some(t(12, 0))),
        record(5, Some(t(13, 0)), Some(t(15, 30))),
        record(3, Some(t(13, 0)), Some(t(14, 0))),
        record(5, Some(t(20, 0)), Some(t(21, 0))),
    ];
    let report = monthly_report(january(), rows, None, UTC).unwrap();

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[0].date, d(3));
    assert_eq!(report.lines[0].hours, Some(5.0));
    assert_eq!(report.lines[1].date, d(5));
    assert_eq!(report.lines[1].hours, Some(4.5));
    assert_eq!(report.total_hours, 9.5);
}

#[test]
fn test_monthly_report_earnings_and_open_rows() {
    let rows = vec![
        record(2, Some(t(9, 0)), Some(t(17, 0))),
        record(3, Some(t(22, 0)), Some(t(6, 0))),
        record(4, Some(t(9, 0)), None),
    ];
    let report = monthly_report(january(), rows, Some(25.5), UTC).unwrap();

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.total_hours, 16.0);
    assert_eq!(report.earnings, Some(408.0));
}

#[test]
fn test_monthly_report_rounds_total_from_unrounded_sum() {
    // three 20-minute shifts: each line rounds to 0.33 but the total is 1.00
    let rows = vec![
        record(1, Some(t(9, 0)), Some(t(9, 20))),
        record(2, Some(t(9, 0)), Some(t(9, 20))),
        record(3, Some(t(9, 0)), Some(t(9, 20))),
    ];
    let report = monthly_report(january(), rows, Some(30.0), UTC).unwrap();
    assert_eq!(report.lines[0].hours, Some(0.33));
    assert_eq!(report.total_hours, 1.0);
    assert_eq!(report.earnings, Some(30.0));
}

#[rstest]
#[case(vec![])]
#[case(vec![record(9, Some(t(9, 0)), Some(t(10, 0)))])]
fn test_monthly_report_empty_month(#[case] rows: Vec<TimeRecord>) {
    let february = YearMonth::new(2025, 2).unwrap();
    assert!(matches!(
        monthly_report(february, rows, None, UTC),
        Err(TrackerError::NoRecords)
    ));
}

#[test]
fn test_day_report() {
    let closed = record(9, Some(t(8, 0)), Some(t(16, 15)));
    let report = day_report(Some(&closed), Some(12.0), UTC).unwrap();
    assert_eq!(report.total_hours, 8.25);
    assert_eq!(report.earnings, Some(99.0));

    let open = record(9, Some(t(8, 0)), None);
    let report = day_report(Some(&open), Some(12.0), UTC).unwrap();
    assert_eq!(report.lines[0].hours, None);
    assert_eq!(report.earnings, Some(0.0));

    assert!(matches!(day_report(None, None, UTC), Err(TrackerError::NoRecords)));
}

#[test]
fn test_today_status() {
    let closed = record(9, Some(t(9, 0)), Some(t(18, 0)));
    let open = record(9, Some(t(9, 0)), None);
    let overnight = record(8, Some(t(22, 0)), None);

    assert_eq!(
        today_status(Some(&closed), None, UTC),
        TodayStatus::Closed {
            arrival: t(9, 0),
            departure: t(18, 0),
            hours: 9.0
        }
    );
    assert_eq!(
        today_status(Some(&open), Some(&overnight), UTC),
        TodayStatus::Open { arrival: t(9, 0) }
    );
    assert_eq!(
        today_status(None, Some(&overnight), UTC),
        TodayStatus::OpenSinceYesterday { arrival: t(22, 0) }
    );
    assert_eq!(today_status(None, None, UTC), TodayStatus::Empty);
}
