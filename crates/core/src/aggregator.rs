//! Turns stored shift records into daily, monthly and per-day summaries.
//!
//! The functions here are pure: callers fetch the rows and the user's rate,
//! this module does the arithmetic. Hours and money are rounded to two
//! decimals on the way out; totals are summed from unrounded durations.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::errors::{TrackerError, TrackerResult};
use crate::models::{LineItem, LineKind, Report, TimeRecord, TodayStatus, YearMonth};
use crate::time::{hours, record_duration, round2};

/// Report for `date`: that day's shift plus, when it runs into `date`,
/// yesterday's overnight shift.
pub fn daily_report(
    date: NaiveDate,
    today: Option<&TimeRecord>,
    yesterday: Option<&TimeRecord>,
    rate: Option<f64>,
    tz: Tz,
) -> TrackerResult<Report> {
    let mut lines = Vec::new();
    let mut total = 0.0;

    let continuation = yesterday.filter(|record| {
        date.pred_opt() == Some(record.date) && (record.is_open() || record.crosses_midnight())
    });
    if let Some(record) = continuation {
        total += push_line(&mut lines, record, LineKind::OvernightContinuation, tz);
    }
    if let Some(record) = today.filter(|record| record.date == date && record.arrival.is_some()) {
        total += push_line(&mut lines, record, LineKind::Shift, tz);
    }

    if lines.is_empty() {
        return Err(TrackerError::NoRecords);
    }
    Ok(finish(lines, total, rate))
}

/// One line per distinct date in `month`, in date order.
///
/// Rows are sorted first and then folded in a single pass; several rows on
/// the same date are summed into one line. Rows still open are skipped.
pub fn monthly_report(
    month: YearMonth,
    rows: Vec<TimeRecord>,
    rate: Option<f64>,
    tz: Tz,
) -> TrackerResult<Report> {
    let mut rows: Vec<TimeRecord> = rows.into_iter().filter(|row| month.contains(row.date)).collect();
    if rows.is_empty() {
        return Err(TrackerError::NoRecords);
    }
    rows.sort_by_key(|row| row.date);

    let mut lines = Vec::new();
    let mut total = 0.0;
    let mut current: Option<(NaiveDate, f64)> = None;

    for row in &rows {
        let Some(duration) = record_duration(row, tz) else {
            continue;
        };
        let worked = hours(duration);
        total += worked;

        current = match current {
            Some((date, day_hours)) if date == row.date => Some((date, day_hours + worked)),
            Some((date, day_hours)) => {
                lines.push(day_line(date, day_hours));
                Some((row.date, worked))
            }
            None => Some((row.date, worked)),
        };
    }
    if let Some((date, day_hours)) = current {
        lines.push(day_line(date, day_hours));
    }

    Ok(finish(lines, total, rate))
}

/// Detail for a single stored day, with earnings for that day alone.
pub fn day_report(record: Option<&TimeRecord>, rate: Option<f64>, tz: Tz) -> TrackerResult<Report> {
    let record = record
        .filter(|record| record.arrival.is_some())
        .ok_or(TrackerError::NoRecords)?;
    let mut lines = Vec::with_capacity(1);
    let total = push_line(&mut lines, record, LineKind::Shift, tz);
    Ok(finish(lines, total, rate))
}

pub fn today_status(today: Option<&TimeRecord>, yesterday: Option<&TimeRecord>, tz: Tz) -> TodayStatus {
    if let Some(record) = today {
        if let Some(arrival) = record.arrival {
            return match (record.departure, record_duration(record, tz)) {
                (Some(departure), Some(duration)) => TodayStatus::Closed {
                    arrival,
                    departure,
                    hours: round2(hours(duration)),
                },
                _ => TodayStatus::Open { arrival },
            };
        }
    }
    match yesterday {
        Some(record) if record.is_open() => TodayStatus::OpenSinceYesterday {
            arrival: record.arrival.unwrap_or_default(),
        },
        _ => TodayStatus::Empty,
    }
}

fn push_line(lines: &mut Vec<LineItem>, record: &TimeRecord, kind: LineKind, tz: Tz) -> f64 {
    let worked = record_duration(record, tz).map(hours);
    lines.push(LineItem {
        date: record.date,
        kind,
        arrival: record.arrival,
        departure: record.departure,
        hours: worked.map(round2),
    });
    worked.unwrap_or(0.0)
}

fn day_line(date: NaiveDate, day_hours: f64) -> LineItem {
    LineItem {
        date,
        kind: LineKind::Shift,
        arrival: None,
        departure: None,
        hours: Some(round2(day_hours)),
    }
}

fn finish(lines: Vec<LineItem>, total: f64, rate: Option<f64>) -> Report {
    Report {
        lines,
        total_hours: round2(total),
        earnings: rate.filter(|rate| *rate > 0.0).map(|rate| round2(total * rate)),
    }
}
