//! Time-of-day parsing and shift arithmetic.
//!
//! Records store wall-clock times on the shift's start date. Every
//! computation here turns those back into zoned instants in the user's
//! timezone before doing arithmetic, so DST transitions and overnight
//! shifts come out right.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;
use tracing::warn;

use crate::clock::Clock;
use crate::errors::{TrackerError, TrackerResult};
use crate::models::{DEFAULT_TIMEZONE, TimeRecord};

/// Nominal shift length used for the expected end and the reminder.
pub const SHIFT_HOURS: i64 = 8;

/// How long before the expected shift end the reminder fires.
pub const REMINDER_LEAD_MINUTES: i64 = 15;

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve a stored zone name, falling back to the default when it is
/// missing or unknown.
pub fn resolve_timezone(name: Option<&str>) -> Tz {
    match name {
        None => DEFAULT_TIMEZONE,
        Some(name) => name.parse::<Tz>().unwrap_or_else(|err| {
            warn!(timezone = name, error = %err, "Unknown timezone, using default");
            DEFAULT_TIMEZONE
        }),
    }
}

pub fn local_now(clock: &dyn Clock, tz: Tz) -> DateTime<Tz> {
    clock.now().with_timezone(&tz)
}

/// Accepts `HH:MM` or `HH:MM:SS` (24-hour). `HH:MM` comes back with zero seconds.
pub fn parse_time_of_day(input: &str) -> TrackerResult<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
        // leap-second notation (`23:59:60`) is not a valid clock reading here
        .filter(|time| time.nanosecond() < 1_000_000_000)
        .ok_or_else(|| TrackerError::InvalidTimeFormat(trimmed.to_string()))
}

/// Accepts `YYYY-MM-DD` only.
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.len() != 10 {
        return Err(TrackerError::InvalidDateFormat(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| TrackerError::InvalidDateFormat(trimmed.to_string()))
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Pin a wall-clock reading to an instant in `tz`.
///
/// Ambiguous readings (clocks going back) take the earlier instant. Readings
/// that fall into a DST gap are pushed forward by an hour.
pub fn localize(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}

pub fn arrival_instant(date: NaiveDate, arrival: NaiveTime, tz: Tz) -> DateTime<Tz> {
    localize(tz, date.and_time(arrival))
}

/// Worked time between two clock readings on `date`.
///
/// A departure earlier than the arrival belongs to the following day.
pub fn worked_duration(date: NaiveDate, arrival: NaiveTime, departure: NaiveTime, tz: Tz) -> Duration {
    let start = localize(tz, date.and_time(arrival));
    let mut end = localize(tz, date.and_time(departure));
    if end < start {
        if let Some(next_day) = date.succ_opt() {
            end = localize(tz, next_day.and_time(departure));
        }
    }
    end - start
}

/// Duration of a closed record; open records have none yet.
pub fn record_duration(record: &TimeRecord, tz: Tz) -> Option<Duration> {
    match (record.arrival, record.departure) {
        (Some(arrival), Some(departure)) => Some(worked_duration(record.date, arrival, departure, tz)),
        _ => None,
    }
}

pub fn expected_shift_end(arrival: DateTime<Tz>) -> DateTime<Tz> {
    arrival + Duration::hours(SHIFT_HOURS)
}

pub fn reminder_fire_at(arrival: DateTime<Tz>) -> DateTime<Tz> {
    expected_shift_end(arrival) - Duration::minutes(REMINDER_LEAD_MINUTES)
}

pub fn hours(duration: Duration) -> f64 {
    duration.num_seconds() as f64 / 3600.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_times_are_pushed_forward() {
        // 2024-03-31 02:30 does not exist in Warsaw
        let naive = NaiveDate::from_ymd_opt(2024, 3, 31)
            .and_then(|d| d.and_hms_opt(2, 30, 0))
            .unwrap();
        let dt = localize(chrono_tz::Europe::Warsaw, naive);
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(3, 30, 0).unwrap());
    }

    #[test]
    fn leap_second_notation_is_rejected() {
        assert!(parse_time_of_day("23:59:60").is_err());
    }
}
