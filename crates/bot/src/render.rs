use std::fmt::Write;

use chrono::{NaiveDate, NaiveTime};
use timekeeper_core::models::{Language, LineItem, LineKind, Report, TodayStatus, YearMonth};
use timekeeper_core::time::{format_date, format_time};

use crate::i18n::{self, Key, fill, text};

fn departure_text(lang: Language, departure: Option<NaiveTime>) -> String {
    departure.map_or_else(|| text(lang, Key::NotRecordedYet).to_string(), format_time)
}

fn push_earnings(out: &mut String, lang: Language, key: Key, earnings: Option<f64>, currency: &str) {
    if let Some(earnings) = earnings {
        let _ = write!(out, "\n{} {earnings:.2} {currency}", text(lang, key));
    }
}

fn push_shift(out: &mut String, lang: Language, line: &LineItem, worked_key: Key) {
    let arrival = line.arrival.map(format_time).unwrap_or_default();
    match line.kind {
        LineKind::OvernightContinuation => {
            let _ = writeln!(out, "{}", text(lang, Key::NightShift));
            let _ = writeln!(
                out,
                "{} {arrival} ({})",
                text(lang, Key::Arrival),
                text(lang, Key::Yesterday)
            );
        }
        LineKind::Shift => {
            let _ = writeln!(out, "{} {arrival}", text(lang, Key::Arrival));
        }
    }
    let _ = writeln!(
        out,
        "{} {}",
        text(lang, Key::Departure),
        departure_text(lang, line.departure)
    );
    if let Some(hours) = line.hours {
        let _ = writeln!(out, "{} {hours:.2} {}", text(lang, worked_key), text(lang, Key::Hours));
    }
}

pub fn daily_report(lang: Language, date: NaiveDate, report: &Report, currency: &str) -> String {
    let mut out = fill(lang, Key::DailyReportTitle, &[&format_date(date)]);
    out.push('\n');
    for line in &report.lines {
        let worked = match line.kind {
            LineKind::Shift => Key::WorkedToday,
            LineKind::OvernightContinuation => Key::WorkedShift,
        };
        push_shift(&mut out, lang, line, worked);
    }
    push_earnings(&mut out, lang, Key::Earnings, report.earnings, currency);
    out.trim_end().to_string()
}

pub fn monthly_report(lang: Language, month: YearMonth, report: &Report, currency: &str) -> String {
    let mut out = fill(lang, Key::MonthlyReportTitle, &[&i18n::month_label(lang, month)]);
    out.push_str("\n\n");
    for line in &report.lines {
        let hours = line.hours.unwrap_or_default();
        let _ = writeln!(out, "{}: {hours:.2} {}", format_date(line.date), text(lang, Key::Hours));
    }
    let _ = write!(
        out,
        "\n{} {:.2} {}",
        text(lang, Key::WorkedMonth),
        report.total_hours,
        text(lang, Key::Hours)
    );
    push_earnings(&mut out, lang, Key::EarningsMonth, report.earnings, currency);
    out
}

pub fn day_detail(lang: Language, date: NaiveDate, report: &Report, currency: &str) -> String {
    let mut out = fill(lang, Key::DetailedReportFor, &[&format_date(date)]);
    out.push_str("\n\n");
    for line in &report.lines {
        push_shift(&mut out, lang, line, Key::Worked);
    }
    if report.lines.iter().any(|line| line.hours.is_some()) {
        push_earnings(&mut out, lang, Key::Earnings, report.earnings, currency);
    }
    out.trim_end().to_string()
}

pub fn today_stats(lang: Language, status: &TodayStatus) -> String {
    match status {
        TodayStatus::Closed {
            arrival,
            departure,
            hours,
        } => format!(
            "{}\n\n{} {}\n{} {}\n{} {hours:.2} {}",
            text(lang, Key::StatsToday),
            text(lang, Key::Arrival),
            format_time(*arrival),
            text(lang, Key::Departure),
            format_time(*departure),
            text(lang, Key::WorkedToday),
            text(lang, Key::Hours),
        ),
        TodayStatus::Open { arrival } => format!(
            "{}\n\n{} {}\n{} {}",
            text(lang, Key::StatsToday),
            text(lang, Key::Arrival),
            format_time(*arrival),
            text(lang, Key::Departure),
            text(lang, Key::NotRecordedYet),
        ),
        TodayStatus::OpenSinceYesterday { arrival } => format!(
            "{}\n\n{} {} ({})\n{} {}",
            text(lang, Key::CurrentShift),
            text(lang, Key::Arrival),
            format_time(*arrival),
            text(lang, Key::Yesterday),
            text(lang, Key::Departure),
            text(lang, Key::NotRecordedYet),
        ),
        TodayStatus::Empty => text(lang, Key::NoTimeRecords).to_string(),
    }
}
