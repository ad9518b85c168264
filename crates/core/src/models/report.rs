use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// A shift that started on the reported day.
    Shift,
    /// Yesterday's shift running past midnight into the reported day.
    OvernightContinuation,
}

/// One row of a report: a date's worked hours, or `None` while still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub date: NaiveDate,
    pub kind: LineKind,
    pub arrival: Option<NaiveTime>,
    pub departure: Option<NaiveTime>,
    pub hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub lines: Vec<LineItem>,
    pub total_hours: f64,
    pub earnings: Option<f64>,
}

/// Snapshot shown when the user types free text on the main menu.
#[derive(Debug, Clone, PartialEq)]
pub enum TodayStatus {
    Closed {
        arrival: NaiveTime,
        departure: NaiveTime,
        hours: f64,
    },
    Open {
        arrival: NaiveTime,
    },
    OpenSinceYesterday {
        arrival: NaiveTime,
    },
    Empty,
}
