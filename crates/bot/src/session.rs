use chrono::NaiveDate;
use timekeeper_core::models::{TimeField, YearMonth};

/// Which half of a manually created record is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewRecordPhase {
    AwaitingArrival,
    AwaitingDeparture,
}

/// Where a user is in the conversation. Payloads carry exactly the data the
/// state needs; nothing survives a transition unless the next state names it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    MainMenu,
    TimeRecording,
    ReportMenu,
    SettingsMenu,
    EditReportMenu,
    /// Picking a date to delete.
    AwaitingDateSelection,
    AwaitingEditChoice {
        date: NaiveDate,
    },
    AwaitingNewTimeValue {
        date: NaiveDate,
        field: TimeField,
    },
    AwaitingNewRecordDate,
    AwaitingNewRecordTime {
        date: NaiveDate,
        phase: NewRecordPhase,
    },
    AwaitingDeleteConfirmation {
        date: NaiveDate,
    },
    AwaitingRateInput,
    SelectMonth,
    SelectDay {
        month: YearMonth,
    },
    ViewingMonthReport {
        month: YearMonth,
    },
    AwaitingTimezoneChoice,
    AwaitingLanguageChoice,
}

/// Per-user conversation cursor. Lives for the process lifetime only.
#[derive(Debug, Default)]
pub struct DialogSession {
    pub state: DialogState,
    pub onboarded: bool,
}
