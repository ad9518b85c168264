use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Arrival already recorded for {0}")]
    DuplicateArrival(NaiveDate),

    #[error("Departure already recorded for {0}")]
    DuplicateDeparture(NaiveDate),

    #[error("No open arrival to close")]
    NoOpenArrival,

    #[error("Record already exists for {0}")]
    RecordAlreadyExists(NaiveDate),

    #[error("Cannot create records for future date {0}")]
    FutureDateRejected(NaiveDate),

    #[error("No records found")]
    NoRecords,

    #[error("Unsupported timezone: {0}")]
    InvalidTimezoneChoice(String),

    #[error("Unsupported language: {0}")]
    InvalidLanguageChoice(String),

    #[error("Invalid hourly rate: {0}")]
    InvalidRate(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] eyre::Report),

    #[error("Delivery error: {0}")]
    Delivery(eyre::Report),
}

impl TrackerError {
    /// Malformed user input; the dialog re-prompts in the same state.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TrackerError::InvalidTimeFormat(_)
                | TrackerError::InvalidDateFormat(_)
                | TrackerError::InvalidTimezoneChoice(_)
                | TrackerError::InvalidLanguageChoice(_)
                | TrackerError::InvalidRate(_)
        )
    }

    /// Well-formed input that cannot be applied; the dialog falls back to a menu.
    pub fn is_decision_error(&self) -> bool {
        matches!(
            self,
            TrackerError::DuplicateArrival(_)
                | TrackerError::DuplicateDeparture(_)
                | TrackerError::NoOpenArrival
                | TrackerError::RecordAlreadyExists(_)
                | TrackerError::FutureDateRejected(_)
        )
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
