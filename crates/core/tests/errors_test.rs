use chrono::NaiveDate;
use std::error::Error;
use timekeeper_core::errors::{TrackerError, TrackerResult};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()
}

#[test]
fn test_tracker_error_display() {
    assert_eq!(
        TrackerError::InvalidTimeFormat("9h".to_string()).to_string(),
        "Invalid time format: 9h"
    );
    assert_eq!(
        TrackerError::DuplicateArrival(day()).to_string(),
        "Arrival already recorded for 2025-01-09"
    );
    assert_eq!(
        TrackerError::FutureDateRejected(day()).to_string(),
        "Cannot create records for future date 2025-01-09"
    );
    assert_eq!(TrackerError::NoRecords.to_string(), "No records found");
    assert!(
        TrackerError::Persistence(eyre::eyre!("disk full"))
            .to_string()
            .contains("Persistence error:")
    );
}

#[test]
fn test_input_errors_are_not_decision_errors() {
    let input = [
        TrackerError::InvalidTimeFormat(String::new()),
        TrackerError::InvalidDateFormat(String::new()),
        TrackerError::InvalidTimezoneChoice(String::new()),
        TrackerError::InvalidLanguageChoice(String::new()),
        TrackerError::InvalidRate(String::new()),
    ];
    for err in &input {
        assert!(err.is_input_error(), "{err}");
        assert!(!err.is_decision_error(), "{err}");
    }

    let decisions = [
        TrackerError::DuplicateArrival(day()),
        TrackerError::DuplicateDeparture(day()),
        TrackerError::NoOpenArrival,
        TrackerError::RecordAlreadyExists(day()),
        TrackerError::FutureDateRejected(day()),
    ];
    for err in &decisions {
        assert!(err.is_decision_error(), "{err}");
        assert!(!err.is_input_error(), "{err}");
    }
}

#[test]
fn test_persistence_error_from_report() {
    let err: TrackerError = eyre::eyre!("connection refused").into();
    assert!(matches!(err, TrackerError::Persistence(_)));
    assert!(!err.is_input_error());
    assert!(!err.is_decision_error());
    assert!(err.source().is_some());
}

#[test]
fn test_tracker_result() {
    let result: TrackerResult<u8> = Err(TrackerError::NoOpenArrival);
    assert!(result.is_err());
}
