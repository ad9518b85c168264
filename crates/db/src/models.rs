use chrono::{NaiveDate, NaiveTime};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timekeeper_core::models::TimeRecord;
use timekeeper_core::time::{DATE_FORMAT, TIME_FORMAT};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeRecord {
    pub user_id: i64,
    pub date: String,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
}

impl DbTimeRecord {
    pub fn into_record(self) -> Result<TimeRecord> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .wrap_err_with(|| format!("stored date {:?} is malformed", self.date))?;
        Ok(TimeRecord {
            user_id: self.user_id,
            date,
            arrival: parse_stored_time(self.arrival_time.as_deref())?,
            departure: parse_stored_time(self.departure_time.as_deref())?,
        })
    }
}

fn parse_stored_time(value: Option<&str>) -> Result<Option<NaiveTime>> {
    value
        .map(|value| {
            NaiveTime::parse_from_str(value, TIME_FORMAT)
                .wrap_err_with(|| format!("stored time {value:?} is malformed"))
        })
        .transpose()
}
