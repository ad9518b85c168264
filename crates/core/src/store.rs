use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;

use crate::models::{Language, TimeField, TimeRecord, UserId, YearMonth};

/// Storage boundary for shift records and per-user settings.
///
/// Every method is scoped to one user. The record mutators report whether
/// they changed anything so callers can tell a duplicate from a success
/// without a separate read.
#[async_trait]
pub trait TimeStore: Send + Sync {
    async fn get_record(&self, user_id: UserId, date: NaiveDate) -> Result<Option<TimeRecord>>;

    /// Insert an open record. Returns `false` if one already exists for `date`.
    async fn put_arrival(&self, user_id: UserId, date: NaiveDate, time: NaiveTime) -> Result<bool>;

    /// Close an open record. Returns `false` if there is no open record for `date`.
    async fn put_departure(&self, user_id: UserId, date: NaiveDate, time: NaiveTime) -> Result<bool>;

    /// Overwrite one side of an existing record. Returns `false` if there is none.
    async fn update_time(
        &self,
        user_id: UserId,
        date: NaiveDate,
        field: TimeField,
        time: NaiveTime,
    ) -> Result<bool>;

    /// Returns `false` if there was nothing to delete.
    async fn delete_record(&self, user_id: UserId, date: NaiveDate) -> Result<bool>;

    /// Records dated inside `month`, ordered by date.
    async fn list_records_for_month(&self, user_id: UserId, month: YearMonth) -> Result<Vec<TimeRecord>>;

    /// Months with at least one record, newest first.
    async fn list_distinct_months(&self, user_id: UserId) -> Result<Vec<YearMonth>>;

    async fn get_rate(&self, user_id: UserId) -> Result<Option<f64>>;

    async fn set_rate(&self, user_id: UserId, rate: f64) -> Result<()>;

    async fn get_timezone(&self, user_id: UserId) -> Result<Option<String>>;

    async fn set_timezone(&self, user_id: UserId, timezone: &str) -> Result<()>;

    async fn get_language(&self, user_id: UserId) -> Result<Option<Language>>;

    async fn set_language(&self, user_id: UserId, language: Language) -> Result<()>;
}
