use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use timekeeper_core::models::{Language, TimeField, TimeRecord, UserId, YearMonth};
use timekeeper_core::store::TimeStore;

use crate::DbPool;
use crate::repositories::{profile, time_record};

/// [`TimeStore`] backed by the SQLite tables from [`crate::schema`].
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl TimeStore for SqliteStore {
    async fn get_record(&self, user_id: UserId, date: NaiveDate) -> Result<Option<TimeRecord>> {
        time_record::get_time_record(&self.pool, user_id, date).await
    }

    async fn put_arrival(&self, user_id: UserId, date: NaiveDate, time: NaiveTime) -> Result<bool> {
        time_record::insert_arrival(&self.pool, user_id, date, time).await
    }

    async fn put_departure(&self, user_id: UserId, date: NaiveDate, time: NaiveTime) -> Result<bool> {
        time_record::close_time_record(&self.pool, user_id, date, time).await
    }

    async fn update_time(
        &self,
        user_id: UserId,
        date: NaiveDate,
        field: TimeField,
        time: NaiveTime,
    ) -> Result<bool> {
        time_record::update_time_field(&self.pool, user_id, date, field, time).await
    }

    async fn delete_record(&self, user_id: UserId, date: NaiveDate) -> Result<bool> {
        time_record::delete_time_record(&self.pool, user_id, date).await
    }

    async fn list_records_for_month(&self, user_id: UserId, month: YearMonth) -> Result<Vec<TimeRecord>> {
        time_record::get_time_records_for_month(&self.pool, user_id, month).await
    }

    async fn list_distinct_months(&self, user_id: UserId) -> Result<Vec<YearMonth>> {
        time_record::get_distinct_months(&self.pool, user_id).await
    }

    async fn get_rate(&self, user_id: UserId) -> Result<Option<f64>> {
        profile::get_hourly_rate(&self.pool, user_id).await
    }

    async fn set_rate(&self, user_id: UserId, rate: f64) -> Result<()> {
        profile::upsert_hourly_rate(&self.pool, user_id, rate).await
    }

    async fn get_timezone(&self, user_id: UserId) -> Result<Option<String>> {
        profile::get_timezone(&self.pool, user_id).await
    }

    async fn set_timezone(&self, user_id: UserId, timezone: &str) -> Result<()> {
        profile::upsert_timezone(&self.pool, user_id, timezone).await
    }

    async fn get_language(&self, user_id: UserId) -> Result<Option<Language>> {
        profile::get_language(&self.pool, user_id).await
    }

    async fn set_language(&self, user_id: UserId, language: Language) -> Result<()> {
        profile::upsert_language(&self.pool, user_id, language).await
    }
}
