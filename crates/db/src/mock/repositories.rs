use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use timekeeper_core::models::{Language, TimeField, TimeRecord, UserId, YearMonth};
use timekeeper_core::store::TimeStore;

// Mock store for testing failure paths
mock! {
    pub TimeStore {}

    #[async_trait]
    impl TimeStore for TimeStore {
        async fn get_record(&self, user_id: UserId, date: NaiveDate) -> eyre::Result<Option<TimeRecord>>;

        async fn put_arrival(&self, user_id: UserId, date: NaiveDate, time: NaiveTime) -> eyre::Result<bool>;

        async fn put_departure(&self, user_id: UserId, date: NaiveDate, time: NaiveTime) -> eyre::Result<bool>;

        async fn update_time(
            &self,
            user_id: UserId,
            date: NaiveDate,
            field: TimeField,
            time: NaiveTime,
        ) -> eyre::Result<bool>;

        async fn delete_record(&self, user_id: UserId, date: NaiveDate) -> eyre::Result<bool>;

        async fn list_records_for_month(
            &self,
            user_id: UserId,
            month: YearMonth,
        ) -> eyre::Result<Vec<TimeRecord>>;

        async fn list_distinct_months(&self, user_id: UserId) -> eyre::Result<Vec<YearMonth>>;

        async fn get_rate(&self, user_id: UserId) -> eyre::Result<Option<f64>>;

        async fn set_rate(&self, user_id: UserId, rate: f64) -> eyre::Result<()>;

        async fn get_timezone(&self, user_id: UserId) -> eyre::Result<Option<String>>;

        async fn set_timezone(&self, user_id: UserId, timezone: &str) -> eyre::Result<()>;

        async fn get_language(&self, user_id: UserId) -> eyre::Result<Option<Language>>;

        async fn set_language(&self, user_id: UserId, language: Language) -> eyre::Result<()>;
    }
}
