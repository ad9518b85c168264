use std::collections::{BTreeMap, BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use timekeeper_core::models::{Language, TimeField, TimeRecord, UserId, YearMonth};
use timekeeper_core::store::TimeStore;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Profile {
    rate: Option<f64>,
    timezone: Option<String>,
    language: Option<Language>,
}

/// [`TimeStore`] kept entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<(UserId, NaiveDate), TimeRecord>>,
    profiles: RwLock<HashMap<UserId, Profile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, replacing whatever was stored for that day.
    pub async fn insert(&self, record: TimeRecord) {
        self.records
            .write()
            .await
            .insert((record.user_id, record.date), record);
    }

    pub async fn record_count(&self, user_id: UserId) -> usize {
        self.records
            .read()
            .await
            .keys()
            .filter(|(owner, _)| *owner == user_id)
            .count()
    }
}

#[async_trait]
impl TimeStore for MemoryStore {
    async fn get_record(&self, user_id: UserId, date: NaiveDate) -> Result<Option<TimeRecord>> {
        Ok(self.records.read().await.get(&(user_id, date)).cloned())
    }

    async fn put_arrival(&self, user_id: UserId, date: NaiveDate, time: NaiveTime) -> Result<bool> {
        let mut records = self.records.write().await;
        if records.contains_key(&(user_id, date)) {
            return Ok(false);
        }
        records.insert(
            (user_id, date),
            TimeRecord {
                user_id,
                date,
                arrival: Some(time),
                departure: None,
            },
        );
        Ok(true)
    }

    async fn put_departure(&self, user_id: UserId, date: NaiveDate, time: NaiveTime) -> Result<bool> {
        let mut records = self.records.write().await;
        match records.get_mut(&(user_id, date)) {
            Some(record) if record.is_open() => {
                record.departure = Some(time);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn update_time(
        &self,
        user_id: UserId,
        date: NaiveDate,
        field: TimeField,
        time: NaiveTime,
    ) -> Result<bool> {
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(&(user_id, date)) else {
            return Ok(false);
        };
        match field {
            TimeField::Arrival => record.arrival = Some(time),
            TimeField::Departure => record.departure = Some(time),
        }
        Ok(true)
    }

    async fn delete_record(&self, user_id: UserId, date: NaiveDate) -> Result<bool> {
        Ok(self.records.write().await.remove(&(user_id, date)).is_some())
    }

    async fn list_records_for_month(&self, user_id: UserId, month: YearMonth) -> Result<Vec<TimeRecord>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|record| record.user_id == user_id && month.contains(record.date))
            .cloned()
            .collect())
    }

    async fn list_distinct_months(&self, user_id: UserId) -> Result<Vec<YearMonth>> {
        let months: BTreeSet<YearMonth> = self
            .records
            .read()
            .await
            .values()
            .filter(|record| record.user_id == user_id)
            .map(|record| YearMonth::of(record.date))
            .collect();
        Ok(months.into_iter().rev().collect())
    }

    async fn get_rate(&self, user_id: UserId) -> Result<Option<f64>> {
        Ok(self.profiles.read().await.get(&user_id).and_then(|p| p.rate))
    }

    async fn set_rate(&self, user_id: UserId, rate: f64) -> Result<()> {
        self.profiles.write().await.entry(user_id).or_default().rate = Some(rate);
        Ok(())
    }

    async fn get_timezone(&self, user_id: UserId) -> Result<Option<String>> {
        Ok(self
            .profiles
            .read()
            .await
            .get(&user_id)
            .and_then(|p| p.timezone.clone()))
    }

    async fn set_timezone(&self, user_id: UserId, timezone: &str) -> Result<()> {
        self.profiles.write().await.entry(user_id).or_default().timezone = Some(timezone.to_string());
        Ok(())
    }

    async fn get_language(&self, user_id: UserId) -> Result<Option<Language>> {
        Ok(self.profiles.read().await.get(&user_id).and_then(|p| p.language))
    }

    async fn set_language(&self, user_id: UserId, language: Language) -> Result<()> {
        self.profiles.write().await.entry(user_id).or_default().language = Some(language);
        Ok(())
    }
}
