#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use eyre::{Result, eyre};
use timekeeper_bot::dialog::DialogEngine;
use timekeeper_bot::menu::{Inbound, Reply};
use timekeeper_bot::outbound::Outbound;
use timekeeper_bot::reminder::{ReminderScheduler, ShiftEndNotifier};
use timekeeper_core::clock::ManualClock;
use timekeeper_core::models::UserId;
use timekeeper_core::store::TimeStore;
use tokio::sync::Mutex;

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Keeps every reminder it is asked to deliver; optionally fails each one.
#[derive(Default)]
pub struct RecordingNotifier {
    pub delivered: Mutex<Vec<(UserId, DateTime<Tz>)>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn delivered(&self) -> Vec<(UserId, DateTime<Tz>)> {
        self.delivered.lock().await.clone()
    }
}

#[async_trait]
impl ShiftEndNotifier for RecordingNotifier {
    async fn notify(&self, user_id: UserId, shift_end: DateTime<Tz>) -> Result<()> {
        self.delivered.lock().await.push((user_id, shift_end));
        if self.fail {
            return Err(eyre!("recipient unreachable"));
        }
        Ok(())
    }
}

/// Collects outbound replies per user.
#[derive(Default)]
pub struct RecordingOutbound {
    pub sent: Mutex<Vec<(UserId, Reply)>>,
}

impl RecordingOutbound {
    pub async fn sent_to(&self, user_id: UserId) -> Vec<Reply> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|(to, _)| *to == user_id)
            .map(|(_, reply)| reply.clone())
            .collect()
    }
}

#[async_trait]
impl Outbound for RecordingOutbound {
    async fn send(&self, user_id: UserId, reply: &Reply) -> Result<()> {
        self.sent.lock().await.push((user_id, reply.clone()));
        Ok(())
    }
}

/// A dialog engine over `store` with a pinned clock.
pub struct Harness {
    pub engine: DialogEngine,
    pub clock: Arc<ManualClock>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(store: Arc<dyn TimeStore>, now: DateTime<Utc>) -> Self {
        let clock = Arc::new(ManualClock::new(now));
        let notifier = Arc::new(RecordingNotifier::default());
        let reminders = Arc::new(ReminderScheduler::new(clock.clone(), notifier.clone()));
        let engine = DialogEngine::new(store, clock.clone(), reminders, "PLN");
        Self {
            engine,
            clock,
            notifier,
        }
    }

    /// Send text and return the reply texts.
    pub async fn say(&self, user_id: UserId, input: &str) -> Vec<String> {
        self.engine
            .handle(user_id, Inbound::from_text(input))
            .await
            .replies
            .into_iter()
            .map(|reply| reply.text)
            .collect()
    }

    pub async fn start(&self, user_id: UserId) {
        self.engine.handle(user_id, Inbound::Start).await;
    }
}
