//! Shift-end reminders: at most one pending timer per user.
//!
//! Every arm gets a fresh ticket. A timer only delivers if the slot still
//! holds its own ticket when it wakes, and it removes the slot in the same
//! critical section, so delivery and disarm can never both win.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use eyre::Result;
use timekeeper_core::clock::Clock;
use timekeeper_core::errors::TrackerError;
use timekeeper_core::models::UserId;
use timekeeper_core::store::TimeStore;
use timekeeper_core::time::{expected_shift_end, reminder_fire_at};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::i18n::{Key, fill};
use crate::menu::Reply;
use crate::outbound::Outbound;

/// Delivers the "your shift is about to end" message.
#[async_trait]
pub trait ShiftEndNotifier: Send + Sync {
    async fn notify(&self, user_id: UserId, shift_end: DateTime<Tz>) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmOutcome {
    Scheduled { fire_at: DateTime<Tz> },
    /// The reminder time had already passed; nothing is pending.
    WindowPassed,
}

#[derive(Debug)]
struct Slot {
    ticket: u64,
    /// Local start date of the shift, which is the date of its record.
    shift_date: NaiveDate,
    fire_at: DateTime<Tz>,
    task: JoinHandle<()>,
}

type Slots = Arc<Mutex<HashMap<UserId, Slot>>>;

pub struct ReminderScheduler {
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn ShiftEndNotifier>,
    slots: Slots,
    tickets: AtomicU64,
}

impl ReminderScheduler {
    pub fn new(clock: Arc<dyn Clock>, notifier: Arc<dyn ShiftEndNotifier>) -> Self {
        Self {
            clock,
            notifier,
            slots: Arc::new(Mutex::new(HashMap::new())),
            tickets: AtomicU64::new(0),
        }
    }

    /// Replace the user's reminder with one for a shift that started at
    /// `arrival`. Any previous reminder is cancelled either way.
    pub async fn arm(&self, user_id: UserId, arrival: DateTime<Tz>) -> ArmOutcome {
        let shift_end = expected_shift_end(arrival);
        let fire_at = reminder_fire_at(arrival);
        let now = self.clock.now();

        let mut slots = self.slots.lock().await;
        if let Some(previous) = slots.remove(&user_id) {
            previous.task.abort();
            debug!(user_id, fire_at = %previous.fire_at, "superseded pending reminder");
        }

        let Ok(delay) = (fire_at.with_timezone(&Utc) - now).to_std() else {
            warn!(user_id, %fire_at, "reminder time has already passed");
            return ArmOutcome::WindowPassed;
        };
        if delay.is_zero() {
            warn!(user_id, %fire_at, "reminder time has already passed");
            return ArmOutcome::WindowPassed;
        }

        let ticket = self.tickets.fetch_add(1, Ordering::Relaxed);
        let task = tokio::spawn(deliver(
            Arc::clone(&self.slots),
            Arc::clone(&self.notifier),
            user_id,
            ticket,
            delay,
            shift_end,
        ));
        slots.insert(
            user_id,
            Slot {
                ticket,
                shift_date: arrival.date_naive(),
                fire_at,
                task,
            },
        );

        info!(user_id, %fire_at, "reminder scheduled");
        ArmOutcome::Scheduled { fire_at }
    }

    /// Cancel the user's pending reminder, if any.
    pub async fn disarm(&self, user_id: UserId) {
        if let Some(slot) = self.slots.lock().await.remove(&user_id) {
            slot.task.abort();
            debug!(user_id, "reminder cancelled");
        }
    }

    /// Cancel the user's pending reminder only if it belongs to the shift
    /// recorded on `date`.
    pub async fn disarm_shift(&self, user_id: UserId, date: NaiveDate) {
        let mut slots = self.slots.lock().await;
        if slots.get(&user_id).is_some_and(|slot| slot.shift_date == date) {
            if let Some(slot) = slots.remove(&user_id) {
                slot.task.abort();
                debug!(user_id, %date, "reminder cancelled");
            }
        }
    }

    /// Date of the shift the user's pending reminder belongs to.
    pub async fn armed_shift(&self, user_id: UserId) -> Option<NaiveDate> {
        self.slots.lock().await.get(&user_id).map(|slot| slot.shift_date)
    }

    /// When the user's pending reminder will fire.
    pub async fn live_fire_at(&self, user_id: UserId) -> Option<DateTime<Tz>> {
        self.slots.lock().await.get(&user_id).map(|slot| slot.fire_at)
    }

    /// Number of users with a pending reminder.
    pub async fn live_count(&self) -> usize {
        self.slots.lock().await.len()
    }
}

async fn deliver(
    slots: Slots,
    notifier: Arc<dyn ShiftEndNotifier>,
    user_id: UserId,
    ticket: u64,
    delay: std::time::Duration,
    shift_end: DateTime<Tz>,
) {
    tokio::time::sleep(delay).await;

    {
        let mut slots = slots.lock().await;
        match slots.get(&user_id) {
            Some(slot) if slot.ticket == ticket => {
                slots.remove(&user_id);
            }
            _ => return,
        }
    }

    // the slot is already clear; a failed send is dropped, never retried
    match notifier
        .notify(user_id, shift_end)
        .await
        .map_err(TrackerError::Delivery)
    {
        Ok(()) => info!(user_id, %shift_end, "shift end reminder delivered"),
        Err(err) => warn!(user_id, error = %err, "failed to deliver shift end reminder"),
    }
}

/// Sends the reminder through an [`Outbound`] in the user's language.
pub struct OutboundNotifier {
    store: Arc<dyn TimeStore>,
    outbound: Arc<dyn Outbound>,
}

impl OutboundNotifier {
    pub fn new(store: Arc<dyn TimeStore>, outbound: Arc<dyn Outbound>) -> Self {
        Self { store, outbound }
    }
}

#[async_trait]
impl ShiftEndNotifier for OutboundNotifier {
    async fn notify(&self, user_id: UserId, shift_end: DateTime<Tz>) -> Result<()> {
        let lang = self.store.get_language(user_id).await?.unwrap_or_default();
        let text = fill(lang, Key::ShiftEndReminder, &[&shift_end.format("%H:%M").to_string()]);
        self.outbound.send(user_id, &Reply::text(text)).await
    }
}
