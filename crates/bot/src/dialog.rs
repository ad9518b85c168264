//! The per-user conversation state machine.
//!
//! Each inbound event is classified against the intents the current
//! [`DialogState`] accepts, handled, and answered with one or more replies
//! plus the next state. Turns for one user are serialised by that user's
//! session lock; record mutations are additionally serialised per
//! `(user, date)`.
//!
//! A turn either applies completely or not at all: when the store fails, the
//! user gets a storage error and stays where they were.

mod editing;
mod recording;
mod reports;
mod settings;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, SubsecRound};
use chrono_tz::Tz;
use timekeeper_core::clock::Clock;
use timekeeper_core::errors::{TrackerError, TrackerResult};
use timekeeper_core::models::{Language, UserId};
use timekeeper_core::store::TimeStore;
use timekeeper_core::time::{local_now, resolve_timezone};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::i18n::{Key, fill, text};
use crate::intent::Intent;
use crate::locks::KeyedLocks;
use crate::menu::{self, Inbound, Reply};
use crate::reminder::ReminderScheduler;
use crate::session::{DialogSession, DialogState};

/// Result of one handled event.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub replies: Vec<Reply>,
    /// True the first time this process hears from the user.
    pub first_contact: bool,
}

/// Replies produced by a handler and the state to move to.
#[derive(Debug)]
struct Step {
    replies: Vec<Reply>,
    next: DialogState,
}

impl Step {
    fn goto(next: DialogState) -> Self {
        Self {
            replies: Vec::new(),
            next,
        }
    }

    fn say(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }

    fn note(self, text: impl Into<String>) -> Self {
        self.say(Reply::text(text))
    }

    /// Put a plain message in front of the replies already queued.
    fn prefixed(mut self, text: impl Into<String>) -> Self {
        self.replies.insert(0, Reply::text(text));
        self
    }
}

/// Everything a handler needs to know about the user for this turn.
#[derive(Debug, Clone, Copy)]
struct TurnContext {
    user_id: UserId,
    lang: Language,
    tz: Tz,
    now: DateTime<Tz>,
}

impl TurnContext {
    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    fn yesterday(&self) -> Option<NaiveDate> {
        self.today().pred_opt()
    }

    fn text(&self, key: Key) -> &'static str {
        text(self.lang, key)
    }
}

pub struct DialogEngine {
    store: Arc<dyn TimeStore>,
    clock: Arc<dyn Clock>,
    reminders: Arc<ReminderScheduler>,
    sessions: RwLock<HashMap<UserId, Arc<Mutex<DialogSession>>>>,
    record_locks: KeyedLocks<(UserId, NaiveDate)>,
    currency: String,
}

impl DialogEngine {
    pub fn new(
        store: Arc<dyn TimeStore>,
        clock: Arc<dyn Clock>,
        reminders: Arc<ReminderScheduler>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            store,
            clock,
            reminders,
            sessions: RwLock::new(HashMap::new()),
            record_locks: KeyedLocks::new(),
            currency: currency.into(),
        }
    }

    pub fn reminders(&self) -> &ReminderScheduler {
        &self.reminders
    }

    /// The user's language, or the default when it cannot be read.
    pub async fn language_of(&self, user_id: UserId) -> Language {
        match self.store.get_language(user_id).await {
            Ok(lang) => lang.unwrap_or_default(),
            Err(err) => {
                warn!(user_id, error = %err, "could not read language, using default");
                Language::default()
            }
        }
    }

    /// Current state of a user's session, if they have one.
    pub async fn state_of(&self, user_id: UserId) -> Option<DialogState> {
        let session = self.sessions.read().await.get(&user_id).cloned()?;
        let state = session.lock().await.state.clone();
        Some(state)
    }

    /// Handle one inbound event for `user_id`.
    pub async fn handle(&self, user_id: UserId, inbound: Inbound) -> Turn {
        let (session, first_contact) = self.session(user_id).await;
        let mut session = session.lock().await;
        let lang = self.language_of(user_id).await;

        // a brand new session always starts with the welcome
        let inbound = if first_contact { Inbound::Start } else { inbound };

        let step = match self.context(user_id, lang).await {
            Ok(ctx) => self.step(&ctx, &mut session, inbound).await,
            Err(err) => Err(err),
        };

        match step {
            Ok(step) => {
                debug!(user_id, from = ?session.state, to = ?step.next, "transition");
                session.state = step.next;
                Turn {
                    replies: step.replies,
                    first_contact,
                }
            }
            Err(err) => {
                warn!(user_id, state = ?session.state, error = %err, "turn failed, state unchanged");
                Turn {
                    replies: vec![Reply::text(text(lang, Key::StorageError))],
                    first_contact,
                }
            }
        }
    }

    async fn session(&self, user_id: UserId) -> (Arc<Mutex<DialogSession>>, bool) {
        if let Some(session) = self.sessions.read().await.get(&user_id) {
            return (Arc::clone(session), false);
        }
        match self.sessions.write().await.entry(user_id) {
            Entry::Occupied(entry) => (Arc::clone(entry.get()), false),
            Entry::Vacant(entry) => (Arc::clone(entry.insert(Arc::default())), true),
        }
    }

    async fn context(&self, user_id: UserId, lang: Language) -> TrackerResult<TurnContext> {
        let tz = resolve_timezone(self.store.get_timezone(user_id).await?.as_deref());
        let now = local_now(self.clock.as_ref(), tz).trunc_subsecs(0);
        Ok(TurnContext {
            user_id,
            lang,
            tz,
            now,
        })
    }

    async fn step(
        &self,
        ctx: &TurnContext,
        session: &mut DialogSession,
        inbound: Inbound,
    ) -> TrackerResult<Step> {
        match inbound {
            Inbound::Start => {
                let key = if session.onboarded {
                    Key::WelcomeBack
                } else {
                    Key::WelcomeFirst
                };
                session.onboarded = true;
                Ok(main_menu_step(ctx.lang, key))
            }
            Inbound::Confirm { accepted, date } => match session.state {
                DialogState::AwaitingDeleteConfirmation { date: pending }
                    if date.is_none_or(|date| date == pending) =>
                {
                    Ok(self.confirm_delete(ctx, pending, accepted).await)
                }
                // a button from an older prompt
                ref state => Ok(Step::goto(state.clone())),
            },
            Inbound::Text(input) => self.on_text(ctx, session.state.clone(), &input).await,
        }
    }

    async fn on_text(
        &self,
        ctx: &TurnContext,
        state: DialogState,
        input: &str,
    ) -> TrackerResult<Step> {
        match state {
            DialogState::MainMenu => self.on_main_menu(ctx, input).await,
            DialogState::TimeRecording => self.on_time_recording(ctx, input).await,
            DialogState::ReportMenu => self.on_report_menu(ctx, input).await,
            DialogState::SettingsMenu => self.on_settings_menu(ctx, input).await,
            DialogState::EditReportMenu => self.on_date_list(ctx, input, false).await,
            DialogState::AwaitingDateSelection => self.on_date_list(ctx, input, true).await,
            DialogState::AwaitingEditChoice { date } => self.on_edit_choice(ctx, date, input).await,
            DialogState::AwaitingNewTimeValue { date, field } => {
                self.on_new_time_value(ctx, date, field, input).await
            }
            DialogState::AwaitingNewRecordDate => self.on_new_record_date(ctx, input).await,
            DialogState::AwaitingNewRecordTime { date, phase } => {
                self.on_new_record_time(ctx, date, phase, input).await
            }
            DialogState::AwaitingDeleteConfirmation { date } => Ok(Step::goto(state).say(
                Reply::with_menu(
                    fill(ctx.lang, Key::ConfirmDelete, &[&date.to_string()]),
                    menu::confirm_delete(ctx.lang, date),
                ),
            )),
            DialogState::AwaitingRateInput => self.on_rate_input(ctx, input).await,
            DialogState::SelectMonth => self.on_select_month(ctx, input).await,
            DialogState::ViewingMonthReport { month } => {
                self.on_viewing_month(ctx, month, input).await
            }
            DialogState::SelectDay { month } => self.on_select_day(ctx, month, input).await,
            DialogState::AwaitingTimezoneChoice => self.on_timezone_choice(ctx, input).await,
            DialogState::AwaitingLanguageChoice => self.on_language_choice(ctx, input).await,
        }
    }
}

/// Message key for a recoverable error.
fn error_key(err: &TrackerError) -> Key {
    match err {
        TrackerError::InvalidTimeFormat(_) => Key::InvalidTimeFormat,
        TrackerError::InvalidDateFormat(_) => Key::InvalidDateFormat,
        TrackerError::DuplicateArrival(_) => Key::AlreadyRecordedArrival,
        TrackerError::DuplicateDeparture(_) => Key::AlreadyRecordedDeparture,
        TrackerError::NoOpenArrival => Key::RecordArrivalFirst,
        TrackerError::RecordAlreadyExists(_) => Key::RecordExists,
        TrackerError::FutureDateRejected(_) => Key::NoFutureDates,
        TrackerError::NoRecords => Key::NoDayRecords,
        TrackerError::InvalidTimezoneChoice(_) => Key::InvalidTimezone,
        TrackerError::InvalidLanguageChoice(_) => Key::InvalidLanguage,
        TrackerError::InvalidRate(_) => Key::InvalidRate,
        TrackerError::Persistence(_) | TrackerError::Delivery(_) => Key::StorageError,
    }
}

/// Split a result into a recoverable user-facing error and everything else.
fn recoverable<T>(result: TrackerResult<T>) -> TrackerResult<Result<T, TrackerError>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(err) if err.is_input_error() || err.is_decision_error() => Ok(Err(err)),
        Err(err) => Err(err),
    }
}

fn is_back(input: &str) -> bool {
    crate::intent::classify(input, &[Intent::Back, Intent::Cancel]).is_some()
}

fn main_menu_step(lang: Language, key: Key) -> Step {
    Step::goto(DialogState::MainMenu).say(Reply::with_menu(text(lang, key), menu::main_menu(lang)))
}

fn time_recording_step(lang: Language) -> Step {
    Step::goto(DialogState::TimeRecording).say(Reply::with_menu(
        text(lang, Key::ChooseAction),
        menu::time_recording(lang),
    ))
}

fn report_menu_step(lang: Language) -> Step {
    Step::goto(DialogState::ReportMenu).say(Reply::with_menu(
        text(lang, Key::ChooseReportType),
        menu::report_menu(lang),
    ))
}

fn settings_step(lang: Language) -> Step {
    Step::goto(DialogState::SettingsMenu).say(Reply::with_menu(
        text(lang, Key::SettingsTitle),
        menu::settings_menu(lang),
    ))
}
