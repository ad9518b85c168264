//! Main menu and the arrival/departure buttons.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use timekeeper_core::aggregator::today_status;
use timekeeper_core::errors::{TrackerError, TrackerResult};
use timekeeper_core::time::{TIME_FORMAT, expected_shift_end, hours, worked_duration};
use tracing::info;

use super::{
    DialogEngine, Step, TurnContext, error_key, main_menu_step, recoverable, time_recording_step,
};
use crate::i18n::Key;
use crate::intent::{Intent, classify};
use crate::menu::{self, Reply};
use crate::render;
use crate::session::DialogState;

impl DialogEngine {
    pub(super) async fn on_main_menu(&self, ctx: &TurnContext, input: &str) -> TrackerResult<Step> {
        match classify(input, &[Intent::RecordTime, Intent::Report, Intent::Settings]) {
            Some(Intent::RecordTime) => Ok(time_recording_step(ctx.lang)),
            Some(Intent::Report) => Ok(super::report_menu_step(ctx.lang)),
            Some(Intent::Settings) => Ok(super::settings_step(ctx.lang)),
            _ => self.today_stats(ctx).await,
        }
    }

    async fn today_stats(&self, ctx: &TurnContext) -> TrackerResult<Step> {
        let today = self.store.get_record(ctx.user_id, ctx.today()).await?;
        let yesterday = match ctx.yesterday() {
            Some(date) => self.store.get_record(ctx.user_id, date).await?,
            None => None,
        };
        let status = today_status(today.as_ref(), yesterday.as_ref(), ctx.tz);
        Ok(Step::goto(DialogState::MainMenu).say(Reply::with_menu(
            render::today_stats(ctx.lang, &status),
            menu::main_menu(ctx.lang),
        )))
    }

    pub(super) async fn on_time_recording(
        &self,
        ctx: &TurnContext,
        input: &str,
    ) -> TrackerResult<Step> {
        let candidates = [Intent::RecordArrival, Intent::RecordDeparture, Intent::Back];
        let message = match classify(input, &candidates) {
            Some(Intent::RecordArrival) => match recoverable(self.record_arrival(ctx).await)? {
                Ok(arrival) => format!(
                    "{} {}\n{} {}",
                    ctx.text(Key::ArrivalRecorded),
                    arrival.format(TIME_FORMAT),
                    ctx.text(Key::ExpectedShiftEnd),
                    expected_shift_end(arrival).format(TIME_FORMAT),
                ),
                Err(err) => ctx.text(error_key(&err)).to_string(),
            },
            Some(Intent::RecordDeparture) => match recoverable(self.record_departure(ctx).await)? {
                Ok(worked) => format!(
                    "{} {} {}\n{} {:.2} {}",
                    ctx.text(Key::DepartureRecorded),
                    ctx.today(),
                    ctx.now.format(TIME_FORMAT),
                    ctx.text(Key::WorkedShift),
                    hours(worked),
                    ctx.text(Key::Hours),
                ),
                Err(err) => ctx.text(error_key(&err)).to_string(),
            },
            Some(Intent::Back) => return Ok(main_menu_step(ctx.lang, Key::WelcomeBack)),
            _ => return Ok(time_recording_step(ctx.lang)),
        };
        Ok(Step::goto(DialogState::TimeRecording)
            .say(Reply::with_menu(message, menu::time_recording(ctx.lang))))
    }

    /// Open today's record at the current time and arm the shift-end reminder.
    pub(super) async fn record_arrival(&self, ctx: &TurnContext) -> TrackerResult<DateTime<Tz>> {
        let date = ctx.today();
        let arrival = ctx.now.time();
        let _guard = self.record_locks.lock((ctx.user_id, date)).await;

        if !self.store.put_arrival(ctx.user_id, date, arrival).await? {
            return Err(TrackerError::DuplicateArrival(date));
        }
        info!(user_id = ctx.user_id, %date, %arrival, "arrival recorded");

        self.reminders.arm(ctx.user_id, ctx.now).await;
        Ok(ctx.now)
    }

    /// Close the open shift at the current time and return its length.
    ///
    /// The reminder is cancelled once no open shift is left, and kept when
    /// storage fails.
    pub(super) async fn record_departure(&self, ctx: &TurnContext) -> TrackerResult<Duration> {
        let _today_guard = self.record_locks.lock((ctx.user_id, ctx.today())).await;
        let outcome = self.close_open_shift(ctx).await;
        match &outcome {
            Err(TrackerError::Persistence(_)) => {}
            _ => self.reminders.disarm(ctx.user_id).await,
        }
        outcome
    }

    /// Today's record is tried first; without one, an open record from
    /// yesterday is closed as an overnight shift. Nothing older is considered.
    /// The caller holds today's record lock.
    async fn close_open_shift(&self, ctx: &TurnContext) -> TrackerResult<Duration> {
        let today = ctx.today();
        let departure = ctx.now.time();

        match self.store.get_record(ctx.user_id, today).await? {
            Some(record) if record.departure.is_some() => Err(TrackerError::DuplicateDeparture(today)),
            Some(record) => match record.arrival {
                Some(arrival) => self.close_shift(ctx, today, arrival, departure).await,
                None => Err(TrackerError::NoOpenArrival),
            },
            None => {
                let Some(yesterday) = ctx.yesterday() else {
                    return Err(TrackerError::NoOpenArrival);
                };
                let _yesterday_guard = self.record_locks.lock((ctx.user_id, yesterday)).await;
                match self.store.get_record(ctx.user_id, yesterday).await? {
                    Some(record) if record.is_open() => match record.arrival {
                        Some(arrival) => self.close_shift(ctx, yesterday, arrival, departure).await,
                        None => Err(TrackerError::NoOpenArrival),
                    },
                    _ => Err(TrackerError::NoOpenArrival),
                }
            }
        }
    }

    async fn close_shift(
        &self,
        ctx: &TurnContext,
        date: NaiveDate,
        arrival: NaiveTime,
        departure: NaiveTime,
    ) -> TrackerResult<Duration> {
        if !self.store.put_departure(ctx.user_id, date, departure).await? {
            return Err(TrackerError::DuplicateDeparture(date));
        }
        let worked = worked_duration(date, arrival, departure, ctx.tz);
        info!(
            user_id = ctx.user_id,
            %date,
            %departure,
            minutes = worked.num_minutes(),
            "departure recorded"
        );
        Ok(worked)
    }
}
