//! Manual corrections: editing, creating and deleting past records.

use chrono::{NaiveDate, NaiveTime};
use timekeeper_core::errors::{TrackerError, TrackerResult};
use timekeeper_core::models::{TimeField, YearMonth};
use timekeeper_core::time::{arrival_instant, parse_date, parse_time_of_day};
use tracing::{info, warn};

use super::{
    DialogEngine, Step, TurnContext, error_key, is_back, main_menu_step, recoverable,
    report_menu_step,
};
use crate::i18n::{Key, fill};
use crate::intent::{Intent, classify};
use crate::menu::{self, Reply};
use crate::session::{DialogState, NewRecordPhase};

impl DialogEngine {
    /// Dates of the current month to pick from, plus new/delete actions.
    pub(super) async fn edit_menu_step(&self, ctx: &TurnContext) -> TrackerResult<Step> {
        let dates = self.dates_in_month(ctx, YearMonth::of(ctx.today())).await?;
        Ok(Step::goto(DialogState::EditReportMenu).say(Reply::with_menu(
            ctx.text(Key::ChooseDateOrAction),
            menu::edit_menu(ctx.lang, &dates),
        )))
    }

    fn new_record_date_step(ctx: &TurnContext) -> Step {
        Step::goto(DialogState::AwaitingNewRecordDate).say(Reply::with_menu(
            fill(ctx.lang, Key::CreatingNewRecord, &[&ctx.today().to_string()]),
            menu::new_record_date(ctx.lang),
        ))
    }

    fn cancel_prompt(ctx: &TurnContext, next: DialogState, key: Key) -> Step {
        Step::goto(next).say(Reply::with_menu(ctx.text(key), menu::cancel_only(ctx.lang)))
    }

    /// The edit list (`deleting == false`) and the delete list share their
    /// actions; a typed date either opens the record or asks to delete it.
    pub(super) async fn on_date_list(
        &self,
        ctx: &TurnContext,
        input: &str,
        deleting: bool,
    ) -> TrackerResult<Step> {
        match classify(input, &[Intent::Back, Intent::NewRecord, Intent::DeleteRecord]) {
            Some(Intent::Back) => return Ok(report_menu_step(ctx.lang)),
            Some(Intent::NewRecord) => return Ok(Self::new_record_date_step(ctx)),
            Some(Intent::DeleteRecord) => {
                let dates = self.dates_in_month(ctx, YearMonth::of(ctx.today())).await?;
                return Ok(Step::goto(DialogState::AwaitingDateSelection).say(Reply::with_menu(
                    ctx.text(Key::ChooseDateToDelete),
                    menu::delete_menu(ctx.lang, &dates),
                )));
            }
            _ => {}
        }

        let here = if deleting {
            DialogState::AwaitingDateSelection
        } else {
            DialogState::EditReportMenu
        };
        let date = match parse_date(input) {
            Ok(date) => date,
            Err(err) => return Ok(Step::goto(here).note(ctx.text(error_key(&err)))),
        };

        if deleting {
            return Ok(
                Step::goto(DialogState::AwaitingDeleteConfirmation { date }).say(Reply::with_menu(
                    fill(ctx.lang, Key::ConfirmDelete, &[&date.to_string()]),
                    menu::confirm_delete(ctx.lang, date),
                )),
            );
        }
        if self.store.get_record(ctx.user_id, date).await?.is_none() {
            return Ok(Step::goto(here).note(ctx.text(Key::NoDayRecords)));
        }
        Ok(Step::goto(DialogState::AwaitingEditChoice { date }).say(Reply::with_menu(
            fill(ctx.lang, Key::EditWhat, &[&date.to_string()]),
            menu::edit_choice(ctx.lang),
        )))
    }

    pub(super) async fn on_edit_choice(
        &self,
        ctx: &TurnContext,
        date: NaiveDate,
        input: &str,
    ) -> TrackerResult<Step> {
        let candidates = [Intent::EditArrival, Intent::EditDeparture, Intent::Back];
        let field = match classify(input, &candidates) {
            Some(Intent::EditArrival) => TimeField::Arrival,
            Some(Intent::EditDeparture) => TimeField::Departure,
            Some(Intent::Back) => return self.edit_menu_step(ctx).await,
            _ => {
                return Ok(Step::goto(DialogState::AwaitingEditChoice { date }).say(
                    Reply::with_menu(
                        fill(ctx.lang, Key::EditWhat, &[&date.to_string()]),
                        menu::edit_choice(ctx.lang),
                    ),
                ));
            }
        };
        Ok(Self::cancel_prompt(
            ctx,
            DialogState::AwaitingNewTimeValue { date, field },
            Key::EnterNewTime,
        ))
    }

    pub(super) async fn on_new_time_value(
        &self,
        ctx: &TurnContext,
        date: NaiveDate,
        field: TimeField,
        input: &str,
    ) -> TrackerResult<Step> {
        if is_back(input) {
            return Ok(report_menu_step(ctx.lang));
        }
        let time = match parse_time_of_day(input) {
            Ok(time) => time,
            Err(err) => {
                return Ok(Step::goto(DialogState::AwaitingNewTimeValue { date, field })
                    .note(ctx.text(error_key(&err))));
            }
        };

        let updated = {
            let _guard = self.record_locks.lock((ctx.user_id, date)).await;
            let updated = self.store.update_time(ctx.user_id, date, field, time).await?;
            if updated {
                self.sync_reminder(ctx, date).await?;
            }
            updated
        };

        let message = if !updated {
            ctx.text(Key::NoDayRecords).to_string()
        } else if date == ctx.today() {
            info!(user_id = ctx.user_id, %date, ?field, %time, "time edited");
            ctx.text(Key::TimeUpdated).to_string()
        } else {
            info!(user_id = ctx.user_id, %date, ?field, %time, "time edited");
            fill(ctx.lang, Key::TimeUpdatedForDate, &[&date.to_string()])
        };
        Ok(report_menu_step(ctx.lang).prefixed(message))
    }

    /// Keep the reminder in line with an edited record. Today's record, or
    /// whichever record the pending reminder belongs to (an overnight shift
    /// started yesterday), is re-armed while open and cancelled once closed.
    async fn sync_reminder(&self, ctx: &TurnContext, date: NaiveDate) -> TrackerResult<()> {
        let owns_reminder = self.reminders.armed_shift(ctx.user_id).await == Some(date);
        if date != ctx.today() && !owns_reminder {
            return Ok(());
        }
        match self.store.get_record(ctx.user_id, date).await? {
            Some(record) if record.is_open() => {
                if let Some(arrival) = record.arrival {
                    let arrival = arrival_instant(date, arrival, ctx.tz);
                    self.reminders.arm(ctx.user_id, arrival).await;
                }
            }
            _ => self.reminders.disarm_shift(ctx.user_id, date).await,
        }
        Ok(())
    }

    pub(super) async fn on_new_record_date(
        &self,
        ctx: &TurnContext,
        input: &str,
    ) -> TrackerResult<Step> {
        let candidates = [
            Intent::Back,
            Intent::Cancel,
            Intent::TodayDate,
            Intent::EnterManually,
        ];
        let date = match classify(input, &candidates) {
            Some(Intent::Back | Intent::Cancel) => return self.edit_menu_step(ctx).await,
            Some(Intent::EnterManually) => {
                return Ok(Self::cancel_prompt(
                    ctx,
                    DialogState::AwaitingNewRecordDate,
                    Key::EnterDateFormat,
                ));
            }
            Some(Intent::TodayDate) => ctx.today(),
            _ => match parse_date(input) {
                Ok(date) => date,
                Err(err) => {
                    return Ok(Self::new_record_date_step(ctx).prefixed(ctx.text(error_key(&err))));
                }
            },
        };

        match recoverable(self.check_new_record_date(ctx, date).await)? {
            Ok(()) => Ok(Self::cancel_prompt(
                ctx,
                DialogState::AwaitingNewRecordTime {
                    date,
                    phase: NewRecordPhase::AwaitingArrival,
                },
                Key::EnterArrivalTime,
            )),
            Err(err) => Ok(self
                .edit_menu_step(ctx)
                .await?
                .prefixed(ctx.text(error_key(&err)))),
        }
    }

    async fn check_new_record_date(&self, ctx: &TurnContext, date: NaiveDate) -> TrackerResult<()> {
        if date > ctx.today() {
            return Err(TrackerError::FutureDateRejected(date));
        }
        if self.store.get_record(ctx.user_id, date).await?.is_some() {
            return Err(TrackerError::RecordAlreadyExists(date));
        }
        Ok(())
    }

    /// Collects arrival then departure. Leaving after the arrival keeps the
    /// record open; it can be finished later through the edit list.
    pub(super) async fn on_new_record_time(
        &self,
        ctx: &TurnContext,
        date: NaiveDate,
        phase: NewRecordPhase,
        input: &str,
    ) -> TrackerResult<Step> {
        if is_back(input) {
            return self.edit_menu_step(ctx).await;
        }
        let time = match parse_time_of_day(input) {
            Ok(time) => time,
            Err(err) => {
                return Ok(Self::cancel_prompt(
                    ctx,
                    DialogState::AwaitingNewRecordTime { date, phase },
                    error_key(&err),
                ));
            }
        };

        match phase {
            NewRecordPhase::AwaitingArrival => {
                match recoverable(self.create_arrival(ctx, date, time).await)? {
                    Ok(()) => Ok(Self::cancel_prompt(
                        ctx,
                        DialogState::AwaitingNewRecordTime {
                            date,
                            phase: NewRecordPhase::AwaitingDeparture,
                        },
                        Key::ArrivalTimeSaved,
                    )),
                    Err(err) => Ok(self
                        .edit_menu_step(ctx)
                        .await?
                        .prefixed(ctx.text(error_key(&err)))),
                }
            }
            NewRecordPhase::AwaitingDeparture => {
                match recoverable(self.create_departure(ctx, date, time).await)? {
                    Ok(()) => {
                        Ok(report_menu_step(ctx.lang).prefixed(ctx.text(Key::DepartureTimeSaved)))
                    }
                    Err(err) => Ok(self
                        .edit_menu_step(ctx)
                        .await?
                        .prefixed(ctx.text(error_key(&err)))),
                }
            }
        }
    }

    async fn create_arrival(
        &self,
        ctx: &TurnContext,
        date: NaiveDate,
        time: NaiveTime,
    ) -> TrackerResult<()> {
        let _guard = self.record_locks.lock((ctx.user_id, date)).await;
        if !self.store.put_arrival(ctx.user_id, date, time).await? {
            return Err(TrackerError::RecordAlreadyExists(date));
        }
        info!(user_id = ctx.user_id, %date, arrival = %time, "manual record opened");
        Ok(())
    }

    async fn create_departure(
        &self,
        ctx: &TurnContext,
        date: NaiveDate,
        time: NaiveTime,
    ) -> TrackerResult<()> {
        let _guard = self.record_locks.lock((ctx.user_id, date)).await;
        if !self.store.put_departure(ctx.user_id, date, time).await? {
            return Err(TrackerError::DuplicateDeparture(date));
        }
        info!(user_id = ctx.user_id, %date, departure = %time, "manual record closed");
        Ok(())
    }

    /// Answer to the delete prompt. A storage failure here is reported as a
    /// failed deletion and the dialog still returns to the main menu.
    pub(super) async fn confirm_delete(
        &self,
        ctx: &TurnContext,
        date: NaiveDate,
        accepted: bool,
    ) -> Step {
        if !accepted {
            return report_menu_step(ctx.lang).prefixed(ctx.text(Key::DeleteCancelled));
        }

        let deleted = {
            let _guard = self.record_locks.lock((ctx.user_id, date)).await;
            self.store.delete_record(ctx.user_id, date).await
        };
        let message = match deleted {
            Ok(true) => {
                info!(user_id = ctx.user_id, %date, "record deleted");
                self.reminders.disarm_shift(ctx.user_id, date).await;
                fill(ctx.lang, Key::RecordDeleted, &[&date.to_string()])
            }
            Ok(false) => ctx.text(Key::NoDayRecords).to_string(),
            Err(err) => {
                warn!(user_id = ctx.user_id, %date, error = %err, "failed to delete record");
                ctx.text(Key::DeleteFailed).to_string()
            }
        };
        main_menu_step(ctx.lang, Key::WelcomeBack).prefixed(message)
    }
}
