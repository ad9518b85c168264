//! Daily and monthly reports plus the month history browser.

use chrono::NaiveDate;
use timekeeper_core::aggregator::{daily_report, day_report, monthly_report};
use timekeeper_core::errors::{TrackerError, TrackerResult};
use timekeeper_core::models::YearMonth;
use timekeeper_core::time::parse_date;

use super::{DialogEngine, Step, TurnContext, main_menu_step, report_menu_step};
use crate::i18n::{Key, parse_month_label};
use crate::intent::{Intent, classify};
use crate::menu::{self, Reply};
use crate::render;
use crate::session::DialogState;

impl DialogEngine {
    pub(super) async fn on_report_menu(
        &self,
        ctx: &TurnContext,
        input: &str,
    ) -> TrackerResult<Step> {
        let candidates = [
            Intent::DailyReport,
            Intent::MonthlyReport,
            Intent::EditReport,
            Intent::Back,
        ];
        let message = match classify(input, &candidates) {
            Some(Intent::DailyReport) => self.daily_text(ctx).await?,
            Some(Intent::MonthlyReport) => {
                let month = YearMonth::of(ctx.today());
                match self.monthly_text(ctx, month).await {
                    Ok(text) => text,
                    Err(TrackerError::NoRecords) => ctx.text(Key::NoRecordsMonth).to_string(),
                    Err(err) => return Err(err),
                }
            }
            Some(Intent::EditReport) => return self.edit_menu_step(ctx).await,
            Some(Intent::Back) => return Ok(main_menu_step(ctx.lang, Key::WelcomeBack)),
            _ => return Ok(report_menu_step(ctx.lang)),
        };
        Ok(Step::goto(DialogState::ReportMenu)
            .say(Reply::with_menu(message, menu::report_menu(ctx.lang))))
    }

    async fn daily_text(&self, ctx: &TurnContext) -> TrackerResult<String> {
        let date = ctx.today();
        let today = self.store.get_record(ctx.user_id, date).await?;
        let yesterday = match ctx.yesterday() {
            Some(yesterday) => self.store.get_record(ctx.user_id, yesterday).await?,
            None => None,
        };
        let rate = self.store.get_rate(ctx.user_id).await?;

        match daily_report(date, today.as_ref(), yesterday.as_ref(), rate, ctx.tz) {
            Ok(report) => Ok(render::daily_report(ctx.lang, date, &report, &self.currency)),
            Err(TrackerError::NoRecords) => Ok(ctx.text(Key::NoRecordsToday).to_string()),
            Err(err) => Err(err),
        }
    }

    /// Rendered monthly report, or [`TrackerError::NoRecords`] for an empty month.
    async fn monthly_text(&self, ctx: &TurnContext, month: YearMonth) -> TrackerResult<String> {
        let rows = self.store.list_records_for_month(ctx.user_id, month).await?;
        let rate = self.store.get_rate(ctx.user_id).await?;
        let report = monthly_report(month, rows, rate, ctx.tz)?;
        Ok(render::monthly_report(ctx.lang, month, &report, &self.currency))
    }

    /// The list of months with data.
    pub(super) async fn history_step(&self, ctx: &TurnContext) -> TrackerResult<Step> {
        let months = self.store.list_distinct_months(ctx.user_id).await?;
        Ok(Step::goto(DialogState::SelectMonth).say(Reply::with_menu(
            ctx.text(Key::ChooseMonth),
            menu::months(ctx.lang, &months),
        )))
    }

    async fn month_report_step(&self, ctx: &TurnContext, month: YearMonth) -> TrackerResult<Step> {
        match self.monthly_text(ctx, month).await {
            Ok(text) => Ok(Step::goto(DialogState::ViewingMonthReport { month })
                .say(Reply::with_menu(text, menu::month_report(ctx.lang)))),
            Err(TrackerError::NoRecords) => Ok(self
                .history_step(ctx)
                .await?
                .prefixed(ctx.text(Key::NoRecordsMonth))),
            Err(err) => Err(err),
        }
    }

    pub(super) async fn on_select_month(
        &self,
        ctx: &TurnContext,
        input: &str,
    ) -> TrackerResult<Step> {
        if classify(input, &[Intent::Back]).is_some() {
            return Ok(super::settings_step(ctx.lang));
        }
        let month = input
            .trim()
            .parse::<YearMonth>()
            .ok()
            .or_else(|| parse_month_label(input));
        match month {
            Some(month) => self.month_report_step(ctx, month).await,
            None => Ok(Step::goto(DialogState::SelectMonth).note(ctx.text(Key::DateProcessingError))),
        }
    }

    pub(super) async fn on_viewing_month(
        &self,
        ctx: &TurnContext,
        month: YearMonth,
        input: &str,
    ) -> TrackerResult<Step> {
        let candidates = [
            Intent::SelectSpecificDay,
            Intent::BackToMonthSelection,
            Intent::Back,
        ];
        match classify(input, &candidates) {
            Some(Intent::SelectSpecificDay) => {
                let dates = self.dates_in_month(ctx, month).await?;
                Ok(Step::goto(DialogState::SelectDay { month }).say(Reply::with_menu(
                    ctx.text(Key::ChooseDayDetail),
                    menu::days(ctx.lang, &dates),
                )))
            }
            Some(Intent::BackToMonthSelection | Intent::Back) => self.history_step(ctx).await,
            _ => self.month_report_step(ctx, month).await,
        }
    }

    pub(super) async fn on_select_day(
        &self,
        ctx: &TurnContext,
        month: YearMonth,
        input: &str,
    ) -> TrackerResult<Step> {
        if classify(input, &[Intent::BackToReport, Intent::Back]).is_some() {
            return self.month_report_step(ctx, month).await;
        }
        let stay = Step::goto(DialogState::SelectDay { month });
        let Ok(date) = parse_date(input) else {
            return Ok(stay.note(ctx.text(Key::DateProcessingError)));
        };

        let record = self.store.get_record(ctx.user_id, date).await?;
        let rate = self.store.get_rate(ctx.user_id).await?;
        match day_report(record.as_ref(), rate, ctx.tz) {
            Ok(report) => Ok(stay.say(Reply::with_menu(
                render::day_detail(ctx.lang, date, &report, &self.currency),
                menu::back_to_report(ctx.lang),
            ))),
            Err(TrackerError::NoRecords) => Ok(stay.note(ctx.text(Key::NoDayRecords))),
            Err(err) => Err(err),
        }
    }

    /// Dates with a record in `month`, newest first.
    pub(super) async fn dates_in_month(
        &self,
        ctx: &TurnContext,
        month: YearMonth,
    ) -> TrackerResult<Vec<NaiveDate>> {
        let records = self.store.list_records_for_month(ctx.user_id, month).await?;
        let mut dates: Vec<NaiveDate> = records.into_iter().map(|record| record.date).collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();
        Ok(dates)
    }
}
