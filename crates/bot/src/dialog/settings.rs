//! Settings: hourly rate, timezone, language, and resetting today.

use timekeeper_core::errors::{TrackerError, TrackerResult};
use timekeeper_core::models::{Language, is_supported_timezone};
use tracing::info;

use super::{DialogEngine, Step, TurnContext, error_key, is_back, main_menu_step, settings_step};
use crate::i18n::{Key, fill, text};
use crate::intent::{Intent, classify};
use crate::menu::{self, Reply};
use crate::session::DialogState;

/// Parse a positive hourly rate. A comma is accepted as the decimal separator.
fn parse_rate(input: &str) -> TrackerResult<f64> {
    let rate = input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| TrackerError::InvalidRate(input.to_string()))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(TrackerError::InvalidRate(input.to_string()));
    }
    Ok(rate)
}

impl DialogEngine {
    pub(super) async fn on_settings_menu(
        &self,
        ctx: &TurnContext,
        input: &str,
    ) -> TrackerResult<Step> {
        let candidates = [
            Intent::ResetToday,
            Intent::SetRate,
            Intent::SetTimezone,
            Intent::SetLanguage,
            Intent::History,
            Intent::Back,
        ];
        match classify(input, &candidates) {
            Some(Intent::ResetToday) => self.reset_today(ctx).await,
            Some(Intent::SetRate) => Ok(Step::goto(DialogState::AwaitingRateInput).say(
                Reply::with_menu(
                    fill(ctx.lang, Key::EnterRate, &[&self.currency]),
                    menu::cancel_only(ctx.lang),
                ),
            )),
            Some(Intent::SetTimezone) => Ok(Step::goto(DialogState::AwaitingTimezoneChoice).say(
                Reply::with_menu(ctx.text(Key::ChooseTimezone), menu::timezones(ctx.lang)),
            )),
            Some(Intent::SetLanguage) => Ok(Step::goto(DialogState::AwaitingLanguageChoice).say(
                Reply::with_menu(ctx.text(Key::ChooseLanguage), menu::languages(ctx.lang)),
            )),
            Some(Intent::History) => self.history_step(ctx).await,
            Some(Intent::Back) => Ok(main_menu_step(ctx.lang, Key::WelcomeBack)),
            _ => Ok(settings_step(ctx.lang)),
        }
    }

    async fn reset_today(&self, ctx: &TurnContext) -> TrackerResult<Step> {
        let date = ctx.today();
        let deleted = {
            let _guard = self.record_locks.lock((ctx.user_id, date)).await;
            self.store.delete_record(ctx.user_id, date).await?
        };
        self.reminders.disarm_shift(ctx.user_id, date).await;

        let key = if deleted {
            info!(user_id = ctx.user_id, %date, "today reset");
            Key::ResetToday
        } else {
            Key::NoResetRecords
        };
        Ok(main_menu_step(ctx.lang, Key::WelcomeBack).prefixed(ctx.text(key)))
    }

    pub(super) async fn on_rate_input(&self, ctx: &TurnContext, input: &str) -> TrackerResult<Step> {
        if is_back(input) {
            return Ok(settings_step(ctx.lang));
        }
        match parse_rate(input) {
            Ok(rate) => {
                self.store.set_rate(ctx.user_id, rate).await?;
                info!(user_id = ctx.user_id, rate, "hourly rate set");
                let message = format!("{} {rate:.2} {}", ctx.text(Key::RateSet), self.currency);
                Ok(settings_step(ctx.lang).prefixed(message))
            }
            Err(err) => Ok(Step::goto(DialogState::AwaitingRateInput).note(ctx.text(error_key(&err)))),
        }
    }

    pub(super) async fn on_timezone_choice(
        &self,
        ctx: &TurnContext,
        input: &str,
    ) -> TrackerResult<Step> {
        if classify(input, &[Intent::Back]).is_some() {
            return Ok(settings_step(ctx.lang));
        }
        let timezone = input.trim();
        if !is_supported_timezone(timezone) {
            let err = TrackerError::InvalidTimezoneChoice(timezone.to_string());
            return Ok(Step::goto(DialogState::AwaitingTimezoneChoice).note(ctx.text(error_key(&err))));
        }

        self.store.set_timezone(ctx.user_id, timezone).await?;
        info!(user_id = ctx.user_id, timezone, "timezone set");
        let message = format!("{} {timezone}", ctx.text(Key::TimezoneSet));
        Ok(settings_step(ctx.lang).prefixed(message))
    }

    pub(super) async fn on_language_choice(
        &self,
        ctx: &TurnContext,
        input: &str,
    ) -> TrackerResult<Step> {
        let mut candidates = vec![Intent::Back];
        candidates.extend(Language::ALL.map(Intent::ChooseLanguage));

        match classify(input, &candidates) {
            Some(Intent::ChooseLanguage(lang)) => {
                self.store.set_language(ctx.user_id, lang).await?;
                info!(user_id = ctx.user_id, language = lang.code(), "language set");
                Ok(settings_step(lang).prefixed(text(lang, Key::LanguageSet)))
            }
            Some(_) => Ok(settings_step(ctx.lang)),
            None => {
                let err = TrackerError::InvalidLanguageChoice(input.trim().to_string());
                Ok(Step::goto(DialogState::AwaitingLanguageChoice).note(ctx.text(error_key(&err))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_accepts_comma_and_rejects_non_positive() {
        assert_eq!(parse_rate("25,50").ok(), Some(25.5));
        assert_eq!(parse_rate(" 40 ").ok(), Some(40.0));
        assert!(parse_rate("0").is_err());
        assert!(parse_rate("-3").is_err());
        assert!(parse_rate("abc").is_err());
        assert!(parse_rate("inf").is_err());
    }
}
