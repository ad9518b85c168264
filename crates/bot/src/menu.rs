//! Outbound replies and the menus attached to them, plus the inbound event
//! shape the transport hands to the dialog.

use chrono::NaiveDate;
use timekeeper_core::models::{Language, SUPPORTED_TIMEZONES, YearMonth};
use timekeeper_core::time::{format_date, parse_date};

use crate::i18n::{self, Key};
use crate::intent::Intent;

const DELETE_YES_PREFIX: &str = "delete_yes_";
const DELETE_NO: &str = "delete_no";

/// One selectable entry. `token` is what comes back when it is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub token: String,
}

impl MenuOption {
    /// An option whose token is its own label.
    pub fn plain(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            token: label.clone(),
            label,
        }
    }

    pub fn intent(lang: Language, intent: Intent) -> Self {
        Self::plain(intent.label(lang))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Menu {
    /// Rows of options, re-sent with every reply.
    Keyboard(Vec<Vec<MenuOption>>),
    /// A few actions followed by a list to pick one entry from, which may
    /// be long (the dates of a month).
    Picker {
        actions: Vec<MenuOption>,
        choices: Vec<MenuOption>,
    },
    /// A one-off yes/no pair answered through [`Inbound::Confirm`].
    Confirm { yes: MenuOption, no: MenuOption },
}

impl Menu {
    /// Every option in display order.
    pub fn options(&self) -> Vec<&MenuOption> {
        match self {
            Menu::Keyboard(rows) => rows.iter().flatten().collect(),
            Menu::Picker { actions, choices } => actions.iter().chain(choices).collect(),
            Menu::Confirm { yes, no } => vec![yes, no],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub menu: Option<Menu>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: None,
        }
    }

    pub fn with_menu(text: impl Into<String>, menu: Menu) -> Self {
        Self {
            text: text.into(),
            menu: Some(menu),
        }
    }
}

/// What a user sent, as seen by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// Explicit restart; valid in every state.
    Start,
    Text(String),
    /// Answer to a [`Menu::Confirm`] prompt.
    Confirm {
        accepted: bool,
        date: Option<NaiveDate>,
    },
}

impl Inbound {
    pub fn from_text(text: &str) -> Self {
        match text.trim() {
            "/start" | "!start" => Inbound::Start,
            other => Inbound::Text(other.to_string()),
        }
    }

    /// Decode the token of a chosen menu option.
    pub fn from_token(token: &str) -> Self {
        if let Some(date) = token.strip_prefix(DELETE_YES_PREFIX) {
            return Inbound::Confirm {
                accepted: true,
                date: parse_date(date).ok(),
            };
        }
        if token == DELETE_NO {
            return Inbound::Confirm {
                accepted: false,
                date: None,
            };
        }
        Inbound::from_text(token)
    }
}

fn row(lang: Language, intents: &[Intent]) -> Vec<MenuOption> {
    intents
        .iter()
        .map(|intent| MenuOption::intent(lang, *intent))
        .collect()
}

fn date_choices(dates: &[NaiveDate]) -> Vec<MenuOption> {
    dates
        .iter()
        .map(|date| MenuOption::plain(format_date(*date)))
        .collect()
}

pub fn main_menu(lang: Language) -> Menu {
    Menu::Keyboard(vec![
        row(lang, &[Intent::RecordTime, Intent::Report]),
        row(lang, &[Intent::Settings]),
    ])
}

pub fn time_recording(lang: Language) -> Menu {
    Menu::Keyboard(vec![
        row(lang, &[Intent::RecordArrival, Intent::RecordDeparture]),
        row(lang, &[Intent::Back]),
    ])
}

pub fn report_menu(lang: Language) -> Menu {
    Menu::Keyboard(vec![
        row(lang, &[Intent::DailyReport, Intent::MonthlyReport]),
        row(lang, &[Intent::EditReport, Intent::Back]),
    ])
}

pub fn settings_menu(lang: Language) -> Menu {
    Menu::Keyboard(vec![
        row(lang, &[Intent::ResetToday, Intent::SetRate]),
        row(lang, &[Intent::SetTimezone, Intent::SetLanguage]),
        row(lang, &[Intent::History]),
        row(lang, &[Intent::Back]),
    ])
}

/// Back and new/delete actions, then the given dates.
pub fn edit_menu(lang: Language, dates: &[NaiveDate]) -> Menu {
    Menu::Picker {
        actions: row(lang, &[Intent::Back, Intent::NewRecord, Intent::DeleteRecord]),
        choices: date_choices(dates),
    }
}

pub fn delete_menu(lang: Language, dates: &[NaiveDate]) -> Menu {
    Menu::Picker {
        actions: row(lang, &[Intent::Back]),
        choices: date_choices(dates),
    }
}

pub fn confirm_delete(lang: Language, date: NaiveDate) -> Menu {
    Menu::Confirm {
        yes: MenuOption {
            label: i18n::text(lang, Key::Yes).to_string(),
            token: format!("{DELETE_YES_PREFIX}{}", format_date(date)),
        },
        no: MenuOption {
            label: i18n::text(lang, Key::No).to_string(),
            token: DELETE_NO.to_string(),
        },
    }
}

pub fn edit_choice(lang: Language) -> Menu {
    Menu::Keyboard(vec![
        row(lang, &[Intent::EditArrival, Intent::EditDeparture]),
        row(lang, &[Intent::Back]),
    ])
}

pub fn new_record_date(lang: Language) -> Menu {
    Menu::Keyboard(vec![
        row(lang, &[Intent::TodayDate]),
        row(lang, &[Intent::EnterManually]),
        row(lang, &[Intent::Back]),
    ])
}

pub fn cancel_only(lang: Language) -> Menu {
    Menu::Keyboard(vec![row(lang, &[Intent::Cancel])])
}

pub fn timezones(lang: Language) -> Menu {
    let mut rows: Vec<Vec<MenuOption>> = SUPPORTED_TIMEZONES
        .iter()
        .map(|tz| vec![MenuOption::plain(*tz)])
        .collect();
    rows.push(row(lang, &[Intent::Back]));
    Menu::Keyboard(rows)
}

pub fn languages(lang: Language) -> Menu {
    let mut rows: Vec<Vec<MenuOption>> = Language::ALL
        .iter()
        .map(|choice| vec![MenuOption::plain(i18n::language_label(*choice))])
        .collect();
    rows.push(row(lang, &[Intent::Back]));
    Menu::Keyboard(rows)
}

/// Months labelled by name; the token is the opaque `YYYY-MM` id.
pub fn months(lang: Language, months: &[YearMonth]) -> Menu {
    Menu::Picker {
        actions: row(lang, &[Intent::Back]),
        choices: months
            .iter()
            .map(|month| MenuOption {
                label: i18n::month_label(lang, *month),
                token: month.to_string(),
            })
            .collect(),
    }
}

pub fn month_report(lang: Language) -> Menu {
    Menu::Keyboard(vec![
        row(lang, &[Intent::SelectSpecificDay]),
        row(lang, &[Intent::BackToMonthSelection]),
    ])
}

pub fn days(lang: Language, dates: &[NaiveDate]) -> Menu {
    Menu::Picker {
        actions: row(lang, &[Intent::BackToReport]),
        choices: date_choices(dates),
    }
}

pub fn back_to_report(lang: Language) -> Menu {
    Menu::Keyboard(vec![row(lang, &[Intent::BackToReport])])
}
