//! Maps free-form menu input to a language-independent [`Intent`].
//!
//! Every button label starts with an icon that is the same in all
//! languages, so the icon is tried first. Labels that share an icon, or input
//! typed without one, fall back to a case-insensitive substring match against
//! the label text in every supported language.

use timekeeper_core::models::Language;

use crate::i18n::{self, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    RecordTime,
    Report,
    Settings,
    Back,
    Cancel,
    RecordArrival,
    RecordDeparture,
    DailyReport,
    MonthlyReport,
    EditReport,
    ResetToday,
    SetRate,
    SetTimezone,
    SetLanguage,
    History,
    NewRecord,
    DeleteRecord,
    TodayDate,
    EnterManually,
    EditArrival,
    EditDeparture,
    SelectSpecificDay,
    BackToMonthSelection,
    BackToReport,
    ChooseLanguage(Language),
}

impl Intent {
    /// Text key of the button that carries this intent.
    pub fn key(self) -> Key {
        match self {
            Intent::RecordTime => Key::RecordTime,
            Intent::Report => Key::Report,
            Intent::Settings => Key::Settings,
            Intent::Back => Key::Back,
            Intent::Cancel => Key::Cancel,
            Intent::RecordArrival => Key::RecordArrival,
            Intent::RecordDeparture => Key::RecordDeparture,
            Intent::DailyReport => Key::DailyReport,
            Intent::MonthlyReport => Key::MonthlyReport,
            Intent::EditReport => Key::EditReport,
            Intent::ResetToday => Key::ResetTime,
            Intent::SetRate => Key::SetRate,
            Intent::SetTimezone => Key::SetTimezone,
            Intent::SetLanguage => Key::SetLanguage,
            Intent::History => Key::History,
            Intent::NewRecord => Key::NewRecord,
            Intent::DeleteRecord => Key::DeleteRecord,
            Intent::TodayDate => Key::TodayDate,
            Intent::EnterManually => Key::EnterManually,
            Intent::EditArrival => Key::ArrivalTime,
            Intent::EditDeparture => Key::DepartureTime,
            Intent::SelectSpecificDay => Key::SelectSpecificDay,
            Intent::BackToMonthSelection => Key::BackToMonthSelection,
            Intent::BackToReport => Key::BackToReport,
            Intent::ChooseLanguage(Language::Ukrainian) => Key::Ukrainian,
            Intent::ChooseLanguage(Language::English) => Key::English,
            Intent::ChooseLanguage(Language::Polish) => Key::Polish,
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        i18n::text(lang, self.key())
    }
}

/// Classify `input` against the intents the current state accepts.
///
/// Returns `None` when nothing matches or the input is ambiguous between
/// candidates.
pub fn classify(input: &str, candidates: &[Intent]) -> Option<Intent> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    by_icon(input, candidates).or_else(|| by_text(input, candidates))
}

fn by_icon(input: &str, candidates: &[Intent]) -> Option<Intent> {
    let mut found = candidates
        .iter()
        .copied()
        .filter(|intent| input.starts_with(icon(intent.label(Language::default()))));
    let first = found.next()?;
    found.next().is_none().then_some(first)
}

fn by_text(input: &str, candidates: &[Intent]) -> Option<Intent> {
    let input = input.to_lowercase();
    let mut best: Option<(Intent, usize)> = None;

    for &intent in candidates {
        for lang in Language::ALL {
            let words = words(intent.label(lang)).to_lowercase();
            if words.is_empty() || !input.contains(&words) {
                continue;
            }
            if best.is_none_or(|(_, len)| words.len() > len) {
                best = Some((intent, words.len()));
            }
        }
    }
    best.map(|(intent, _)| intent)
}

/// The leading icon of a label, up to the first space.
fn icon(label: &str) -> &str {
    label.split_once(' ').map_or(label, |(icon, _)| icon)
}

/// A label with its icon removed.
fn words(label: &str) -> &str {
    label.split_once(' ').map_or("", |(_, words)| words.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_and_words_split_on_first_space() {
        assert_eq!(icon("↩️ Назад до звіту"), "↩️");
        assert_eq!(words("↩️ Назад до звіту"), "Назад до звіту");
        assert_eq!(words("plain"), "");
    }
}
