use rstest::rstest;
use timekeeper_bot::intent::{Intent, classify};
use timekeeper_core::models::Language;

const MAIN: [Intent; 3] = [Intent::RecordTime, Intent::Report, Intent::Settings];

#[rstest]
#[case("⏱ Записати час", Some(Intent::RecordTime))]
#[case("⏱ Record time", Some(Intent::RecordTime))]
#[case("📊 Raport", Some(Intent::Report))]
#[case("settings", Some(Intent::Settings))]
#[case("  USTAWIENIA ", Some(Intent::Settings))]
#[case("hello there", None)]
#[case("", None)]
fn test_main_menu_labels_in_every_language(#[case] input: &str, #[case] expected: Option<Intent>) {
    assert_eq!(classify(input, &MAIN), expected);
}

#[test]
fn test_every_label_classifies_to_itself() {
    let all = [
        Intent::RecordArrival,
        Intent::RecordDeparture,
        Intent::Back,
    ];
    for lang in Language::ALL {
        for intent in all {
            assert_eq!(classify(intent.label(lang), &all), Some(intent), "{lang:?} {intent:?}");
        }
    }
}

#[test]
fn test_shared_icon_falls_back_to_longest_text() {
    let candidates = [
        Intent::SelectSpecificDay,
        Intent::BackToMonthSelection,
        Intent::Back,
    ];

    assert_eq!(
        classify("↩️ Back to month selection", &candidates),
        Some(Intent::BackToMonthSelection)
    );
    assert_eq!(classify("↩️ Wstecz", &candidates), Some(Intent::Back));
}

#[test]
fn test_only_candidates_are_considered() {
    assert_eq!(classify("📅 Today", &[Intent::Back]), None);
    assert_eq!(
        classify("📅 Today", &[Intent::DailyReport, Intent::Back]),
        Some(Intent::DailyReport)
    );
}

#[rstest]
#[case("🇬🇧 English", Language::English)]
#[case("🇵🇱 Polski", Language::Polish)]
#[case("українська", Language::Ukrainian)]
fn test_language_choice(#[case] input: &str, #[case] expected: Language) {
    let candidates: Vec<Intent> = Language::ALL.map(Intent::ChooseLanguage).into();
    assert_eq!(classify(input, &candidates), Some(Intent::ChooseLanguage(expected)));
}
