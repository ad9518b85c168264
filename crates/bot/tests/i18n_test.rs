use pretty_assertions::assert_eq;
use rstest::rstest;
use timekeeper_bot::i18n::{month_label, parse_month_label};
use timekeeper_core::models::{Language, YearMonth};

#[rstest]
#[case("Листопад 2024", YearMonth::new(2024, 11))]
#[case("  may 2025 ", YearMonth::new(2025, 5))]
#[case("Maj 2025", YearMonth::new(2025, 5))]
#[case("PAŹDZIERNIK 2023", YearMonth::new(2023, 10))]
#[case("Mayday 2025", None)]
#[case("March", None)]
#[case("2025-03", None)]
fn test_parse_month_label(#[case] input: &str, #[case] expected: Option<YearMonth>) {
    assert_eq!(parse_month_label(input), expected);
}

#[test]
fn test_every_month_label_parses_back() {
    for lang in Language::ALL {
        for month in 1..=12 {
            let month = YearMonth::new(2025, month).unwrap();
            assert_eq!(parse_month_label(&month_label(lang, month)), Some(month), "{lang:?}");
        }
    }
}
