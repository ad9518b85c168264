//! Localised text for every message and button the bot shows.
//!
//! Tables are exhaustive matches, so adding a [`Key`] without translating it
//! for every [`Language`] is a compile error. Templates use `{}` as a
//! positional placeholder, filled left to right by [`fill`].

use timekeeper_core::models::{Language, YearMonth};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    WelcomeFirst,
    WelcomeBack,
    RecordTime,
    Report,
    Settings,
    Back,
    RecordArrival,
    RecordDeparture,
    ChooseAction,
    DailyReport,
    MonthlyReport,
    EditReport,
    ChooseReportType,
    ResetTime,
    SetRate,
    SetTimezone,
    History,
    SetLanguage,
    SettingsTitle,
    ArrivalRecorded,
    DepartureRecorded,
    AlreadyRecordedArrival,
    AlreadyRecordedDeparture,
    RecordArrivalFirst,
    ExpectedShiftEnd,
    ShiftEndReminder,
    NoRecordsToday,
    NoRecordsMonth,
    WorkedToday,
    WorkedShift,
    WorkedMonth,
    Earnings,
    EarningsMonth,
    Hours,
    ChooseLanguage,
    LanguageSet,
    Ukrainian,
    English,
    Polish,
    EnterRate,
    RateSet,
    InvalidRate,
    ChooseTimezone,
    TimezoneSet,
    InvalidTimezone,
    ResetToday,
    NoResetRecords,
    Cancel,
    NewRecord,
    DeleteRecord,
    ChooseDateOrAction,
    TodayDate,
    EnterManually,
    CreatingNewRecord,
    ChooseDateToDelete,
    ConfirmDelete,
    Yes,
    No,
    RecordDeleted,
    DeleteFailed,
    DeleteCancelled,
    EditWhat,
    ArrivalTime,
    DepartureTime,
    EnterNewTime,
    TimeUpdated,
    TimeUpdatedForDate,
    InvalidTimeFormat,
    EnterDateFormat,
    NoFutureDates,
    RecordExists,
    EnterArrivalTime,
    ArrivalTimeSaved,
    DepartureTimeSaved,
    InvalidDateFormat,
    StatsToday,
    Arrival,
    Departure,
    NotRecordedYet,
    CurrentShift,
    Yesterday,
    NoTimeRecords,
    DailyReportTitle,
    NightShift,
    MonthlyReportTitle,
    ChooseMonth,
    SelectSpecificDay,
    BackToMonthSelection,
    ChooseDayDetail,
    BackToReport,
    DetailedReportFor,
    Worked,
    NoDayRecords,
    DateProcessingError,
    InvalidLanguage,
    StorageError,
    NewUserNotice,
}

pub fn text(lang: Language, key: Key) -> &'static str {
    match lang {
        Language::Ukrainian => ukrainian(key),
        Language::English => english(key),
        Language::Polish => polish(key),
    }
}

/// Substitute `args` into the `{}` placeholders of a template, in order.
pub fn fill(lang: Language, key: Key, args: &[&str]) -> String {
    let mut out = text(lang, key).to_string();
    for arg in args {
        out = out.replacen("{}", arg, 1);
    }
    out
}

/// Label of the button that switches the interface to `lang`.
pub fn language_label(lang: Language) -> &'static str {
    let key = match lang {
        Language::Ukrainian => Key::Ukrainian,
        Language::English => Key::English,
        Language::Polish => Key::Polish,
    };
    text(lang, key)
}

const MONTHS_UK: [&str; 12] = [
    "Січень", "Лютий", "Березень", "Квітень", "Травень", "Червень", "Липень", "Серпень",
    "Вересень", "Жовтень", "Листопад", "Грудень",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_PL: [&str; 12] = [
    "Styczeń", "Luty", "Marzec", "Kwiecień", "Maj", "Czerwiec", "Lipiec", "Sierpień",
    "Wrzesień", "Październik", "Listopad", "Grudzień",
];

fn month_table(lang: Language) -> &'static [&'static str; 12] {
    match lang {
        Language::Ukrainian => &MONTHS_UK,
        Language::English => &MONTHS_EN,
        Language::Polish => &MONTHS_PL,
    }
}

/// `month` is 1-based; out-of-range values render as an empty string.
pub fn month_name(lang: Language, month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| month_table(lang).get(index as usize))
        .copied()
        .unwrap_or_default()
}

/// "Січень 2025", "January 2025", ...
pub fn month_label(lang: Language, month: YearMonth) -> String {
    format!("{} {}", month_name(lang, month.month()), month.year())
}

/// Recover a month from a label typed in any supported language.
pub fn parse_month_label(input: &str) -> Option<YearMonth> {
    let input = input.trim();
    for lang in Language::ALL {
        for (index, name) in month_table(lang).iter().enumerate() {
            let Some(rest) = strip_prefix_ignore_case(input, name) else {
                continue;
            };
            let Ok(year) = rest.trim().parse::<i32>() else {
                continue;
            };
            return YearMonth::new(year, index as u32 + 1);
        }
    }
    None
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    (head.to_lowercase() == prefix.to_lowercase()).then(|| &input[prefix.len()..])
}

fn ukrainian(key: Key) -> &'static str {
    match key {
        Key::WelcomeFirst => "👋 Привіт! Як я можу допомогти?",
        Key::WelcomeBack => "🔙 Ви повернулися в меню. Що далі?",
        Key::RecordTime => "⏱ Записати час",
        Key::Report => "📊 Звіт",
        Key::Settings => "⚙️ Налаштування",
        Key::Back => "↩️ Назад",
        Key::RecordArrival => "🟢 Прихід",
        Key::RecordDeparture => "🔴 Відхід",
        Key::ChooseAction => "Оберіть дію:",
        Key::DailyReport => "📅 Сьогодні",
        Key::MonthlyReport => "📈 Місяць",
        Key::EditReport => "✏️ Редагувати",
        Key::ChooseReportType => "📊 Оберіть тип звіту:",
        Key::ResetTime => "🔄 Скинути",
        Key::SetRate => "💰 Ставка",
        Key::SetTimezone => "🕰 Часовий пояс",
        Key::History => "📊 Історія",
        Key::SetLanguage => "🌐 Мова",
        Key::SettingsTitle => "⚙️ Налаштування:",
        Key::ArrivalRecorded => "✅ Час приходу записано:",
        Key::DepartureRecorded => "✅ Час відходу записано:",
        Key::AlreadyRecordedArrival => "❌ Ви вже записали час приходу сьогодні!",
        Key::AlreadyRecordedDeparture => "❌ Ви вже записали час відходу сьогодні!",
        Key::RecordArrivalFirst => "❌ Спочатку запишіть час приходу!",
        Key::ExpectedShiftEnd => "🕐 Очікуваний кінець зміни:",
        Key::ShiftEndReminder => {
            "⚠️ Увага! Через 15 хвилин закінчується ваша зміна ({}).\nНе забудьте відмітити час відходу!"
        }
        Key::NoRecordsToday => "❌ За сьогодні немає записів.",
        Key::NoRecordsMonth => "❌ За цей місяць немає записів.",
        Key::WorkedToday => "⏱ Відпрацьовано сьогодні:",
        Key::WorkedShift => "⏱ Відпрацьовано за зміну:",
        Key::WorkedMonth => "⏱ Всього відпрацьовано за місяць:",
        Key::Earnings => "💰 Заробіток:",
        Key::EarningsMonth => "💰 Заробіток за місяць:",
        Key::Hours => "годин",
        Key::ChooseLanguage => "🌐 Оберіть мову:",
        Key::LanguageSet => "✅ Мову встановлено",
        Key::Ukrainian => "🇺🇦 Українська",
        Key::English => "🇬🇧 English",
        Key::Polish => "🇵🇱 Polski",
        Key::EnterRate => "💰 Будь ласка, введіть вашу погодинну ставку в {} (наприклад, 25.50):",
        Key::RateSet => "✅ Погодинну ставку встановлено:",
        Key::InvalidRate => "❌ Будь ласка, введіть коректне числове значення більше 0",
        Key::ChooseTimezone => "🕰 Оберіть часовий пояс:",
        Key::TimezoneSet => "✅ Часовий пояс встановлено:",
        Key::InvalidTimezone => "❌ Некоректний часовий пояс. Оберіть із запропонованих.",
        Key::ResetToday => "✅ Записи за сьогодні скинуто.",
        Key::NoResetRecords => "ℹ️ Немає записів за сьогодні для скидання.",
        Key::Cancel => "❌ Скасувати",
        Key::NewRecord => "📝 Новий запис",
        Key::DeleteRecord => "🗑️ Видалити запис",
        Key::ChooseDateOrAction => "📅 Оберіть дату для редагування або оберіть дію:",
        Key::TodayDate => "📅 Сьогоднішня дата",
        Key::EnterManually => "✍️ Ввести вручну",
        Key::CreatingNewRecord => "📝 Створення нового запису\nОберіть опцію (сьогодні: {}):",
        Key::ChooseDateToDelete => "🗑️ Оберіть дату для видалення:",
        Key::ConfirmDelete => "❓ Ви впевнені, що хочете видалити запис за {}?",
        Key::Yes => "✅ Так",
        Key::No => "❌ Ні",
        Key::RecordDeleted => "✅ Запис за {} видалено",
        Key::DeleteFailed => "❌ Не вдалося видалити запис. Спробуйте пізніше.",
        Key::DeleteCancelled => "❌ Видалення скасовано",
        Key::EditWhat => "✏️ Що ви хочете відредагувати для {}?",
        Key::ArrivalTime => "🟢 Час приходу",
        Key::DepartureTime => "🔴 Час відходу",
        Key::EnterNewTime => {
            "⌚ Введіть новий час у форматі ГГ:ХХ або ГГ:ХХ:СС (наприклад, 09:00 або 09:00:00):"
        }
        Key::TimeUpdated => "✅ Час успішно оновлено!",
        Key::TimeUpdatedForDate => "✅ Час за {} успішно оновлено!",
        Key::InvalidTimeFormat => {
            "❌ Неправильний формат часу. Будь ласка, використовуйте формат ГГ:ХХ або ГГ:ХХ:СС"
        }
        Key::EnterDateFormat => "Введіть дату у форматі РРРР-ММ-ДД (наприклад, 2025-01-09):",
        Key::NoFutureDates => "❌ Не можна створювати записи для майбутніх дат!",
        Key::RecordExists => "❌ Запис за цю дату вже існує!",
        Key::EnterArrivalTime => {
            "⌚ Введіть час приходу у форматі ГГ:ХХ або ГГ:ХХ:СС (наприклад, 09:00 або 09:00:00):"
        }
        Key::ArrivalTimeSaved => {
            "✅ Час приходу записано!\n\n⌚ Тепер введіть час відходу у форматі ГГ:ХХ або ГГ:ХХ:СС (наприклад, 18:00 або 18:00:00):"
        }
        Key::DepartureTimeSaved => "✅ Час відходу записано!",
        Key::InvalidDateFormat => {
            "❌ Неправильний формат дати. Використовуйте формат РРРР-ММ-ДД\nСпробуйте ще раз:"
        }
        Key::StatsToday => "📊 Статистика за сьогодні:",
        Key::Arrival => "🕐 Прихід:",
        Key::Departure => "🕐 Відхід:",
        Key::NotRecordedYet => "ще не записано",
        Key::CurrentShift => "📊 Поточна зміна:",
        Key::Yesterday => "вчора",
        Key::NoTimeRecords => "📊 За сьогодні ще немає записів часу",
        Key::DailyReportTitle => "📅 Звіт за {}:",
        Key::NightShift => "Нічна зміна (з вчора):",
        Key::MonthlyReportTitle => "📈 Звіт за {}:",
        Key::ChooseMonth => "📅 Оберіть місяць для перегляду:",
        Key::SelectSpecificDay => "📅 Обрати конкретний день",
        Key::BackToMonthSelection => "↩️ Назад до вибору місяця",
        Key::ChooseDayDetail => "📅 Оберіть день для детального перегляду:",
        Key::BackToReport => "↩️ Назад до звіту",
        Key::DetailedReportFor => "📅 Детальний звіт за {}:",
        Key::Worked => "⏱ Відпрацьовано:",
        Key::NoDayRecords => "❌ За цей день немає записів.",
        Key::DateProcessingError => "❌ Помилка при обробці дати. Спробуйте ще раз.",
        Key::InvalidLanguage => "❌ Некоректна мова. Оберіть із запропонованих.",
        Key::StorageError => "❌ Помилка збереження даних. Спробуйте пізніше.",
        Key::NewUserNotice => "👤 Новий користувач приєднався до бота!\n\nID: {}\nІм'я: {}",
    }
}

fn english(key: Key) -> &'static str {
    match key {
        Key::WelcomeFirst => "👋 Hello! How can I help you?",
        Key::WelcomeBack => "🔙 You're back to the menu. What's next?",
        Key::RecordTime => "⏱ Record time",
        Key::Report => "📊 Report",
        Key::Settings => "⚙️ Settings",
        Key::Back => "↩️ Back",
        Key::RecordArrival => "🟢 Arrival",
        Key::RecordDeparture => "🔴 Departure",
        Key::ChooseAction => "Choose an action:",
        Key::DailyReport => "📅 Today",
        Key::MonthlyReport => "📈 Month",
        Key::EditReport => "✏️ Edit",
        Key::ChooseReportType => "📊 Choose report type:",
        Key::ResetTime => "🔄 Reset",
        Key::SetRate => "💰 Rate",
        Key::SetTimezone => "🕰 Timezone",
        Key::History => "📊 History",
        Key::SetLanguage => "🌐 Language",
        Key::SettingsTitle => "⚙️ Settings:",
        Key::ArrivalRecorded => "✅ Arrival time recorded:",
        Key::DepartureRecorded => "✅ Departure time recorded:",
        Key::AlreadyRecordedArrival => "❌ You have already recorded arrival time today!",
        Key::AlreadyRecordedDeparture => "❌ You have already recorded departure time today!",
        Key::RecordArrivalFirst => "❌ Please record arrival time first!",
        Key::ExpectedShiftEnd => "🕐 Expected shift end:",
        Key::ShiftEndReminder => {
            "⚠️ Attention! Your shift ends in 15 minutes ({}).\nDon't forget to record departure time!"
        }
        Key::NoRecordsToday => "❌ No records for today.",
        Key::NoRecordsMonth => "❌ No records for this month.",
        Key::WorkedToday => "⏱ Worked today:",
        Key::WorkedShift => "⏱ Worked this shift:",
        Key::WorkedMonth => "⏱ Total worked this month:",
        Key::Earnings => "💰 Earnings:",
        Key::EarningsMonth => "💰 Monthly earnings:",
        Key::Hours => "hours",
        Key::ChooseLanguage => "🌐 Choose language:",
        Key::LanguageSet => "✅ Language set",
        Key::Ukrainian => "🇺🇦 Українська",
        Key::English => "🇬🇧 English",
        Key::Polish => "🇵🇱 Polski",
        Key::EnterRate => "💰 Please enter your hourly rate in {} (e.g., 25.50):",
        Key::RateSet => "✅ Hourly rate set:",
        Key::InvalidRate => "❌ Please enter a valid number greater than 0",
        Key::ChooseTimezone => "🕰 Choose timezone:",
        Key::TimezoneSet => "✅ Timezone set:",
        Key::InvalidTimezone => "❌ Invalid timezone. Please choose from the suggested options.",
        Key::ResetToday => "✅ Today's records have been reset.",
        Key::NoResetRecords => "ℹ️ No records for today to reset.",
        Key::Cancel => "❌ Cancel",
        Key::NewRecord => "📝 New record",
        Key::DeleteRecord => "🗑️ Delete record",
        Key::ChooseDateOrAction => "📅 Choose a date to edit or select an action:",
        Key::TodayDate => "📅 Today's date",
        Key::EnterManually => "✍️ Enter manually",
        Key::CreatingNewRecord => "📝 Creating new record\nChoose option (today: {}):",
        Key::ChooseDateToDelete => "🗑️ Choose date to delete:",
        Key::ConfirmDelete => "❓ Are you sure you want to delete the record for {}?",
        Key::Yes => "✅ Yes",
        Key::No => "❌ No",
        Key::RecordDeleted => "✅ Record for {} deleted",
        Key::DeleteFailed => "❌ Failed to delete record. Please try again later.",
        Key::DeleteCancelled => "❌ Deletion cancelled",
        Key::EditWhat => "✏️ What do you want to edit for {}?",
        Key::ArrivalTime => "🟢 Arrival time",
        Key::DepartureTime => "🔴 Departure time",
        Key::EnterNewTime => {
            "⌚ Enter new time in HH:MM or HH:MM:SS format (e.g., 09:00 or 09:00:00):"
        }
        Key::TimeUpdated => "✅ Time successfully updated!",
        Key::TimeUpdatedForDate => "✅ Time for {} successfully updated!",
        Key::InvalidTimeFormat => "❌ Invalid time format. Please use HH:MM or HH:MM:SS format",
        Key::EnterDateFormat => "Enter date in YYYY-MM-DD format (e.g., 2025-01-09):",
        Key::NoFutureDates => "❌ Cannot create records for future dates!",
        Key::RecordExists => "❌ Record for this date already exists!",
        Key::EnterArrivalTime => {
            "⌚ Enter arrival time in HH:MM or HH:MM:SS format (e.g., 09:00 or 09:00:00):"
        }
        Key::ArrivalTimeSaved => {
            "✅ Arrival time saved!\n\n⌚ Now enter departure time in HH:MM or HH:MM:SS format (e.g., 18:00 or 18:00:00):"
        }
        Key::DepartureTimeSaved => "✅ Departure time saved!",
        Key::InvalidDateFormat => "❌ Invalid date format. Use YYYY-MM-DD format\nTry again:",
        Key::StatsToday => "📊 Today's statistics:",
        Key::Arrival => "🕐 Arrival:",
        Key::Departure => "🕐 Departure:",
        Key::NotRecordedYet => "not recorded yet",
        Key::CurrentShift => "📊 Current shift:",
        Key::Yesterday => "yesterday",
        Key::NoTimeRecords => "📊 No time records for today yet",
        Key::DailyReportTitle => "📅 Report for {}:",
        Key::NightShift => "Night shift (from yesterday):",
        Key::MonthlyReportTitle => "📈 Report for {}:",
        Key::ChooseMonth => "📅 Choose month to view:",
        Key::SelectSpecificDay => "📅 Select specific day",
        Key::BackToMonthSelection => "↩️ Back to month selection",
        Key::ChooseDayDetail => "📅 Choose day for detailed view:",
        Key::BackToReport => "↩️ Back to report",
        Key::DetailedReportFor => "📅 Detailed report for {}:",
        Key::Worked => "⏱ Worked:",
        Key::NoDayRecords => "❌ No records for this day.",
        Key::DateProcessingError => "❌ Error processing date. Please try again.",
        Key::InvalidLanguage => "❌ Invalid language. Please choose from the suggested options.",
        Key::StorageError => "❌ Could not reach the database. Please try again later.",
        Key::NewUserNotice => "👤 A new user joined the bot!\n\nID: {}\nName: {}",
    }
}

fn polish(key: Key) -> &'static str {
    match key {
        Key::WelcomeFirst => "👋 Cześć! Jak mogę Ci pomóc?",
        Key::WelcomeBack => "🔙 Wróciłeś do menu. Co dalej?",
        Key::RecordTime => "⏱ Zapisz czas",
        Key::Report => "📊 Raport",
        Key::Settings => "⚙️ Ustawienia",
        Key::Back => "↩️ Wstecz",
        Key::RecordArrival => "🟢 Przyjście",
        Key::RecordDeparture => "🔴 Wyjście",
        Key::ChooseAction => "Wybierz akcję:",
        Key::DailyReport => "📅 Dzisiaj",
        Key::MonthlyReport => "📈 Miesiąc",
        Key::EditReport => "✏️ Edytuj",
        Key::ChooseReportType => "📊 Wybierz typ raportu:",
        Key::ResetTime => "🔄 Resetuj",
        Key::SetRate => "💰 Stawka",
        Key::SetTimezone => "🕰 Strefa czasowa",
        Key::History => "📊 Historia",
        Key::SetLanguage => "🌐 Język",
        Key::SettingsTitle => "⚙️ Ustawienia:",
        Key::ArrivalRecorded => "✅ Czas przyjścia zapisany:",
        Key::DepartureRecorded => "✅ Czas wyjścia zapisany:",
        Key::AlreadyRecordedArrival => "❌ Już zapisałeś czas przyjścia dzisiaj!",
        Key::AlreadyRecordedDeparture => "❌ Już zapisałeś czas wyjścia dzisiaj!",
        Key::RecordArrivalFirst => "❌ Najpierw zapisz czas przyjścia!",
        Key::ExpectedShiftEnd => "🕐 Oczekiwany koniec zmiany:",
        Key::ShiftEndReminder => {
            "⚠️ Uwaga! Za 15 minut kończy się Twoja zmiana ({}).\nNie zapomnij zapisać czasu wyjścia!"
        }
        Key::NoRecordsToday => "❌ Brak zapisów na dzisiaj.",
        Key::NoRecordsMonth => "❌ Brak zapisów w tym miesiącu.",
        Key::WorkedToday => "⏱ Przepracowano dzisiaj:",
        Key::WorkedShift => "⏱ Przepracowano w tej zmianie:",
        Key::WorkedMonth => "⏱ Łącznie przepracowano w miesiącu:",
        Key::Earnings => "💰 Zarobki:",
        Key::EarningsMonth => "💰 Zarobki miesięczne:",
        Key::Hours => "godzin",
        Key::ChooseLanguage => "🌐 Wybierz język:",
        Key::LanguageSet => "✅ Język ustawiony",
        Key::Ukrainian => "🇺🇦 Українська",
        Key::English => "🇬🇧 English",
        Key::Polish => "🇵🇱 Polski",
        Key::EnterRate => "💰 Proszę podać stawkę godzinową w {} (np. 25.50):",
        Key::RateSet => "✅ Stawka godzinowa ustawiona:",
        Key::InvalidRate => "❌ Proszę podać prawidłową liczbę większą od 0",
        Key::ChooseTimezone => "🕰 Wybierz strefę czasową:",
        Key::TimezoneSet => "✅ Strefa czasowa ustawiona:",
        Key::InvalidTimezone => "❌ Nieprawidłowa strefa czasowa. Wybierz z proponowanych opcji.",
        Key::ResetToday => "✅ Dzisiejsze zapisy zostały zresetowane.",
        Key::NoResetRecords => "ℹ️ Brak zapisów na dzisiaj do zresetowania.",
        Key::Cancel => "❌ Anuluj",
        Key::NewRecord => "📝 Nowy zapis",
        Key::DeleteRecord => "🗑️ Usuń zapis",
        Key::ChooseDateOrAction => "📅 Wybierz datę do edycji lub wybierz akcję:",
        Key::TodayDate => "📅 Dzisiejsza data",
        Key::EnterManually => "✍️ Wprowadź ręcznie",
        Key::CreatingNewRecord => "📝 Tworzenie nowego zapisu\nWybierz opcję (dzisiaj: {}):",
        Key::ChooseDateToDelete => "🗑️ Wybierz datę do usunięcia:",
        Key::ConfirmDelete => "❓ Czy na pewno chcesz usunąć zapis z {}?",
        Key::Yes => "✅ Tak",
        Key::No => "❌ Nie",
        Key::RecordDeleted => "✅ Zapis z {} usunięty",
        Key::DeleteFailed => "❌ Nie udało się usunąć zapisu. Spróbuj ponownie później.",
        Key::DeleteCancelled => "❌ Usuwanie anulowane",
        Key::EditWhat => "✏️ Co chcesz edytować dla {}?",
        Key::ArrivalTime => "🟢 Czas przyjścia",
        Key::DepartureTime => "🔴 Czas wyjścia",
        Key::EnterNewTime => {
            "⌚ Wprowadź nowy czas w formacie GG:MM lub GG:MM:SS (np. 09:00 lub 09:00:00):"
        }
        Key::TimeUpdated => "✅ Czas pomyślnie zaktualizowany!",
        Key::TimeUpdatedForDate => "✅ Czas dla {} pomyślnie zaktualizowany!",
        Key::InvalidTimeFormat => "❌ Nieprawidłowy format czasu. Użyj formatu GG:MM lub GG:MM:SS",
        Key::EnterDateFormat => "Wprowadź datę w formacie RRRR-MM-DD (np. 2025-01-09):",
        Key::NoFutureDates => "❌ Nie można tworzyć zapisów dla przyszłych dat!",
        Key::RecordExists => "❌ Zapis dla tej daty już istnieje!",
        Key::EnterArrivalTime => {
            "⌚ Wprowadź czas przyjścia w formacie GG:MM lub GG:MM:SS (np. 09:00 lub 09:00:00):"
        }
        Key::ArrivalTimeSaved => {
            "✅ Czas przyjścia zapisany!\n\n⌚ Teraz wprowadź czas wyjścia w formacie GG:MM lub GG:MM:SS (np. 18:00 lub 18:00:00):"
        }
        Key::DepartureTimeSaved => "✅ Czas wyjścia zapisany!",
        Key::InvalidDateFormat => {
            "❌ Nieprawidłowy format daty. Użyj formatu RRRR-MM-DD\nSpróbuj ponownie:"
        }
        Key::StatsToday => "📊 Statystyki na dzisiaj:",
        Key::Arrival => "🕐 Przyjście:",
        Key::Departure => "🕐 Wyjście:",
        Key::NotRecordedYet => "jeszcze nie zapisano",
        Key::CurrentShift => "📊 Bieżąca zmiana:",
        Key::Yesterday => "wczoraj",
        Key::NoTimeRecords => "📊 Brak zapisów czasu na dzisiaj",
        Key::DailyReportTitle => "📅 Raport za {}:",
        Key::NightShift => "Zmiana nocna (od wczoraj):",
        Key::MonthlyReportTitle => "📈 Raport za {}:",
        Key::ChooseMonth => "📅 Wybierz miesiąc do wyświetlenia:",
        Key::SelectSpecificDay => "📅 Wybierz konkretny dzień",
        Key::BackToMonthSelection => "↩️ Powrót do wyboru miesiąca",
        Key::ChooseDayDetail => "📅 Wybierz dzień do szczegółowego wyświetlenia:",
        Key::BackToReport => "↩️ Powrót do raportu",
        Key::DetailedReportFor => "📅 Szczegółowy raport za {}:",
        Key::Worked => "⏱ Przepracowano:",
        Key::NoDayRecords => "❌ Brak zapisów dla tego dnia.",
        Key::DateProcessingError => "❌ Błąd przetwarzania daty. Spróbuj ponownie.",
        Key::InvalidLanguage => "❌ Nieprawidłowy język. Wybierz z proponowanych opcji.",
        Key::StorageError => "❌ Błąd bazy danych. Spróbuj ponownie później.",
        Key::NewUserNotice => "👤 Nowy użytkownik dołączył do bota!\n\nID: {}\nImię: {}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_label_round_trips_in_every_language() {
        let month = YearMonth::new(2025, 10).unwrap();
        for lang in Language::ALL {
            assert_eq!(parse_month_label(&month_label(lang, month)), Some(month));
        }
    }

    #[test]
    fn fill_replaces_in_order() {
        let notice = fill(Language::English, Key::NewUserNotice, &["42", "kate"]);
        assert!(notice.ends_with("ID: 42\nName: kate"));
    }
}
