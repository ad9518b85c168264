use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Zone used when a user has none configured or the stored one is unusable.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Warsaw;

/// The curated zones offered in the settings menu.
pub const SUPPORTED_TIMEZONES: [&str; 5] = [
    "Europe/Warsaw",
    "Europe/Kyiv",
    "UTC",
    "America/New_York",
    "Asia/Tokyo",
];

pub fn is_supported_timezone(name: &str) -> bool {
    SUPPORTED_TIMEZONES.contains(&name)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Ukrainian,
    English,
    Polish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ukrainian, Language::English, Language::Polish];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ukrainian => "uk",
            Language::English => "en",
            Language::Polish => "pl",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}
