pub mod profile;
pub mod record;
pub mod report;

pub use profile::{DEFAULT_TIMEZONE, Language, SUPPORTED_TIMEZONES, is_supported_timezone};
pub use record::{TimeField, TimeRecord, UserId, YearMonth};
pub use report::{LineItem, LineKind, Report, TodayStatus};
