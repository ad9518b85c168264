pub mod profile;
pub mod time_record;
