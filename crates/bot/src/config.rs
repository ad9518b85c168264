use eyre::{Result, eyre};
use std::env;
use tracing::Level;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://timekeeper.db";
pub const DEFAULT_CURRENCY: &str = "PLN";

/// Configuration for the Discord bot.
///
/// Everything except the token has a default, so a bare `DISCORD_TOKEN` is
/// enough to run against a local SQLite file.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Discord bot token (required)
    pub token: String,
    /// Database connection URL (defaults to a local SQLite file)
    pub database_url: String,
    /// Maximum log level (defaults to INFO)
    pub log_level: Level,
    /// Label appended to earnings figures
    pub currency: String,
    /// User who gets a notice when someone new talks to the bot
    pub admin_user_id: Option<u64>,
}

fn default_level() -> Level {
    Level::INFO
}

impl BotConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| eyre!("DISCORD_TOKEN environment variable not set"))?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .map_err(|_| eyre!("LOG_LEVEL must be one of trace, debug, info, warn, error"))?,
            None => default_level(),
        };

        let currency = lookup("CURRENCY")
            .filter(|currency| !currency.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let admin_user_id = lookup("ADMIN_USER_ID")
            .map(|id| {
                id.parse::<u64>()
                    .map_err(|_| eyre!("ADMIN_USER_ID must be a valid u64"))
            })
            .transpose()?;

        Ok(Self {
            token,
            database_url,
            log_level,
            currency,
            admin_user_id,
        })
    }
}
