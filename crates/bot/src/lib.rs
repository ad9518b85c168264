use std::sync::Arc;

use eyre::Result;
use serenity::{Client, http::Http, prelude::GatewayIntents};
use timekeeper_core::clock::{Clock, SystemClock};
use timekeeper_core::store::TimeStore;
use timekeeper_db::{DbPool, SqliteStore};
use tracing::info;

pub mod config;
pub mod dialog;
pub mod discord;
pub mod handlers;
pub mod i18n;
pub mod intent;
pub mod locks;
pub mod menu;
pub mod outbound;
pub mod reminder;
pub mod render;
pub mod session;

use crate::dialog::DialogEngine;
use crate::discord::DiscordOutbound;
use crate::outbound::Outbound;
use crate::reminder::{OutboundNotifier, ReminderScheduler};

/// Start the Discord bot with the provided configuration and database connection.
///
/// Wires the store, reminder scheduler and dialog engine together and runs
/// the gateway client until it disconnects or fails.
pub async fn start_bot(config: config::BotConfig, db_pool: DbPool) -> Result<()> {
    info!("Starting Discord bot");

    let http = Arc::new(Http::new(&config.token));
    let outbound: Arc<dyn Outbound> = Arc::new(DiscordOutbound::new(http));
    let store: Arc<dyn TimeStore> = Arc::new(SqliteStore::new(db_pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let notifier = Arc::new(OutboundNotifier::new(Arc::clone(&store), Arc::clone(&outbound)));
    let reminders = Arc::new(ReminderScheduler::new(Arc::clone(&clock), notifier));
    let engine = Arc::new(DialogEngine::new(
        store,
        clock,
        reminders,
        config.currency.clone(),
    ));
    let handler = handlers::Handler::new(engine, outbound, config.admin_user_id);

    let mut client = Client::builder(&config.token, GatewayIntents::DIRECT_MESSAGES)
        .event_handler(handler)
        .await?;

    info!("Connecting to Discord...");
    client.start().await?;

    Ok(())
}
