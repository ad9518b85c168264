use eyre::Result;
use sqlx::{Pool, Sqlite};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Sqlite>) -> Result<()> {
    info!("Initializing database schema...");

    // One row per user per day; times are stored as HH:MM:SS text
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_records (
            user_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            arrival_time TEXT NULL,
            departure_time TEXT NULL,
            PRIMARY KEY (user_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS hourly_rates (
            user_id INTEGER PRIMARY KEY,
            rate REAL NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_timezones (
            user_id INTEGER PRIMARY KEY,
            timezone TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_languages (
            user_id INTEGER PRIMARY KEY,
            language TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
