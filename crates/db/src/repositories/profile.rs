use eyre::Result;
use sqlx::{Pool, Sqlite};
use timekeeper_core::models::{Language, UserId};
use tracing::warn;

pub async fn get_hourly_rate(pool: &Pool<Sqlite>, user_id: UserId) -> Result<Option<f64>> {
    let rate = sqlx::query_scalar::<_, f64>("SELECT rate FROM hourly_rates WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(rate)
}

pub async fn upsert_hourly_rate(pool: &Pool<Sqlite>, user_id: UserId, rate: f64) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO hourly_rates (user_id, rate)
        VALUES (?, ?)
        ON CONFLICT (user_id) DO UPDATE SET rate = excluded.rate
        "#,
    )
    .bind(user_id)
    .bind(rate)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_timezone(pool: &Pool<Sqlite>, user_id: UserId) -> Result<Option<String>> {
    let timezone =
        sqlx::query_scalar::<_, String>("SELECT timezone FROM user_timezones WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    Ok(timezone)
}

pub async fn upsert_timezone(pool: &Pool<Sqlite>, user_id: UserId, timezone: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_timezones (user_id, timezone)
        VALUES (?, ?)
        ON CONFLICT (user_id) DO UPDATE SET timezone = excluded.timezone
        "#,
    )
    .bind(user_id)
    .bind(timezone)
    .execute(pool)
    .await?;

    Ok(())
}

/// Unknown stored codes read back as "no preference".
pub async fn get_language(pool: &Pool<Sqlite>, user_id: UserId) -> Result<Option<Language>> {
    let code =
        sqlx::query_scalar::<_, String>("SELECT language FROM user_languages WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    Ok(code.and_then(|code| {
        let language = Language::from_code(&code);
        if language.is_none() {
            warn!(user_id, code = %code, "ignoring unknown stored language");
        }
        language
    }))
}

pub async fn upsert_language(pool: &Pool<Sqlite>, user_id: UserId, language: Language) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_languages (user_id, language)
        VALUES (?, ?)
        ON CONFLICT (user_id) DO UPDATE SET language = excluded.language
        "#,
    )
    .bind(user_id)
    .bind(language.code())
    .execute(pool)
    .await?;

    Ok(())
}
