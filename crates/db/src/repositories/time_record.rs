use crate::models::DbTimeRecord;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use sqlx::{Pool, Sqlite};
use timekeeper_core::models::{TimeField, TimeRecord, UserId, YearMonth};
use timekeeper_core::time::{format_date, format_time};

pub async fn get_time_record(
    pool: &Pool<Sqlite>,
    user_id: UserId,
    date: NaiveDate,
) -> Result<Option<TimeRecord>> {
    let row = sqlx::query_as::<_, DbTimeRecord>(
        r#"
        SELECT user_id, date, arrival_time, departure_time
        FROM time_records
        WHERE user_id = ? AND date = ?
        "#,
    )
    .bind(user_id)
    .bind(format_date(date))
    .fetch_optional(pool)
    .await?;

    row.map(DbTimeRecord::into_record).transpose()
}

/// Insert an open record; an existing row for the same day is left alone.
pub async fn insert_arrival(
    pool: &Pool<Sqlite>,
    user_id: UserId,
    date: NaiveDate,
    arrival: NaiveTime,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO time_records (user_id, date, arrival_time, departure_time)
        VALUES (?, ?, ?, NULL)
        ON CONFLICT (user_id, date) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(format_date(date))
    .bind(format_time(arrival))
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn close_time_record(
    pool: &Pool<Sqlite>,
    user_id: UserId,
    date: NaiveDate,
    departure: NaiveTime,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE time_records
        SET departure_time = ?
        WHERE user_id = ? AND date = ?
          AND arrival_time IS NOT NULL
          AND departure_time IS NULL
        "#,
    )
    .bind(format_time(departure))
    .bind(user_id)
    .bind(format_date(date))
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn update_time_field(
    pool: &Pool<Sqlite>,
    user_id: UserId,
    date: NaiveDate,
    field: TimeField,
    time: NaiveTime,
) -> Result<bool> {
    let sql = match field {
        TimeField::Arrival => {
            "UPDATE time_records SET arrival_time = ? WHERE user_id = ? AND date = ?"
        }
        TimeField::Departure => {
            "UPDATE time_records SET departure_time = ? WHERE user_id = ? AND date = ?"
        }
    };

    let result = sqlx::query(sql)
        .bind(format_time(time))
        .bind(user_id)
        .bind(format_date(date))
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn delete_time_record(pool: &Pool<Sqlite>, user_id: UserId, date: NaiveDate) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM time_records
        WHERE user_id = ? AND date = ?
        "#,
    )
    .bind(user_id)
    .bind(format_date(date))
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn get_time_records_for_month(
    pool: &Pool<Sqlite>,
    user_id: UserId,
    month: YearMonth,
) -> Result<Vec<TimeRecord>> {
    let rows = sqlx::query_as::<_, DbTimeRecord>(
        r#"
        SELECT user_id, date, arrival_time, departure_time
        FROM time_records
        WHERE user_id = ? AND date LIKE ?
        ORDER BY date ASC
        "#,
    )
    .bind(user_id)
    .bind(format!("{month}-%"))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(DbTimeRecord::into_record).collect()
}

pub async fn get_distinct_months(pool: &Pool<Sqlite>, user_id: UserId) -> Result<Vec<YearMonth>> {
    let months = sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT substr(date, 1, 7) AS month
        FROM time_records
        WHERE user_id = ?
        ORDER BY month DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    months
        .iter()
        .map(|month| month.parse::<YearMonth>().map_err(eyre::Report::from))
        .collect()
}
