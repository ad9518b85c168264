use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use timekeeper_core::models::{Language, TimeField, TimeRecord, YearMonth};
use timekeeper_core::store::TimeStore;
use timekeeper_db::mock::{MemoryStore, create_test_pool};
use timekeeper_db::{SqliteStore, create_pool, schema};

#[derive(Debug, Clone, Copy)]
enum Backend {
    Sqlite,
    Memory,
}

async fn open(backend: Backend) -> Arc<dyn TimeStore> {
    match backend {
        Backend::Sqlite => Arc::new(SqliteStore::new(create_test_pool().await.unwrap())),
        Backend::Memory => Arc::new(MemoryStore::new()),
    }
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[rstest]
#[case(Backend::Sqlite)]
#[case(Backend::Memory)]
#[tokio::test]
async fn test_arrival_then_departure(#[case] backend: Backend) {
    let store = open(backend).await;
    let day = date(2025, 1, 9);

    assert!(store.put_arrival(1, day, t(9, 0)).await.unwrap());
    assert!(!store.put_arrival(1, day, t(10, 0)).await.unwrap());

    let open = store.get_record(1, day).await.unwrap().unwrap();
    assert_eq!(open.arrival, Some(t(9, 0)));
    assert!(open.is_open());

    assert!(store.put_departure(1, day, t(18, 0)).await.unwrap());
    assert!(!store.put_departure(1, day, t(19, 0)).await.unwrap());

    let closed = store.get_record(1, day).await.unwrap().unwrap();
    assert_eq!(
        closed,
        TimeRecord {
            user_id: 1,
            date: day,
            arrival: Some(t(9, 0)),
            departure: Some(t(18, 0)),
        }
    );
}

#[rstest]
#[case(Backend::Sqlite)]
#[case(Backend::Memory)]
#[tokio::test]
async fn test_departure_without_record(#[case] backend: Backend) {
    let store = open(backend).await;
    assert!(!store.put_departure(1, date(2025, 1, 9), t(18, 0)).await.unwrap());
    assert_eq!(store.get_record(1, date(2025, 1, 9)).await.unwrap(), None);
}

#[rstest]
#[case(Backend::Sqlite)]
#[case(Backend::Memory)]
#[tokio::test]
async fn test_update_and_delete(#[case] backend: Backend) {
    let store = open(backend).await;
    let day = date(2025, 1, 9);

    assert!(!store.update_time(1, day, TimeField::Arrival, t(8, 0)).await.unwrap());
    assert!(!store.delete_record(1, day).await.unwrap());

    store.put_arrival(1, day, t(9, 0)).await.unwrap();
    assert!(store.update_time(1, day, TimeField::Departure, t(17, 30)).await.unwrap());
    assert!(store.update_time(1, day, TimeField::Arrival, t(8, 15)).await.unwrap());

    let record = store.get_record(1, day).await.unwrap().unwrap();
    assert_eq!(record.arrival, Some(t(8, 15)));
    assert_eq!(record.departure, Some(t(17, 30)));

    assert!(store.delete_record(1, day).await.unwrap());
    assert_eq!(store.get_record(1, day).await.unwrap(), None);
}

#[rstest]
#[case(Backend::Sqlite)]
#[case(Backend::Memory)]
#[tokio::test]
async fn test_months_are_scoped_per_user(#[case] backend: Backend) {
    let store = open(backend).await;

    store.put_arrival(1, date(2025, 2, 3), t(9, 0)).await.unwrap();
    store.put_arrival(1, date(2025, 1, 20), t(9, 0)).await.unwrap();
    store.put_arrival(1, date(2025, 1, 5), t(9, 0)).await.unwrap();
    store.put_arrival(1, date(2024, 12, 31), t(9, 0)).await.unwrap();
    store.put_arrival(2, date(2023, 6, 1), t(9, 0)).await.unwrap();

    let months = store.list_distinct_months(1).await.unwrap();
    assert_eq!(
        months,
        vec![
            YearMonth::new(2025, 2).unwrap(),
            YearMonth::new(2025, 1).unwrap(),
            YearMonth::new(2024, 12).unwrap(),
        ]
    );

    let january = store
        .list_records_for_month(1, YearMonth::new(2025, 1).unwrap())
        .await
        .unwrap();
    let dates: Vec<NaiveDate> = january.iter().map(|record| record.date).collect();
    assert_eq!(dates, vec![date(2025, 1, 5), date(2025, 1, 20)]);

    assert!(store.list_distinct_months(3).await.unwrap().is_empty());
}

#[rstest]
#[case(Backend::Sqlite)]
#[case(Backend::Memory)]
#[tokio::test]
async fn test_profile_settings_overwrite(#[case] backend: Backend) {
    let store = open(backend).await;

    assert_eq!(store.get_rate(1).await.unwrap(), None);
    assert_eq!(store.get_timezone(1).await.unwrap(), None);
    assert_eq!(store.get_language(1).await.unwrap(), None);

    store.set_rate(1, 25.0).await.unwrap();
    store.set_rate(1, 27.5).await.unwrap();
    store.set_timezone(1, "Europe/Kyiv").await.unwrap();
    store.set_language(1, Language::English).await.unwrap();
    store.set_language(1, Language::Polish).await.unwrap();

    assert_eq!(store.get_rate(1).await.unwrap(), Some(27.5));
    assert_eq!(store.get_timezone(1).await.unwrap().as_deref(), Some("Europe/Kyiv"));
    assert_eq!(store.get_language(1).await.unwrap(), Some(Language::Polish));
    assert_eq!(store.get_rate(2).await.unwrap(), None);
}

#[tokio::test]
async fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("records.db").display());

    {
        let pool = create_pool(&url).await.unwrap();
        schema::initialize_database(&pool).await.unwrap();
        let store = SqliteStore::new(pool.clone());
        store.put_arrival(5, date(2025, 3, 1), t(22, 0)).await.unwrap();
        store.put_departure(5, date(2025, 3, 1), t(6, 0)).await.unwrap();
        pool.close().await;
    }

    let pool = create_pool(&url).await.unwrap();
    // schema creation is idempotent
    schema::initialize_database(&pool).await.unwrap();
    let store = SqliteStore::new(pool);
    let record = store.get_record(5, date(2025, 3, 1)).await.unwrap().unwrap();
    assert!(record.crosses_midnight());
}

#[tokio::test]
async fn test_seconds_survive_round_trip() {
    let store = SqliteStore::new(create_test_pool().await.unwrap());
    let arrival = NaiveTime::from_hms_opt(9, 5, 42).unwrap();
    store.put_arrival(1, date(2025, 1, 9), arrival).await.unwrap();

    let stored: Option<String> =
        sqlx::query_scalar("SELECT arrival_time FROM time_records WHERE user_id = 1")
            .fetch_one(store.pool())
            .await
            .unwrap();
    assert_eq!(stored.as_deref(), Some("09:05:42"));
}
