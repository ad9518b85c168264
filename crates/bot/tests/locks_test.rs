use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use timekeeper_bot::locks::KeyedLocks;
use timekeeper_core::store::TimeStore;
use timekeeper_db::mock::MemoryStore;

#[tokio::test]
async fn test_same_key_is_exclusive() {
    let locks = Arc::new(KeyedLocks::new());
    let guard = locks.lock(1).await;

    let contender = {
        let locks = Arc::clone(&locks);
        tokio::spawn(async move {
            let _guard = locks.lock(1).await;
        })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!contender.is_finished());

    drop(guard);
    contender.await.unwrap();
}

#[tokio::test]
async fn test_different_keys_do_not_block() {
    let locks = KeyedLocks::new();
    let _first = locks.lock("a").await;
    let _second = locks.lock("b").await;
    assert_eq!(locks.len(), 2);
}

#[tokio::test]
async fn test_released_keys_are_pruned() {
    let locks = KeyedLocks::new();
    drop(locks.lock(1).await);
    drop(locks.lock(2).await);

    // pruning happens on the next lock
    let _held = locks.lock(3).await;
    assert_eq!(locks.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_record_writers_on_one_day_are_serialized() {
    let locks = Arc::new(KeyedLocks::new());
    let store = Arc::new(MemoryStore::new());
    let opened = Arc::new(AtomicUsize::new(0));
    let day = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();

    let writers: Vec<_> = (0..8u32)
        .map(|minute| {
            let locks = Arc::clone(&locks);
            let store = Arc::clone(&store);
            let opened = Arc::clone(&opened);
            tokio::spawn(async move {
                let _guard = locks.lock((1_i64, day)).await;
                if store.get_record(1, day).await.unwrap().is_some() {
                    return;
                }
                tokio::task::yield_now().await;
                let arrival = NaiveTime::from_hms_opt(8, minute, 0).unwrap();
                if store.put_arrival(1, day, arrival).await.unwrap() {
                    opened.fetch_add(1, Ordering::SeqCst);
                }
            })
        })
        .collect();
    for writer in writers {
        writer.await.unwrap();
    }

    assert_eq!(opened.load(Ordering::SeqCst), 1);
    assert_eq!(store.record_count(1).await, 1);
}
