pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub mod mock;

use std::str::FromStr;

use eyre::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::debug;

pub use store::SqliteStore;

pub type DbPool = Pool<Sqlite>;

/// Open a pool for `database_url`, creating the database file if needed.
///
/// An in-memory database lives only as long as its connection, so it gets a
/// single connection that is never recycled.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    }
    .connect_with(options)
    .await?;

    debug!(database_url, "database pool ready");
    Ok(pool)
}
