pub mod memory;
pub mod repositories;

pub use memory::MemoryStore;
pub use repositories::MockTimeStore;

/// In-memory SQLite pool with the schema applied.
pub async fn create_test_pool() -> eyre::Result<crate::DbPool> {
    let pool = crate::create_pool("sqlite::memory:").await?;
    crate::schema::initialize_database(&pool).await?;
    Ok(pool)
}
