use color_eyre::eyre::Result;
use dotenv::dotenv;
use timekeeper_bot::config::DEFAULT_DATABASE_URL;
use timekeeper_db::schema::initialize_database;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    info!(%database_url, "Connecting to database");
    let db_pool = timekeeper_db::create_pool(&database_url).await?;

    initialize_database(&db_pool).await?;
    info!("Database schema initialized successfully");

    Ok(())
}
