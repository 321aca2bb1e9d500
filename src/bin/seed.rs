//! Seed: replaces all rows in the configured database with sample data.

use pizza_restaurants::{connect, ensure_tables, init_tracing, seed, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    init_tracing();

    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;
    seed(&pool).await?;
    pool.close().await;
    Ok(())
}
