/**
 * Inkwell Seed Tool
 *
 * Replaces posts and categories in the configured store with sample data.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), inkwell::backend::server::InitError> {
    use inkwell::backend::seed::seed;
    use inkwell::backend::server::config::load_database;
    use inkwell::backend::server::ServerConfig;

    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env()?;
    let pool = load_database(&config.database_url).await?;

    let report = seed(&pool).await.map_err(|e| {
        tracing::error!("Error seeding data: {}", e);
        e
    })?;

    tracing::info!(
        "Seed complete: {} categories and {} posts created",
        report.categories_created,
        report.posts_created
    );

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Seeding requires the 'ssr' feature to be enabled.");
    std::process::exit(1);
}
