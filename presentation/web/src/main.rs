use dotenvy::dotenv;

mod api;
mod config;
mod setup;
mod ui;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Recipe browser entry point
///
/// - config/: environment configuration (server, CORS, database, catalogue, list sizes)
/// - setup/: dependency wiring and server assembly
/// - ui/: server-rendered page and action routes
/// - api/: JSON favorites and health endpoints
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies, restoring favorites from storage
    let container = DependencyContainer::new(pool, &config).await?;

    // 6. Draw the initial screen
    container.session.browser.start().await;

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}
