use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - MIGRATIONS_PATH: directory of sqlx migrations (default: "./infrastructure/persistence/migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let migrations_path =
            env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            migrations_path,
        })
    }
}

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&DatabaseConfig::new(settings.url.clone()))
        .await
        .context("failed to connect to the database")?;

    run_migrations(&pool, &settings.migrations_path)
        .await
        .with_context(|| format!("failed to run migrations from {}", settings.migrations_path))?;

    Ok(pool)
}
