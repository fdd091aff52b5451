use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::favorite::storage::KeyValueStorage;

use super::entity::KeyValueEntity;

/// `KeyValueStorage` backed by the `key_value_entries` table.
///
/// `set` is a single upsert, so a value is either fully replaced or left
/// untouched.
pub struct KeyValueStoragePostgres {
    pool: PgPool,
}

impl KeyValueStoragePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStorage for KeyValueStoragePostgres {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, KeyValueEntity>(
            "SELECT key, value, updated_at FROM key_value_entries WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO key_value_entries (key, value, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
