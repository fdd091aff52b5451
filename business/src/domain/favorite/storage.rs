use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Key under which the serialized favorites list is stored.
pub const FAVORITES_STORAGE_KEY: &str = "favorites";

/// Persistent string key-value storage port.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}
