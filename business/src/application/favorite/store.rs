use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::{FavoriteEntry, FavoriteList, ToggleOutcome};
use crate::domain::favorite::storage::{FAVORITES_STORAGE_KEY, KeyValueStorage};
use crate::domain::favorite::store::{FavoritesStore, ToggleFavoriteParams};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::RecipeId;

/// Favorites mirrored to a `KeyValueStorage`.
///
/// The lock is held from computing the next list until it has been
/// written, so toggles are applied one at a time.
pub struct PersistentFavoritesStore {
    entries: Mutex<FavoriteList>,
    storage: Arc<dyn KeyValueStorage>,
    logger: Arc<dyn Logger>,
}

impl PersistentFavoritesStore {
    /// Reads the persisted list. Missing, unreadable or malformed data
    /// yields an empty store.
    pub async fn load(storage: Arc<dyn KeyValueStorage>, logger: Arc<dyn Logger>) -> Self {
        let entries = match storage.get(FAVORITES_STORAGE_KEY).await {
            Ok(Some(raw)) => FavoriteList::from_json(&raw).unwrap_or_else(|err| {
                logger.warn(&format!("Ignoring malformed stored favorites: {}", err));
                FavoriteList::default()
            }),
            Ok(None) => FavoriteList::default(),
            Err(err) => {
                logger.warn(&format!("Could not read stored favorites: {}", err));
                FavoriteList::default()
            }
        };

        logger.info(&format!("Loaded {} favorites", entries.len()));

        Self {
            entries: Mutex::new(entries),
            storage,
            logger,
        }
    }
}

#[async_trait]
impl FavoritesStore for PersistentFavoritesStore {
    async fn contains(&self, id: &RecipeId) -> bool {
        self.entries.lock().await.contains(id)
    }

    async fn toggle(&self, params: ToggleFavoriteParams) -> Result<ToggleOutcome, FavoriteError> {
        let mut entries = self.entries.lock().await;

        let id = params.id.clone();
        let (next, outcome) = entries.toggled(FavoriteEntry::new(
            params.id,
            params.name,
            params.thumbnail_url,
        ));
        let raw = next.to_json().map_err(|_| FavoriteError::Serialization)?;

        if let Err(err) = self.storage.set(FAVORITES_STORAGE_KEY, &raw).await {
            self.logger
                .error(&format!("Failed to persist favorites: {}", err));
            return Err(err.into());
        }

        *entries = next;
        self.logger
            .info(&format!("Favorite {} {}", id, outcome));
        Ok(outcome)
    }

    async fn snapshot(&self) -> Vec<FavoriteEntry> {
        self.entries.lock().await.entries().to_vec()
    }
}
