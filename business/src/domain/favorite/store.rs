use async_trait::async_trait;

use crate::domain::shared::value_objects::RecipeId;

use super::errors::FavoriteError;
use super::model::{FavoriteEntry, ToggleOutcome};

pub struct ToggleFavoriteParams {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail_url: String,
}

impl From<FavoriteEntry> for ToggleFavoriteParams {
    fn from(entry: FavoriteEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            thumbnail_url: entry.thumbnail_url,
        }
    }
}

/// Process-wide favorites of the session.
///
/// `toggle` is the only mutation. It returns once the resulting list has
/// been written to storage; on a failed write the in-memory list is left
/// as it was.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn contains(&self, id: &RecipeId) -> bool;
    async fn toggle(&self, params: ToggleFavoriteParams) -> Result<ToggleOutcome, FavoriteError>;
    async fn snapshot(&self) -> Vec<FavoriteEntry>;
}
