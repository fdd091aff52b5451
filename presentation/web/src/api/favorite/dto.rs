use poem_openapi::Object;

use business::domain::favorite::model::FavoriteEntry;
use business::domain::shared::value_objects::RecipeId;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct FavoriteEntryResponse {
    /// Recipe identifier
    pub id: String,
    /// Recipe display name
    pub name: String,
    /// Recipe thumbnail URL
    pub thumbnail_url: String,
}

impl From<FavoriteEntry> for FavoriteEntryResponse {
    fn from(entry: FavoriteEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name,
            thumbnail_url: entry.thumbnail_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ToggleFavoriteRequest {
    /// Recipe identifier (not validated; an empty string is accepted)
    pub id: String,
    /// Display name stored when the recipe is added
    #[oai(default)]
    pub name: String,
    /// Thumbnail URL stored when the recipe is added
    #[oai(default)]
    pub thumbnail_url: String,
}

impl From<ToggleFavoriteRequest> for FavoriteEntry {
    fn from(request: ToggleFavoriteRequest) -> Self {
        FavoriteEntry::new(
            RecipeId::new(request.id),
            request.name,
            request.thumbnail_url,
        )
    }
}

#[derive(Debug, Clone, Object)]
pub struct ToggleFavoriteResult {
    /// "added" or "removed"
    pub outcome: String,
    /// Favorites after the toggle, in display order
    pub favorites: Vec<FavoriteEntryResponse>,
}
