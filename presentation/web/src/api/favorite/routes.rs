use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::application::render::coordinator::RenderCoordinator;
use business::domain::favorite::model::FavoriteEntry;
use business::domain::favorite::store::FavoritesStore;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::favorite::dto::{
    FavoriteEntryResponse, ToggleFavoriteRequest, ToggleFavoriteResult,
};
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    store: Arc<dyn FavoritesStore>,
    coordinator: Arc<RenderCoordinator>,
}

impl FavoriteApi {
    pub fn new(store: Arc<dyn FavoritesStore>, coordinator: Arc<RenderCoordinator>) -> Self {
        Self { store, coordinator }
    }

    async fn favorites(&self) -> Vec<FavoriteEntryResponse> {
        self.store
            .snapshot()
            .await
            .into_iter()
            .map(FavoriteEntryResponse::from)
            .collect()
    }
}

/// Favorites API
///
/// JSON access to the session's favorites list.
#[OpenApi]
impl FavoriteApi {
    /// List favorites
    ///
    /// Returns the favorites in the order they were added.
    #[oai(path = "/favorites", method = "get", tag = "ApiTags::Favorites")]
    async fn get_all(&self) -> Json<Vec<FavoriteEntryResponse>> {
        Json(self.favorites().await)
    }

    /// Toggle a favorite
    ///
    /// Removes the recipe when it is already a favorite (matching on id
    /// only), otherwise appends it. The change is persisted before the
    /// response is sent and the HTML screen is redrawn.
    #[oai(path = "/favorites/toggle", method = "post", tag = "ApiTags::Favorites")]
    async fn toggle(&self, body: Json<ToggleFavoriteRequest>) -> ToggleFavoriteResponse {
        let entry = FavoriteEntry::from(body.0);

        match self.coordinator.toggle_favorite(entry.into()).await {
            Ok(outcome) => ToggleFavoriteResponse::Ok(Json(ToggleFavoriteResult {
                outcome: outcome.to_string(),
                favorites: self.favorites().await,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ToggleFavoriteResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleFavoriteResponse {
    #[oai(status = 200)]
    Ok(Json<ToggleFavoriteResult>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
