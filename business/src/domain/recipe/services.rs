use async_trait::async_trait;

use crate::domain::shared::value_objects::RecipeId;

use super::errors::RecipeError;
use super::model::{Category, Recipe};

/// Service port for the remote recipe catalogue.
///
/// An upstream answer without meals (`null`) is reported as
/// `RecipeError::NotFound`; transport and decoding failures use the other
/// variants. Implementations do not retry.
#[async_trait]
pub trait RecipeCatalogService: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, RecipeError>;
    async fn random(&self) -> Result<Recipe, RecipeError>;
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeError>;
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, RecipeError>;
    async fn lookup(&self, id: &RecipeId) -> Result<Recipe, RecipeError>;
}
