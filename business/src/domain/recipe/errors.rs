#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.not_found")]
    NotFound,
    #[error("recipe.catalog_unavailable")]
    CatalogUnavailable,
    #[error("recipe.malformed_response")]
    MalformedResponse,
}
