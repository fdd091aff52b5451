use async_trait::async_trait;

use crate::domain::recipe::model::Recipe;

pub struct SearchRecipesParams {
    pub query: String,
}

/// Outcome of a search request.
///
/// A failed fetch and a search without matches are both `NoResults`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The trimmed query was empty; nothing was requested.
    Skipped,
    NoResults,
    Found(Vec<Recipe>),
}

#[async_trait]
pub trait SearchRecipesUseCase: Send + Sync {
    async fn execute(&self, params: SearchRecipesParams) -> SearchOutcome;
}
