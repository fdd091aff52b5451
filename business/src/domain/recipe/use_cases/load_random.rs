use async_trait::async_trait;

use crate::domain::recipe::model::Recipe;

pub struct LoadRandomRecipesParams {
    pub count: usize,
}

/// Fetches `count` random recipes one after another. Failed fetches are
/// skipped, so the result may hold fewer than `count` recipes.
#[async_trait]
pub trait LoadRandomRecipesUseCase: Send + Sync {
    async fn execute(&self, params: LoadRandomRecipesParams) -> Vec<Recipe>;
}
