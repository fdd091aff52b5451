use async_trait::async_trait;

use crate::domain::recipe::model::Recipe;
use crate::domain::shared::value_objects::RecipeId;

pub struct GetRecipeDetailParams {
    pub id: RecipeId,
}

#[async_trait]
pub trait GetRecipeDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipeDetailParams) -> Option<Recipe>;
}
