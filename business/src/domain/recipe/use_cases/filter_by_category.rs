use async_trait::async_trait;

use crate::domain::recipe::model::Recipe;

pub struct FilterByCategoryParams {
    pub category: String,
    pub limit: usize,
}

#[async_trait]
pub trait FilterByCategoryUseCase: Send + Sync {
    async fn execute(&self, params: FilterByCategoryParams) -> Option<Vec<Recipe>>;
}
