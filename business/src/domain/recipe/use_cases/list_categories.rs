use async_trait::async_trait;

use crate::domain::recipe::model::Category;

pub struct ListCategoriesParams {
    pub limit: usize,
}

/// Returns `None` when the catalogue could not be reached.
#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self, params: ListCategoriesParams) -> Option<Vec<Category>>;
}
