use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::model::Category;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::list_categories::{
    ListCategoriesParams, ListCategoriesUseCase,
};

pub struct ListCategoriesUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self, params: ListCategoriesParams) -> Option<Vec<Category>> {
        self.logger.info("Listing recipe categories");

        match self.catalog.list_categories().await {
            Ok(mut categories) => {
                categories.truncate(params.limit);
                self.logger
                    .info(&format!("Retrieved {} categories", categories.len()));
                Some(categories)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Failed to list categories: {}", err));
                None
            }
        }
    }
}
