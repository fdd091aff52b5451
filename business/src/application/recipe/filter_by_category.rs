use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::filter_by_category::{
    FilterByCategoryParams, FilterByCategoryUseCase,
};

pub struct FilterByCategoryUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FilterByCategoryUseCase for FilterByCategoryUseCaseImpl {
    async fn execute(&self, params: FilterByCategoryParams) -> Option<Vec<Recipe>> {
        self.logger
            .info(&format!("Filtering recipes by category: {}", params.category));

        match self.catalog.filter_by_category(&params.category).await {
            Ok(mut recipes) => {
                recipes.truncate(params.limit);
                Some(recipes)
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Failed to filter by category {}: {}",
                    params.category, err
                ));
                None
            }
        }
    }
}
