use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::get_detail::{
    GetRecipeDetailParams, GetRecipeDetailUseCase,
};

pub struct GetRecipeDetailUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeDetailUseCase for GetRecipeDetailUseCaseImpl {
    async fn execute(&self, params: GetRecipeDetailParams) -> Option<Recipe> {
        self.logger
            .info(&format!("Fetching recipe detail: {}", params.id));

        self.catalog
            .lookup(&params.id)
            .await
            .map_err(|err| {
                self.logger
                    .warn(&format!("Recipe {} lookup failed: {}", params.id, err));
            })
            .ok()
    }
}
