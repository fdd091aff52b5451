use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::load_random::{
    LoadRandomRecipesParams, LoadRandomRecipesUseCase,
};

pub struct LoadRandomRecipesUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadRandomRecipesUseCase for LoadRandomRecipesUseCaseImpl {
    async fn execute(&self, params: LoadRandomRecipesParams) -> Vec<Recipe> {
        self.logger
            .info(&format!("Loading {} random recipes", params.count));

        // Each fetch completes before the next starts; results keep request order.
        let mut recipes = Vec::with_capacity(params.count);
        for attempt in 0..params.count {
            match self.catalog.random().await {
                Ok(recipe) => recipes.push(recipe),
                Err(err) => self.logger.warn(&format!(
                    "Random recipe fetch {} failed: {}",
                    attempt + 1,
                    err
                )),
            }
        }

        self.logger
            .info(&format!("Loaded {} random recipes", recipes.len()));
        recipes
    }
}
