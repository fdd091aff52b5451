use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::search::{
    SearchOutcome, SearchRecipesParams, SearchRecipesUseCase,
};

pub struct SearchRecipesUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchRecipesUseCase for SearchRecipesUseCaseImpl {
    async fn execute(&self, params: SearchRecipesParams) -> SearchOutcome {
        let query = params.query.trim();
        if query.is_empty() {
            return SearchOutcome::Skipped;
        }

        self.logger.info(&format!("Searching recipes: {}", query));

        match self.catalog.search(query).await {
            Ok(recipes) => {
                self.logger
                    .info(&format!("Search returned {} recipes", recipes.len()));
                SearchOutcome::Found(recipes)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Search for {} returned nothing: {}", query, err));
                SearchOutcome::NoResults
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::errors::RecipeError;
    use crate::domain::recipe::model::{Category, Recipe};
    use crate::domain::shared::value_objects::RecipeId;
    use mockall::mock;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl RecipeCatalogService for Catalog {
            async fn list_categories(&self) -> Result<Vec<Category>, RecipeError>;
            async fn random(&self) -> Result<Recipe, RecipeError>;
            async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeError>;
            async fn search(&self, query: &str) -> Result<Vec<Recipe>, RecipeError>;
            async fn lookup(&self, id: &RecipeId) -> Result<Recipe, RecipeError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_skip_blank_query_without_fetching() {
        let catalog = MockCatalog::new();

        let use_case = SearchRecipesUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(SearchRecipesParams {
                query: "   ".to_string(),
            })
            .await;

        assert_eq!(outcome, SearchOutcome::Skipped);
    }

    #[tokio::test]
    async fn should_search_with_trimmed_query() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .withf(|query| query == "Arrabiata")
            .returning(|_| {
                Ok(vec![Recipe::summary(
                    RecipeId::new("52771"),
                    "Spicy Arrabiata Penne".to_string(),
                    String::new(),
                )])
            });

        let use_case = SearchRecipesUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(SearchRecipesParams {
                query: "  Arrabiata ".to_string(),
            })
            .await;

        let SearchOutcome::Found(recipes) = outcome else {
            panic!("expected results");
        };
        assert_eq!(recipes[0].id, RecipeId::new("52771"));
    }

    #[tokio::test]
    async fn should_conflate_no_match_and_failure() {
        let mut not_found = MockCatalog::new();
        not_found
            .expect_search()
            .returning(|_| Err(RecipeError::NotFound));
        let mut unavailable = MockCatalog::new();
        unavailable
            .expect_search()
            .returning(|_| Err(RecipeError::CatalogUnavailable));

        let params = || SearchRecipesParams {
            query: "xyz".to_string(),
        };
        let first = SearchRecipesUseCaseImpl {
            catalog: Arc::new(not_found),
            logger: mock_logger(),
        }
        .execute(params())
        .await;
        let second = SearchRecipesUseCaseImpl {
            catalog: Arc::new(unavailable),
            logger: mock_logger(),
        }
        .execute(params())
        .await;

        assert_eq!(first, SearchOutcome::NoResults);
        assert_eq!(second, SearchOutcome::NoResults);
    }
}
