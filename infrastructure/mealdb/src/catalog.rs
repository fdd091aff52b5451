use async_trait::async_trait;
use serde::de::DeserializeOwned;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{Category, Recipe};
use business::domain::recipe::services::RecipeCatalogService;
use business::domain::shared::value_objects::RecipeId;

use crate::client::MealDbClient;
use crate::dto::{CategoriesResponse, MealDto, MealsResponse};

pub struct RecipeCatalogMealDb {
    client: MealDbClient,
}

impl RecipeCatalogMealDb {
    pub fn new(client: MealDbClient) -> Self {
        Self { client }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RecipeError> {
        let url = self
            .client
            .endpoint_url(endpoint, query)
            .map_err(|_| RecipeError::CatalogUnavailable)?;

        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(|_| RecipeError::CatalogUnavailable)?;

        if !response.status().is_success() {
            return Err(RecipeError::CatalogUnavailable);
        }

        response
            .json::<T>()
            .await
            .map_err(|_| RecipeError::MalformedResponse)
    }

    async fn fetch_meals(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<MealDto>, RecipeError> {
        let data: MealsResponse = self.fetch(endpoint, query).await?;
        data.meals.ok_or(RecipeError::NotFound)
    }

    async fn fetch_first_meal(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Recipe, RecipeError> {
        self.fetch_meals(endpoint, query)
            .await?
            .into_iter()
            .next()
            .map(MealDto::into_domain)
            .ok_or(RecipeError::NotFound)
    }
}

#[async_trait]
impl RecipeCatalogService for RecipeCatalogMealDb {
    async fn list_categories(&self) -> Result<Vec<Category>, RecipeError> {
        let data: CategoriesResponse = self.fetch("categories.php", &[]).await?;
        let categories = data.categories.ok_or(RecipeError::NotFound)?;
        Ok(categories.into_iter().map(|c| c.into_domain()).collect())
    }

    async fn random(&self) -> Result<Recipe, RecipeError> {
        self.fetch_first_meal("random.php", &[]).await
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeError> {
        let meals = self.fetch_meals("filter.php", &[("c", category)]).await?;
        Ok(meals.into_iter().map(MealDto::into_domain).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, RecipeError> {
        let meals = self.fetch_meals("search.php", &[("s", query)]).await?;
        Ok(meals.into_iter().map(MealDto::into_domain).collect())
    }

    async fn lookup(&self, id: &RecipeId) -> Result<Recipe, RecipeError> {
        self.fetch_first_meal("lookup.php", &[("i", id.as_str())])
            .await
    }
}
