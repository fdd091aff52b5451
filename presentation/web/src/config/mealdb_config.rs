use mealdb::client::DEFAULT_BASE_URL;
use std::env;

#[derive(Debug, Clone)]
pub struct MealDbConfig {
    pub base_url: String,
}

impl MealDbConfig {
    /// Environment variables:
    /// - MEALDB_API_URL: catalogue base URL (default: the public v1 test key endpoint)
    pub fn from_env() -> Self {
        let base_url = env::var("MEALDB_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }
}
