pub mod app_config;
pub mod browser_config;
pub mod cors_config;
pub mod database_config;
pub mod mealdb_config;
pub mod server_config;
