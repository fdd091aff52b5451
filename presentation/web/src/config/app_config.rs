use super::{
    browser_config, cors_config, database_config::DatabaseSettings, mealdb_config::MealDbConfig,
    server_config::ServerConfig,
};
use business::application::browser::BrowserSettings;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub mealdb: MealDbConfig,
    pub browser: BrowserSettings,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            mealdb: MealDbConfig::from_env(),
            browser: browser_config::from_env(),
        })
    }
}
