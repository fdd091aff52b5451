use std::sync::Arc;

use logger::TracingLogger;
use mealdb::catalog::RecipeCatalogMealDb;
use mealdb::client::MealDbClient;
use persistence::key_value::repository::KeyValueStoragePostgres;

use business::application::browser::{BrowserSettings, RecipeBrowser, ScreenTargets};
use business::application::favorite::store::PersistentFavoritesStore;
use business::application::recipe::filter_by_category::FilterByCategoryUseCaseImpl;
use business::application::recipe::get_detail::GetRecipeDetailUseCaseImpl;
use business::application::recipe::list_categories::ListCategoriesUseCaseImpl;
use business::application::recipe::load_random::LoadRandomRecipesUseCaseImpl;
use business::application::recipe::search::SearchRecipesUseCaseImpl;
use business::application::render::coordinator::RenderCoordinator;
use business::domain::favorite::storage::KeyValueStorage;
use business::domain::favorite::store::FavoritesStore;
use business::domain::logger::Logger;
use business::domain::recipe::services::RecipeCatalogService;

use crate::api::favorite::routes::FavoriteApi;
use crate::config::app_config::AppConfig;
use crate::ui::session::{Screen, Session};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub favorite_api: FavoriteApi,
    pub session: Arc<Session>,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let catalog = Arc::new(RecipeCatalogMealDb::new(MealDbClient::new(
            config.mealdb.base_url.clone(),
        )));
        let storage = Arc::new(KeyValueStoragePostgres::new(pool));

        Ok(Self::assemble(catalog, storage, logger, config.browser).await)
    }

    /// Wires the session from its ports. Favorites are read from storage once, here.
    pub async fn assemble(
        catalog: Arc<dyn RecipeCatalogService>,
        storage: Arc<dyn KeyValueStorage>,
        logger: Arc<dyn Logger>,
        settings: BrowserSettings,
    ) -> Self {
        let store: Arc<dyn FavoritesStore> =
            Arc::new(PersistentFavoritesStore::load(storage, logger.clone()).await);

        let screen = Screen::default();
        let coordinator = Arc::new(RenderCoordinator::new(
            store.clone(),
            screen.favorites.clone(),
            screen.detail.clone(),
            logger.clone(),
        ));

        // Recipe use cases
        let browser = RecipeBrowser {
            list_categories: Arc::new(ListCategoriesUseCaseImpl {
                catalog: catalog.clone(),
                logger: logger.clone(),
            }),
            load_random: Arc::new(LoadRandomRecipesUseCaseImpl {
                catalog: catalog.clone(),
                logger: logger.clone(),
            }),
            filter_by_category: Arc::new(FilterByCategoryUseCaseImpl {
                catalog: catalog.clone(),
                logger: logger.clone(),
            }),
            search: Arc::new(SearchRecipesUseCaseImpl {
                catalog: catalog.clone(),
                logger: logger.clone(),
            }),
            get_detail: Arc::new(GetRecipeDetailUseCaseImpl {
                catalog,
                logger: logger.clone(),
            }),
            coordinator: coordinator.clone(),
            targets: ScreenTargets {
                categories: screen.categories.clone(),
                recipes: screen.recipes.clone(),
            },
            settings,
            logger,
        };

        let favorite_api = FavoriteApi::new(store, coordinator);
        let session = Arc::new(Session { browser, screen });

        Self {
            health_api: crate::api::health::routes::Api::new(),
            favorite_api,
            session,
        }
    }
}
