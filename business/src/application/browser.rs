use std::sync::Arc;

use crate::application::render::coordinator::RenderCoordinator;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::logger::Logger;
use crate::domain::recipe::use_cases::filter_by_category::{
    FilterByCategoryParams, FilterByCategoryUseCase,
};
use crate::domain::recipe::use_cases::get_detail::{GetRecipeDetailParams, GetRecipeDetailUseCase};
use crate::domain::recipe::use_cases::list_categories::{
    ListCategoriesParams, ListCategoriesUseCase,
};
use crate::domain::recipe::use_cases::load_random::{
    LoadRandomRecipesParams, LoadRandomRecipesUseCase,
};
use crate::domain::recipe::use_cases::search::{
    SearchOutcome, SearchRecipesParams, SearchRecipesUseCase,
};
use crate::domain::render::model::{Notice, UiAction};
use crate::domain::render::target::RenderTarget;

pub const NO_RESULTS_MESSAGE: &str = "No recipes found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserSettings {
    pub random_count: usize,
    pub category_limit: usize,
    pub category_recipe_limit: usize,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            random_count: 8,
            category_limit: 8,
            category_recipe_limit: 12,
        }
    }
}

/// Screen section the user should be taken to after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Recipes,
}

impl Navigation {
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Navigation::Stay => None,
            Navigation::Recipes => Some("recipes"),
        }
    }
}

/// Regions the browser fills besides favorites and detail, which the
/// coordinator owns.
pub struct ScreenTargets {
    pub categories: Arc<dyn RenderTarget>,
    pub recipes: Arc<dyn RenderTarget>,
}

/// Handles every `UiAction` of a session.
pub struct RecipeBrowser {
    pub list_categories: Arc<dyn ListCategoriesUseCase>,
    pub load_random: Arc<dyn LoadRandomRecipesUseCase>,
    pub filter_by_category: Arc<dyn FilterByCategoryUseCase>,
    pub search: Arc<dyn SearchRecipesUseCase>,
    pub get_detail: Arc<dyn GetRecipeDetailUseCase>,
    pub coordinator: Arc<RenderCoordinator>,
    pub targets: ScreenTargets,
    pub settings: BrowserSettings,
    pub logger: Arc<dyn Logger>,
}

impl RecipeBrowser {
    /// Initial screen: favorites, categories, then a random selection.
    pub async fn start(&self) {
        self.coordinator.refresh().await;
        self.load_categories().await;
        self.load_random_recipes().await;
    }

    pub async fn dispatch(&self, action: UiAction) -> Result<Navigation, FavoriteError> {
        self.logger.debug(&format!("Dispatching {:?}", action));

        match action {
            UiAction::LoadRandom => {
                self.load_random_recipes().await;
                Ok(Navigation::Stay)
            }
            UiAction::ShowCategory { name } => Ok(self.show_category(name).await),
            UiAction::Search { query } => Ok(self.search_recipes(query).await),
            UiAction::ViewDetail { id } => {
                if let Some(recipe) = self
                    .get_detail
                    .execute(GetRecipeDetailParams { id })
                    .await
                {
                    self.coordinator.open_detail(&recipe).await;
                }
                Ok(Navigation::Stay)
            }
            UiAction::CloseDetail | UiAction::DismissDetail => {
                self.coordinator.close_detail().await;
                Ok(Navigation::Stay)
            }
            UiAction::ToggleFavorite(entry) => {
                self.coordinator.toggle_favorite(entry.into()).await?;
                Ok(Navigation::Stay)
            }
        }
    }

    async fn load_categories(&self) {
        let categories = self
            .list_categories
            .execute(ListCategoriesParams {
                limit: self.settings.category_limit,
            })
            .await;

        if let Some(categories) = categories {
            self.coordinator
                .render_categories(&categories, self.targets.categories.as_ref());
        }
    }

    async fn load_random_recipes(&self) {
        self.coordinator
            .render_notice(Notice::Loading, self.targets.recipes.clone())
            .await;

        let recipes = self
            .load_random
            .execute(LoadRandomRecipesParams {
                count: self.settings.random_count,
            })
            .await;

        self.coordinator
            .render_recipe_list(recipes, self.targets.recipes.clone())
            .await;
    }

    async fn show_category(&self, category: String) -> Navigation {
        let recipes = self
            .filter_by_category
            .execute(FilterByCategoryParams {
                category,
                limit: self.settings.category_recipe_limit,
            })
            .await;

        match recipes {
            Some(recipes) => {
                self.coordinator
                    .render_recipe_list(recipes, self.targets.recipes.clone())
                    .await;
                Navigation::Recipes
            }
            None => Navigation::Stay,
        }
    }

    async fn search_recipes(&self, query: String) -> Navigation {
        match self.search.execute(SearchRecipesParams { query }).await {
            SearchOutcome::Skipped => Navigation::Stay,
            SearchOutcome::NoResults => {
                self.coordinator
                    .render_notice(
                        Notice::Message(NO_RESULTS_MESSAGE.to_string()),
                        self.targets.recipes.clone(),
                    )
                    .await;
                Navigation::Stay
            }
            SearchOutcome::Found(recipes) => {
                self.coordinator
                    .render_recipe_list(recipes, self.targets.recipes.clone())
                    .await;
                Navigation::Recipes
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::favorite::store::PersistentFavoritesStore;
    use crate::domain::errors::RepositoryError;
    use crate::domain::favorite::model::FavoriteEntry;
    use crate::domain::favorite::storage::KeyValueStorage;
    use crate::domain::favorite::store::FavoritesStore;
    use crate::domain::recipe::model::{Category, Recipe};
    use crate::domain::render::model::{FavoriteIcon, View};
    use crate::domain::shared::value_objects::RecipeId;
    use async_trait::async_trait;
    use mockall::mock;
    use std::sync::Mutex as StdMutex;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    mock! {
        pub Storage {}

        #[async_trait]
        impl KeyValueStorage for Storage {
            async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
            async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ListCategories {}

        #[async_trait]
        impl ListCategoriesUseCase for ListCategories {
            async fn execute(&self, params: ListCategoriesParams) -> Option<Vec<Category>>;
        }
    }

    mock! {
        pub LoadRandom {}

        #[async_trait]
        impl LoadRandomRecipesUseCase for LoadRandom {
            async fn execute(&self, params: LoadRandomRecipesParams) -> Vec<Recipe>;
        }
    }

    mock! {
        pub FilterByCategory {}

        #[async_trait]
        impl FilterByCategoryUseCase for FilterByCategory {
            async fn execute(&self, params: FilterByCategoryParams) -> Option<Vec<Recipe>>;
        }
    }

    mock! {
        pub Search {}

        #[async_trait]
        impl SearchRecipesUseCase for Search {
            async fn execute(&self, params: SearchRecipesParams) -> SearchOutcome;
        }
    }

    mock! {
        pub GetDetail {}

        #[async_trait]
        impl GetRecipeDetailUseCase for GetDetail {
            async fn execute(&self, params: GetRecipeDetailParams) -> Option<Recipe>;
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

    #[derive(Default)]
    struct RecordingTarget {
        views: StdMutex<Vec<View>>,
    }

    impl RecordingTarget {
        fn views(&self) -> Vec<View> {
            self.views.lock().unwrap().clone()
        }

        fn last(&self) -> Option<View> {
            self.views.lock().unwrap().last().cloned()
        }
    }

    impl RenderTarget for RecordingTarget {
        fn mount(&self, view: View) {
            self.views.lock().unwrap().push(view);
        }
    }

    fn recipe(id: &str) -> Recipe {
        Recipe::summary(
            RecipeId::new(id),
            format!("Recipe {}", id),
            format!("https://img/{}.jpg", id),
        )
    }

    struct UseCases {
        list_categories: MockListCategories,
        load_random: MockLoadRandom,
        filter_by_category: MockFilterByCategory,
        search: MockSearch,
        get_detail: MockGetDetail,
    }

    impl UseCases {
        fn new() -> Self {
            Self {
                list_categories: MockListCategories::new(),
                load_random: MockLoadRandom::new(),
                filter_by_category: MockFilterByCategory::new(),
                search: MockSearch::new(),
                get_detail: MockGetDetail::new(),
            }
        }
    }

    struct Fixture {
        browser: RecipeBrowser,
        store: Arc<dyn FavoritesStore>,
        categories: Arc<RecordingTarget>,
        recipes: Arc<RecordingTarget>,
        favorites: Arc<RecordingTarget>,
        detail: Arc<RecordingTarget>,
    }

    async fn fixture(use_cases: UseCases) -> Fixture {
        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        storage.expect_set().returning(|_, _| Ok(()));
        let store: Arc<dyn FavoritesStore> =
            Arc::new(PersistentFavoritesStore::load(Arc::new(storage), mock_logger()).await);

        let categories = Arc::new(RecordingTarget::default());
        let recipes = Arc::new(RecordingTarget::default());
        let favorites = Arc::new(RecordingTarget::default());
        let detail = Arc::new(RecordingTarget::default());

        let coordinator = Arc::new(RenderCoordinator::new(
            store.clone(),
            favorites.clone(),
            detail.clone(),
            mock_logger(),
        ));

        let browser = RecipeBrowser {
            list_categories: Arc::new(use_cases.list_categories),
            load_random: Arc::new(use_cases.load_random),
            filter_by_category: Arc::new(use_cases.filter_by_category),
            search: Arc::new(use_cases.search),
            get_detail: Arc::new(use_cases.get_detail),
            coordinator,
            targets: ScreenTargets {
                categories: categories.clone(),
                recipes: recipes.clone(),
            },
            settings: BrowserSettings::default(),
            logger: mock_logger(),
        };

        Fixture {
            browser,
            store,
            categories,
            recipes,
            favorites,
            detail,
        }
    }

    #[tokio::test]
    async fn should_render_initial_screen_on_start() {
        let mut use_cases = UseCases::new();
        use_cases
            .list_categories
            .expect_execute()
            .withf(|params| params.limit == 8)
            .returning(|_| {
                Some(vec![Category {
                    name: "Beef".to_string(),
                    thumbnail_url: "beef.png".to_string(),
                    description: None,
                }])
            });
        use_cases
            .load_random
            .expect_execute()
            .withf(|params| params.count == 8)
            .returning(|_| vec![recipe("1"), recipe("2")]);
        let f = fixture(use_cases).await;

        f.browser.start().await;

        assert!(matches!(f.categories.last(), Some(View::Categories(tiles)) if tiles.len() == 1));
        assert_eq!(f.favorites.last(), Some(View::Notice(Notice::NoFavorites)));
        let views = f.recipes.views();
        assert_eq!(views[0], View::Notice(Notice::Loading));
        assert!(matches!(&views[1], View::Cards(cards) if cards.len() == 2));
    }

    #[tokio::test]
    async fn should_leave_categories_untouched_when_fetch_fails() {
        let mut use_cases = UseCases::new();
        use_cases
            .list_categories
            .expect_execute()
            .returning(|_| None);
        use_cases.load_random.expect_execute().returning(|_| vec![]);
        let f = fixture(use_cases).await;

        f.browser.start().await;

        assert!(f.categories.views().is_empty());
        assert_eq!(f.recipes.last(), Some(View::Notice(Notice::NoRecipes)));
    }

    #[tokio::test]
    async fn should_navigate_to_recipes_when_category_shown() {
        let mut use_cases = UseCases::new();
        use_cases
            .filter_by_category
            .expect_execute()
            .withf(|params| params.category == "Seafood" && params.limit == 12)
            .returning(|_| Some(vec![recipe("3")]));
        let f = fixture(use_cases).await;

        let navigation = f
            .browser
            .dispatch(UiAction::ShowCategory {
                name: "Seafood".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(navigation, Navigation::Recipes);
        assert!(matches!(f.recipes.last(), Some(View::Cards(cards)) if cards.len() == 1));
    }

    #[tokio::test]
    async fn should_keep_recipes_when_category_fetch_fails() {
        let mut use_cases = UseCases::new();
        use_cases
            .filter_by_category
            .expect_execute()
            .returning(|_| None);
        let f = fixture(use_cases).await;

        let navigation = f
            .browser
            .dispatch(UiAction::ShowCategory {
                name: "Nope".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(navigation, Navigation::Stay);
        assert!(f.recipes.views().is_empty());
    }

    #[tokio::test]
    async fn should_show_no_results_message_on_search_miss() {
        let mut use_cases = UseCases::new();
        use_cases
            .search
            .expect_execute()
            .returning(|_| SearchOutcome::NoResults);
        let f = fixture(use_cases).await;

        let navigation = f
            .browser
            .dispatch(UiAction::Search {
                query: "zzz".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(navigation, Navigation::Stay);
        assert_eq!(
            f.recipes.last(),
            Some(View::Notice(Notice::Message("No recipes found".to_string())))
        );
    }

    #[tokio::test]
    async fn should_do_nothing_on_skipped_search() {
        let mut use_cases = UseCases::new();
        use_cases
            .search
            .expect_execute()
            .returning(|_| SearchOutcome::Skipped);
        let f = fixture(use_cases).await;

        let navigation = f
            .browser
            .dispatch(UiAction::Search {
                query: " ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(navigation, Navigation::Stay);
        assert!(f.recipes.views().is_empty());
    }

    #[tokio::test]
    async fn should_redraw_search_results_after_toggle() {
        let mut use_cases = UseCases::new();
        use_cases
            .search
            .expect_execute()
            .returning(|_| SearchOutcome::Found(vec![recipe("1"), recipe("2")]));
        let f = fixture(use_cases).await;
        f.browser
            .dispatch(UiAction::Search {
                query: "chicken".to_string(),
            })
            .await
            .unwrap();

        f.browser
            .dispatch(UiAction::ToggleFavorite(FavoriteEntry::from(&recipe("2"))))
            .await
            .unwrap();

        assert!(f.store.contains(&RecipeId::new("2")).await);
        let Some(View::Cards(cards)) = f.recipes.last() else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].icon, FavoriteIcon::Outline);
        assert_eq!(cards[1].icon, FavoriteIcon::Filled);
        assert!(matches!(f.favorites.last(), Some(View::Cards(cards)) if cards.len() == 1));
    }

    #[tokio::test]
    async fn should_open_detail_and_close_on_dismiss() {
        let mut use_cases = UseCases::new();
        use_cases
            .get_detail
            .expect_execute()
            .withf(|params| params.id.as_str() == "52772")
            .returning(|params| Some(recipe(params.id.as_str())));
        let f = fixture(use_cases).await;

        f.browser
            .dispatch(UiAction::ViewDetail {
                id: RecipeId::new("52772"),
            })
            .await
            .unwrap();
        assert!(matches!(f.detail.last(), Some(View::Detail(d)) if d.id.as_str() == "52772"));

        f.browser.dispatch(UiAction::DismissDetail).await.unwrap();
        assert_eq!(f.detail.last(), Some(View::Empty));
    }

    #[tokio::test]
    async fn should_stay_closed_when_detail_lookup_fails() {
        let mut use_cases = UseCases::new();
        use_cases.get_detail.expect_execute().returning(|_| None);
        let f = fixture(use_cases).await;

        f.browser
            .dispatch(UiAction::ViewDetail {
                id: RecipeId::new("0"),
            })
            .await
            .unwrap();

        assert!(f.detail.views().is_empty());
        assert!(!f.browser.coordinator.detail_state().await.is_open());
    }

    #[test]
    fn should_map_navigation_to_anchor() {
        assert_eq!(Navigation::Recipes.anchor(), Some("recipes"));
        assert_eq!(Navigation::Stay.anchor(), None);
    }
}
