use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::ToggleOutcome;
use crate::domain::favorite::store::{FavoritesStore, ToggleFavoriteParams};
use crate::domain::logger::Logger;
use crate::domain::recipe::model::{Category, Recipe};
use crate::domain::render::detail::DetailState;
use crate::domain::render::model::{Notice, RecipeDetailView, View};
use crate::domain::render::target::RenderTarget;

/// The recipe list currently on screen and where it is shown.
struct DisplayedList {
    recipes: Vec<Recipe>,
    target: Arc<dyn RenderTarget>,
}

/// Turns recipe data plus favorite status into views.
///
/// Holds no recipe or favorite data of its own beyond the last list it
/// was asked to display, which it needs to redraw after a toggle. Every
/// render regenerates the whole target.
pub struct RenderCoordinator {
    store: Arc<dyn FavoritesStore>,
    favorites_target: Arc<dyn RenderTarget>,
    detail_target: Arc<dyn RenderTarget>,
    displayed: Mutex<Option<DisplayedList>>,
    detail: Mutex<DetailState>,
    logger: Arc<dyn Logger>,
}

impl RenderCoordinator {
    pub fn new(
        store: Arc<dyn FavoritesStore>,
        favorites_target: Arc<dyn RenderTarget>,
        detail_target: Arc<dyn RenderTarget>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            store,
            favorites_target,
            detail_target,
            displayed: Mutex::new(None),
            detail: Mutex::new(DetailState::Closed),
            logger,
        }
    }

    pub async fn render_recipe_list(&self, recipes: Vec<Recipe>, target: Arc<dyn RenderTarget>) {
        let mut displayed = self.displayed.lock().await;
        let favorites = self.favorite_ids(&recipes).await;

        target.mount(View::recipe_list(&recipes, |id| {
            favorites.contains(id.as_str())
        }));
        self.logger
            .debug(&format!("Rendered {} recipe cards", recipes.len()));

        *displayed = Some(DisplayedList { recipes, target });
    }

    pub async fn render_favorites_list(&self, target: &dyn RenderTarget) {
        let snapshot = self.store.snapshot().await;
        target.mount(View::favorites(&snapshot));
    }

    pub fn render_categories(&self, categories: &[Category], target: &dyn RenderTarget) {
        target.mount(View::categories(categories));
    }

    /// Shows a notice in place of a list. If the target was showing the
    /// current recipe list, that list is no longer redrawn on toggles.
    pub async fn render_notice(&self, notice: Notice, target: Arc<dyn RenderTarget>) {
        let mut displayed = self.displayed.lock().await;
        if displayed
            .as_ref()
            .is_some_and(|list| std::ptr::addr_eq(Arc::as_ptr(&list.target), Arc::as_ptr(&target)))
        {
            *displayed = None;
        }
        target.mount(View::Notice(notice));
    }

    /// Toggles a favorite and redraws every view that shows favorite status.
    ///
    /// The store has persisted the change before any redraw is issued.
    pub async fn toggle_favorite(
        &self,
        params: ToggleFavoriteParams,
    ) -> Result<ToggleOutcome, FavoriteError> {
        let outcome = self.store.toggle(params).await?;
        self.refresh().await;
        Ok(outcome)
    }

    /// Redraws the favorites view and the recipe list currently displayed.
    pub async fn refresh(&self) {
        let displayed = self.displayed.lock().await;

        self.render_favorites_list(self.favorites_target.as_ref())
            .await;

        if let Some(list) = displayed.as_ref() {
            let favorites = self.favorite_ids(&list.recipes).await;
            list.target.mount(View::recipe_list(&list.recipes, |id| {
                favorites.contains(id.as_str())
            }));
        }
    }

    pub async fn open_detail(&self, recipe: &Recipe) {
        let mut detail = self.detail.lock().await;
        detail.open(RecipeDetailView::from(recipe));
        self.detail_target.mount(detail.view());
        self.logger.debug(&format!("Opened detail for {}", recipe.id));
    }

    /// Explicit close and dismiss gestures share this transition.
    pub async fn close_detail(&self) {
        let mut detail = self.detail.lock().await;
        if detail.close() {
            self.detail_target.mount(detail.view());
        }
    }

    pub async fn detail_state(&self) -> DetailState {
        self.detail.lock().await.clone()
    }

    /// Ids among `recipes` that the store reports as favorites.
    async fn favorite_ids(&self, recipes: &[Recipe]) -> HashSet<String> {
        let mut ids = HashSet::new();
        for recipe in recipes {
            if self.store.contains(&recipe.id).await {
                ids.insert(recipe.id.as_str().to_string());
            }
        }
        ids
    }
}
