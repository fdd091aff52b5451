use crate::domain::favorite::model::FavoriteEntry;
use crate::domain::recipe::model::{Category, Recipe};
use crate::domain::shared::value_objects::RecipeId;

/// User action a rendered control triggers.
///
/// Controls carry one of these values instead of naming a handler; the
/// presentation layer decides how an action travels back to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    LoadRandom,
    ShowCategory { name: String },
    Search { query: String },
    ViewDetail { id: RecipeId },
    CloseDetail,
    DismissDetail,
    ToggleFavorite(FavoriteEntry),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteIcon {
    Filled,
    Outline,
}

impl FavoriteIcon {
    pub fn for_status(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteIcon::Filled
        } else {
            FavoriteIcon::Outline
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FavoriteIcon::Filled => "❤️",
            FavoriteIcon::Outline => "🤍",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail_url: String,
    /// "<category> • <area>"; favorites cards have none.
    pub subtitle: Option<String>,
    pub icon: FavoriteIcon,
    pub view: UiAction,
    pub toggle: UiAction,
}

impl RecipeCard {
    pub fn for_recipe(recipe: &Recipe, is_favorite: bool) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            thumbnail_url: recipe.thumbnail_url.clone(),
            subtitle: Some(format!(
                "{} • {}",
                recipe.category_label(),
                recipe.area_label()
            )),
            icon: FavoriteIcon::for_status(is_favorite),
            view: UiAction::ViewDetail {
                id: recipe.id.clone(),
            },
            toggle: UiAction::ToggleFavorite(FavoriteEntry::from(recipe)),
        }
    }

    pub fn for_favorite(entry: &FavoriteEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            thumbnail_url: entry.thumbnail_url.clone(),
            subtitle: None,
            icon: FavoriteIcon::Filled,
            view: UiAction::ViewDetail {
                id: entry.id.clone(),
            },
            toggle: UiAction::ToggleFavorite(entry.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTile {
    pub name: String,
    pub thumbnail_url: String,
    /// Upstream blurb, `None` when missing or blank.
    pub description: Option<String>,
    pub action: UiAction,
}

impl From<&Category> for CategoryTile {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            thumbnail_url: category.thumbnail_url.clone(),
            description: category
                .description
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
            action: UiAction::ShowCategory {
                name: category.name.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetailView {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail_url: String,
    pub category: String,
    pub area: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl From<&Recipe> for RecipeDetailView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            thumbnail_url: recipe.thumbnail_url.clone(),
            category: recipe.category_label().to_string(),
            area: recipe.area_label().to_string(),
            ingredients: recipe.ingredient_lines(),
            instructions: recipe.instructions.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Loading,
    /// Empty recipe list.
    NoRecipes,
    /// Empty favorites list.
    NoFavorites,
    /// Caller-supplied text, e.g. a search without results.
    Message(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Loading => "Loading...",
            Notice::NoRecipes => "No recipes to show",
            Notice::NoFavorites => "No favorites yet",
            Notice::Message(text) => text,
        }
    }
}

/// Full content of one render target. Every render replaces the previous one.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Empty,
    Notice(Notice),
    Cards(Vec<RecipeCard>),
    Categories(Vec<CategoryTile>),
    Detail(RecipeDetailView),
}

impl View {
    pub fn recipe_list(recipes: &[Recipe], is_favorite: impl Fn(&RecipeId) -> bool) -> Self {
        if recipes.is_empty() {
            return View::Notice(Notice::NoRecipes);
        }
        View::Cards(
            recipes
                .iter()
                .map(|recipe| RecipeCard::for_recipe(recipe, is_favorite(&recipe.id)))
                .collect(),
        )
    }

    pub fn favorites(entries: &[FavoriteEntry]) -> Self {
        if entries.is_empty() {
            return View::Notice(Notice::NoFavorites);
        }
        View::Cards(entries.iter().map(RecipeCard::for_favorite).collect())
    }

    pub fn categories(categories: &[Category]) -> Self {
        View::Categories(categories.iter().map(CategoryTile::from).collect())
    }
}
