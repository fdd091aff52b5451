use std::collections::HashMap;

use serde::Deserialize;

use business::domain::recipe::model::{Category, Ingredient, MAX_INGREDIENTS, Recipe};
use business::domain::shared::value_objects::RecipeId;

#[derive(Debug, Deserialize)]
pub struct MealsResponse {
    pub meals: Option<Vec<MealDto>>,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Option<Vec<CategoryDto>>,
}

/// A meal as returned by every `meals` endpoint. Filter results only
/// carry id, name and thumbnail.
#[derive(Debug, Deserialize)]
pub struct MealDto {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    /// `strIngredientN` / `strMeasureN` and the remaining upstream fields.
    #[serde(flatten)]
    pub rest: HashMap<String, serde_json::Value>,
}

impl MealDto {
    fn field(&self, key: &str) -> Option<&str> {
        self.rest.get(key).and_then(|value| value.as_str())
    }

    pub fn into_domain(self) -> Recipe {
        let ingredients = (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                Ingredient::from_pair(
                    self.field(&format!("strIngredient{}", i)),
                    self.field(&format!("strMeasure{}", i)),
                )
            })
            .collect();

        Recipe {
            id: RecipeId::new(self.id),
            name: self.name,
            thumbnail_url: self.thumbnail.unwrap_or_default(),
            category: self.category,
            area: self.area,
            instructions: self.instructions,
            ingredients,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryDto {
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

impl CategoryDto {
    pub fn into_domain(self) -> Category {
        Category {
            name: self.name,
            thumbnail_url: self.thumbnail.unwrap_or_default(),
            description: self.description,
        }
    }
}
