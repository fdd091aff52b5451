use crate::domain::shared::value_objects::RecipeId;

/// Upper bound of ingredient/measure pairs a recipe carries upstream.
pub const MAX_INGREDIENTS: usize = 20;

pub const CATEGORY_FALLBACK: &str = "Category";
pub const AREA_FALLBACK: &str = "International";

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

impl Ingredient {
    /// Builds an ingredient from a raw upstream pair.
    ///
    /// Returns `None` when the ingredient is missing or blank; the measure
    /// alone never produces an ingredient.
    pub fn from_pair(name: Option<&str>, measure: Option<&str>) -> Option<Self> {
        let name = name.map(str::trim).filter(|n| !n.is_empty())?;
        let measure = measure
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(|m| m.to_string());

        Some(Self {
            name: name.to_string(),
            measure,
        })
    }

    /// "<measure> <ingredient>", or just the ingredient when no measure is known.
    pub fn line(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{} {}", measure, self.name),
            None => self.name.clone(),
        }
    }
}

/// A dish as supplied by the upstream catalogue. Read-only for this crate.
///
/// Summary listings (category filter) only carry id, name and thumbnail;
/// the remaining fields are then absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail_url: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn summary(id: RecipeId, name: String, thumbnail_url: String) -> Self {
        Self {
            id,
            name,
            thumbnail_url,
            category: None,
            area: None,
            instructions: None,
            ingredients: Vec::new(),
        }
    }

    pub fn category_label(&self) -> &str {
        label_or(&self.category, CATEGORY_FALLBACK)
    }

    pub fn area_label(&self) -> &str {
        label_or(&self.area, AREA_FALLBACK)
    }

    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients.iter().map(Ingredient::line).collect()
    }
}

fn label_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub thumbnail_url: String,
    pub description: Option<String>,
}
