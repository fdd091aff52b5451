use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::recipe::model::Recipe;
use crate::domain::shared::value_objects::RecipeId;

/// Reduced projection of a recipe kept in the favorites list.
///
/// Persisted as `{"id": ..., "name": ..., "thumbnailUrl": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail_url: String,
}

impl FavoriteEntry {
    pub fn new(id: RecipeId, name: impl Into<String>, thumbnail_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }
}

impl From<&Recipe> for FavoriteEntry {
    fn from(recipe: &Recipe) -> Self {
        Self::new(
            recipe.id.clone(),
            recipe.name.clone(),
            recipe.thumbnail_url.clone(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl std::fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleOutcome::Added => write!(f, "added"),
            ToggleOutcome::Removed => write!(f, "removed"),
        }
    }
}

/// Favorites in insertion order, at most one entry per identifier.
///
/// Only the constructors below produce values, so the uniqueness holds
/// for every reachable list, including ones read back from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoriteList(Vec<FavoriteEntry>);

impl FavoriteList {
    /// Keeps the first entry for each identifier and drops later duplicates.
    pub fn from_entries(entries: impl IntoIterator<Item = FavoriteEntry>) -> Self {
        let mut seen = HashSet::new();
        let unique = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.id.clone()))
            .collect();
        Self(unique)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<FavoriteEntry> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.0.iter().any(|entry| &entry.id == id)
    }

    /// Returns the list that results from toggling `entry`.
    ///
    /// Removal matches on the identifier only; the name and thumbnail of
    /// `entry` are ignored in that case.
    pub fn toggled(&self, entry: FavoriteEntry) -> (Self, ToggleOutcome) {
        match self.0.iter().position(|existing| existing.id == entry.id) {
            Some(index) => {
                let mut entries = self.0.clone();
                entries.remove(index);
                (Self(entries), ToggleOutcome::Removed)
            }
            None => {
                let mut entries = self.0.clone();
                entries.push(entry);
                (Self(entries), ToggleOutcome::Added)
            }
        }
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<FavoriteList> for Vec<FavoriteEntry> {
    fn from(list: FavoriteList) -> Self {
        list.0
    }
}
