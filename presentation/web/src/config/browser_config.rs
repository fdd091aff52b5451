use business::application::browser::BrowserSettings;
use std::env;

/// Load list sizes from the environment
///
/// Environment variables:
/// - RANDOM_RECIPE_COUNT (default: 8)
/// - CATEGORY_LIMIT (default: 8)
/// - CATEGORY_RECIPE_LIMIT (default: 12)
///
/// Unparseable values fall back to the default.
pub fn from_env() -> BrowserSettings {
    let defaults = BrowserSettings::default();

    BrowserSettings {
        random_count: parse_or(env::var("RANDOM_RECIPE_COUNT").ok(), defaults.random_count),
        category_limit: parse_or(env::var("CATEGORY_LIMIT").ok(), defaults.category_limit),
        category_recipe_limit: parse_or(
            env::var("CATEGORY_RECIPE_LIMIT").ok(),
            defaults.category_recipe_limit,
        ),
    }
}

fn parse_or(raw: Option<String>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
