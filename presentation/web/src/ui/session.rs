use std::sync::Arc;

use business::application::browser::RecipeBrowser;

use super::region::HtmlRegion;
use super::templates::{PageRegions, render_page};

/// The screen regions of the single application session.
#[derive(Default)]
pub struct Screen {
    pub categories: Arc<HtmlRegion>,
    pub recipes: Arc<HtmlRegion>,
    pub favorites: Arc<HtmlRegion>,
    pub detail: Arc<HtmlRegion>,
}

impl Screen {
    pub fn render_page(&self) -> String {
        render_page(&PageRegions {
            categories: self.categories.html(),
            recipes: self.recipes.html(),
            favorites: self.favorites.html(),
            detail: self.detail.html(),
        })
    }
}

/// Process-wide session state shared by all handlers.
pub struct Session {
    pub browser: RecipeBrowser,
    pub screen: Screen,
}
