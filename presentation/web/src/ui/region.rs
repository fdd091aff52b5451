use std::sync::RwLock;

use business::domain::render::model::View;
use business::domain::render::target::RenderTarget;

use super::templates::render_view;

/// A page region holding the HTML of the last view mounted into it.
#[derive(Default)]
pub struct HtmlRegion {
    html: RwLock<String>,
}

impl HtmlRegion {
    pub fn html(&self) -> String {
        self.html
            .read()
            .map(|html| html.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl RenderTarget for HtmlRegion {
    fn mount(&self, view: View) {
        let rendered = render_view(&view);
        match self.html.write() {
            Ok(mut html) => *html = rendered,
            Err(poisoned) => *poisoned.into_inner() = rendered,
        }
    }
}
