use super::model::View;

/// A region of the screen that displays one `View` at a time.
///
/// `mount` replaces the whole content of the region.
pub trait RenderTarget: Send + Sync {
    fn mount(&self, view: View);
}
