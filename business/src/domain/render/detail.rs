use super::model::{RecipeDetailView, View};

/// Detail view: `Closed` until a lookup succeeds, back to `Closed` on
/// close or dismiss. There is no loading state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Closed,
    Open(RecipeDetailView),
}

impl DetailState {
    pub fn open(&mut self, detail: RecipeDetailView) {
        *self = DetailState::Open(detail);
    }

    /// Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = DetailState::Closed;
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailState::Open(_))
    }

    pub fn view(&self) -> View {
        match self {
            DetailState::Closed => View::Empty,
            DetailState::Open(detail) => View::Detail(detail.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::model::Recipe;
    use crate::domain::shared::value_objects::RecipeId;

    fn detail() -> RecipeDetailView {
        let recipe = Recipe::summary(
            RecipeId::new("52772"),
            "Teriyaki Chicken Casserole".to_string(),
            "https://img/52772.jpg".to_string(),
        );
        RecipeDetailView::from(&recipe)
    }

    #[test]
    fn should_start_closed() {
        let state = DetailState::default();

        assert!(!state.is_open());
        assert_eq!(state.view(), View::Empty);
    }

    #[test]
    fn should_open_with_detail() {
        let mut state = DetailState::default();

        state.open(detail());

        assert!(state.is_open());
        assert_eq!(state.view(), View::Detail(detail()));
    }

    #[test]
    fn should_close_when_open() {
        let mut state = DetailState::Open(detail());

        let changed = state.close();

        assert!(changed);
        assert_eq!(state, DetailState::Closed);
    }

    #[test]
    fn should_ignore_close_when_already_closed() {
        let mut state = DetailState::Closed;

        assert!(!state.close());
    }
}
