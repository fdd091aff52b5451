use std::sync::Arc;

use poem::web::{Data, Form, Html, Query, Redirect};
use poem::{Route, get, handler, post};
use serde::Deserialize;

use business::application::browser::Navigation;
use business::domain::favorite::model::FavoriteEntry;
use business::domain::render::model::UiAction;
use business::domain::shared::value_objects::RecipeId;

use crate::api::error::IntoErrorResponse;

use super::session::Session;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub s: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub c: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub i: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteForm {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

pub fn redirect_to(navigation: Navigation) -> Redirect {
    match navigation.anchor() {
        Some(anchor) => Redirect::see_other(format!("/#{}", anchor)),
        None => Redirect::see_other("/"),
    }
}

async fn dispatch(session: &Session, action: UiAction) -> poem::Result<Redirect> {
    let navigation = session.browser.dispatch(action).await.map_err(|err| {
        let (status, json) = err.into_error_response();
        poem::Error::from_string(json.0.message, status)
    })?;
    Ok(redirect_to(navigation))
}

#[handler]
async fn index(Data(session): Data<&Arc<Session>>) -> Html<String> {
    Html(session.screen.render_page())
}

#[handler]
async fn load_random(Data(session): Data<&Arc<Session>>) -> poem::Result<Redirect> {
    dispatch(session, UiAction::LoadRandom).await
}

#[handler]
async fn show_category(
    Data(session): Data<&Arc<Session>>,
    Query(query): Query<CategoryQuery>,
) -> poem::Result<Redirect> {
    dispatch(session, UiAction::ShowCategory { name: query.c }).await
}

#[handler]
async fn search(
    Data(session): Data<&Arc<Session>>,
    Query(query): Query<SearchQuery>,
) -> poem::Result<Redirect> {
    dispatch(session, UiAction::Search { query: query.s }).await
}

#[handler]
async fn view_detail(
    Data(session): Data<&Arc<Session>>,
    Query(query): Query<DetailQuery>,
) -> poem::Result<Redirect> {
    dispatch(
        session,
        UiAction::ViewDetail {
            id: RecipeId::new(query.i),
        },
    )
    .await
}

#[handler]
async fn close_detail(Data(session): Data<&Arc<Session>>) -> poem::Result<Redirect> {
    dispatch(session, UiAction::CloseDetail).await
}

#[handler]
async fn dismiss_detail(Data(session): Data<&Arc<Session>>) -> poem::Result<Redirect> {
    dispatch(session, UiAction::DismissDetail).await
}

#[handler]
async fn toggle_favorite(
    Data(session): Data<&Arc<Session>>,
    Form(form): Form<ToggleFavoriteForm>,
) -> poem::Result<Redirect> {
    let entry = FavoriteEntry::new(RecipeId::new(form.id), form.name, form.thumbnail_url);
    dispatch(session, UiAction::ToggleFavorite(entry)).await
}

/// HTML pages and the form/link targets of every `UiAction`.
pub fn routes() -> Route {
    Route::new()
        .at("/", get(index))
        .at("/actions/random", post(load_random))
        .at("/categories", get(show_category))
        .at("/search", get(search))
        .at("/recipes", get(view_detail))
        .at("/detail/close", post(close_detail))
        .at("/detail/dismiss", post(dismiss_detail))
        .at("/favorites/toggle", post(toggle_favorite))
}
