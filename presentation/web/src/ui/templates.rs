use business::domain::render::model::{
    CategoryTile, Notice, RecipeCard, RecipeDetailView, UiAction, View,
};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use url::form_urlencoded;

/// How a `UiAction` travels back to the server.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Link(String),
    Form {
        action: &'static str,
        fields: Vec<(&'static str, String)>,
    },
}

pub fn bind(action: &UiAction) -> Binding {
    match action {
        UiAction::LoadRandom => Binding::Form {
            action: "/actions/random",
            fields: Vec::new(),
        },
        UiAction::ShowCategory { name } => Binding::Link(with_query("/categories", "c", name)),
        UiAction::Search { query } => Binding::Link(with_query("/search", "s", query)),
        UiAction::ViewDetail { id } => Binding::Link(with_query("/recipes", "i", id.as_str())),
        UiAction::CloseDetail => Binding::Form {
            action: "/detail/close",
            fields: Vec::new(),
        },
        UiAction::DismissDetail => Binding::Form {
            action: "/detail/dismiss",
            fields: Vec::new(),
        },
        UiAction::ToggleFavorite(entry) => Binding::Form {
            action: "/favorites/toggle",
            fields: vec![
                ("id", entry.id.as_str().to_string()),
                ("name", entry.name.clone()),
                ("thumbnail_url", entry.thumbnail_url.clone()),
            ],
        },
    }
}

fn with_query(path: &str, key: &str, value: &str) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{}?{}", path, encoded)
}

/// `label` is inserted as-is and must already be safe HTML.
fn control(action: &UiAction, class: &str, label: &str) -> String {
    match bind(action) {
        Binding::Link(href) => format!(
            r#"<a class="{}" href="{}">{}</a>"#,
            class,
            attr(&href),
            label
        ),
        Binding::Form { action, fields } => {
            let inputs: String = fields
                .iter()
                .map(|(name, value)| {
                    format!(
                        r#"<input type="hidden" name="{}" value="{}">"#,
                        name,
                        attr(value)
                    )
                })
                .collect();
            format!(
                r#"<form class="inline-form" method="post" action="{}">{}<button class="{}" type="submit">{}</button></form>"#,
                action, inputs, class, label
            )
        }
    }
}

pub fn render_view(view: &View) -> String {
    match view {
        View::Empty => String::new(),
        View::Notice(notice) => render_notice(notice),
        View::Cards(cards) => cards.iter().map(render_card).collect(),
        View::Categories(tiles) => tiles.iter().map(render_tile).collect(),
        View::Detail(detail) => render_detail(detail),
    }
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice {
        Notice::NoFavorites => "empty-message",
        Notice::Loading | Notice::NoRecipes | Notice::Message(_) => "notice",
    };
    format!(r#"<p class="{}">{}</p>"#, class, text(notice.text()))
}

fn render_card(card: &RecipeCard) -> String {
    let subtitle = card
        .subtitle
        .as_deref()
        .map(|s| format!("<p>{}</p>", text(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="recipe-card">
    <img src="{src}" alt="{alt}">
    <div class="recipe-info">
        <h3>{name}</h3>
        {subtitle}
        <div class="recipe-actions">{view}{toggle}</div>
    </div>
</div>
"#,
        src = attr(&card.thumbnail_url),
        alt = attr(&card.name),
        name = text(&card.name),
        subtitle = subtitle,
        view = control(&card.view, "btn btn-primary", "View Recipe"),
        toggle = control(&card.toggle, "btn btn-secondary", card.icon.symbol()),
    )
}

fn render_tile(tile: &CategoryTile) -> String {
    let title = tile
        .description
        .as_deref()
        .map(|description| format!(r#" title="{}""#, attr(description)))
        .unwrap_or_default();
    let label = format!(
        r#"<img src="{}" alt="{}"{}><h3>{}</h3>"#,
        attr(&tile.thumbnail_url),
        attr(&tile.name),
        title,
        text(&tile.name)
    );
    control(&tile.action, "category-card", &label)
}

fn render_detail(detail: &RecipeDetailView) -> String {
    let ingredients: String = detail
        .ingredients
        .iter()
        .map(|line| format!("<li>{}</li>", text(line)))
        .collect();

    format!(
        r#"<div class="modal active" id="modal">
    {dismiss}
    <div class="modal-content">
        {close}
        <div class="modal-header"><img src="{src}" alt="{alt}"></div>
        <div class="modal-body">
            <h2>{name}</h2>
            <div class="modal-tags"><span class="tag">{category}</span><span class="tag">{area}</span></div>
            <div class="ingredients"><h3>Ingredients</h3><ul>{ingredients}</ul></div>
            <div class="instructions"><h3>Instructions</h3><p>{instructions}</p></div>
        </div>
    </div>
</div>
"#,
        dismiss = control(&UiAction::DismissDetail, "modal-backdrop", ""),
        close = control(&UiAction::CloseDetail, "modal-close", "&times;"),
        src = attr(&detail.thumbnail_url),
        alt = attr(&detail.name),
        name = text(&detail.name),
        category = text(&detail.category),
        area = text(&detail.area),
        ingredients = ingredients,
        instructions = text(&detail.instructions),
    )
}

/// Rendered content of every screen region.
pub struct PageRegions {
    pub categories: String,
    pub recipes: String,
    pub favorites: String,
    pub detail: String,
}

pub fn render_page(regions: &PageRegions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Recipes</title>
<style>{style}</style>
</head>
<body>
<nav class="navbar">
    <a class="logo" href="/">Recipes</a>
    <ul class="nav-menu">
        <li><a href="/#categories">Categories</a></li>
        <li><a href="/#recipes">Recipes</a></li>
        <li><a href="/#favorites">Favorites</a></li>
    </ul>
</nav>
<header class="hero">
    <form class="search-box" method="get" action="/search">
        <input type="text" name="s" placeholder="Search recipes...">
        <button class="btn btn-primary" type="submit">Search</button>
    </form>
</header>
<section id="categories"><h2>Categories</h2><div class="grid">{categories}</div></section>
<section id="recipes"><h2>Recipes</h2>{random}<div class="grid">{recipes}</div></section>
<section id="favorites"><h2>My Favorites</h2><div class="grid">{favorites}</div></section>
{detail}
</body>
</html>
"#,
        style = STYLE,
        categories = regions.categories,
        random = control(&UiAction::LoadRandom, "btn btn-secondary", "More random recipes"),
        recipes = regions.recipes,
        favorites = regions.favorites,
        detail = regions.detail,
    )
}

const STYLE: &str = "body{font-family:sans-serif;margin:0}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1rem;padding:1rem}\
.recipe-card img,.category-card img{width:100%}\
.notice,.empty-message{grid-column:1/-1;text-align:center}\
.inline-form{display:inline}\
.modal{position:fixed;inset:0;display:flex;align-items:center;justify-content:center}\
.modal-backdrop{position:absolute;inset:0;background:rgba(0,0,0,.6);border:0;width:100%;height:100%}\
.modal-content{position:relative;background:#fff;max-width:720px;max-height:90vh;overflow:auto}";
