pub mod admin;
pub mod authors;
pub mod health;
pub mod pages;
pub mod recipes;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /                                     home page
/// /recipes/search/?q=                   search page
/// /recipes/tags/{slug}                  tag page
/// /recipes/category/{id}/               category page
/// /recipes/{id}/                        recipe detail page
/// /authors/profile/{id}/                author profile page
///
/// /recipes/api/v1/                      legacy list (read-only)
/// /recipes/api/v1/{id}/                 legacy detail (read-only)
///
/// /recipes/api/v2/                      list, create
/// /recipes/api/v2/{id}/                 retrieve, partial update, delete
/// /recipes/api/v2/tag/{id}/             tag detail
///
/// /recipes/api/token/                   obtain access + refresh tokens
/// /recipes/api/token/refresh/           refresh access token
/// /recipes/api/token/verify/            verify a token
///
/// /authors/api/                         register
/// /authors/api/me/                      current author, update bio
/// /authors/api/me/recipes/              current author's recipes (incl. drafts)
///
/// /admin/recipes/{id}/publish           publish (staff only)
/// /admin/recipes/{id}/unpublish         unpublish (staff only)
/// /admin/categories[/{id}]              create / delete category (staff only)
/// /admin/tags[/{id}]                    create / delete tag (staff only)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(recipes::router())
        .merge(authors::router())
        .nest("/admin", admin::router())
}
