use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// HTML page routes, mounted at the root.
///
/// ```text
/// GET /                          -> home
/// GET /recipes/search/           -> search
/// GET /recipes/tags/{slug}       -> tag
/// GET /recipes/category/{id}/    -> category
/// GET /recipes/{id}/             -> detail
/// GET /authors/profile/{id}/     -> author_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/recipes/search/", get(pages::search))
        .route("/recipes/tags/{slug}", get(pages::tag))
        .route("/recipes/category/{id}/", get(pages::category))
        .route("/recipes/{id}/", get(pages::detail))
        .route("/authors/profile/{id}/", get(pages::author_profile))
}
