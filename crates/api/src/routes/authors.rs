use axum::routing::{get, post};
use axum::Router;

use crate::handlers::authors;
use crate::state::AppState;

/// Author account routes.
///
/// ```text
/// POST  /authors/api/              -> register
/// GET   /authors/api/me/           -> me
/// PATCH /authors/api/me/           -> update_me
/// GET   /authors/api/me/recipes/   -> my_recipes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/authors/api/", post(authors::register))
        .route(
            "/authors/api/me/",
            get(authors::me).patch(authors::update_me),
        )
        .route("/authors/api/me/recipes/", get(authors::my_recipes))
}
