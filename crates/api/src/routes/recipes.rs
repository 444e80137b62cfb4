//! Route definitions for the recipe JSON APIs and token endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{recipes_api, recipes_api_v1, tokens};
use crate::state::AppState;

/// Mounted at the root; every path starts with `/recipes/api`.
///
/// ```text
/// GET    /recipes/api/v1/              -> recipes_api_v1::list
/// GET    /recipes/api/v1/{id}/         -> recipes_api_v1::detail
///
/// GET    /recipes/api/v2/              -> recipes_api::list
/// POST   /recipes/api/v2/              -> recipes_api::create
/// GET    /recipes/api/v2/{id}/         -> recipes_api::retrieve
/// PATCH  /recipes/api/v2/{id}/         -> recipes_api::partial_update
/// DELETE /recipes/api/v2/{id}/         -> recipes_api::destroy
/// GET    /recipes/api/v2/tag/{id}/     -> recipes_api::tag_detail
///
/// POST   /recipes/api/token/           -> tokens::obtain
/// POST   /recipes/api/token/refresh/   -> tokens::refresh
/// POST   /recipes/api/token/verify/    -> tokens::verify
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recipes/api/v1/", get(recipes_api_v1::list))
        .route("/recipes/api/v1/{id}/", get(recipes_api_v1::detail))
        .route(
            "/recipes/api/v2/",
            get(recipes_api::list).post(recipes_api::create),
        )
        .route(
            "/recipes/api/v2/{id}/",
            get(recipes_api::retrieve)
                .patch(recipes_api::partial_update)
                .delete(recipes_api::destroy),
        )
        .route("/recipes/api/v2/tag/{id}/", get(recipes_api::tag_detail))
        .route("/recipes/api/token/", post(tokens::obtain))
        .route("/recipes/api/token/refresh/", post(tokens::refresh))
        .route("/recipes/api/token/verify/", post(tokens::verify))
}
