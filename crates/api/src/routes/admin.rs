use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Staff routes mounted at `/admin`.
///
/// ```text
/// POST /recipes/{id}/publish     -> publish
/// POST /recipes/{id}/unpublish   -> unpublish
/// POST /categories               -> create_category
/// DELETE /categories/{id}        -> delete_category
/// POST /tags                     -> create_tag
/// DELETE /tags/{id}              -> delete_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recipes/{id}/publish", post(admin::publish))
        .route("/recipes/{id}/unpublish", post(admin::unpublish))
        .route("/categories", post(admin::create_category))
        .route("/categories/{id}", delete(admin::delete_category))
        .route("/tags", post(admin::create_tag))
        .route("/tags/{id}", delete(admin::delete_tag))
}
