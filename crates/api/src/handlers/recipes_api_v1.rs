//! Read-only legacy JSON endpoints under `/recipes/api/v1`.
//!
//! These mirror the HTML home and detail pages: published recipes only, no
//! owner override, and the HTML page size.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use recipes_core::pagination::parse_page_number;
use recipes_core::requester::Requester;
use recipes_core::retrieval::{get_recipe, list_recipes, RecipeFilters};
use recipes_core::types::DbId;
use recipes_db::repositories::RecipeRepo;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::query::PageParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// GET /recipes/api/v1/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let collection = RecipeRepo::list_published(&state.pool).await?;
    let page = list_recipes(
        collection,
        &RecipeFilters::default(),
        state.config.per_page,
        parse_page_number(params.page.as_deref()),
    );
    Ok(Json(PaginatedResponse::from(page)))
}

/// GET /recipes/api/v1/{id}/
pub async fn detail(
    State(state): State<AppState>,
    ApiPath(recipe_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = RecipeRepo::find_by_id(&state.pool, recipe_id).await?;
    let recipe = get_recipe(found, recipe_id, Requester::Anonymous)?;
    Ok(Json(DataResponse { data: recipe }))
}
