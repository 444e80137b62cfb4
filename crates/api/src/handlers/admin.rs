//! Staff-only controls under `/admin`: recipe publication and the
//! category and tag reference data.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recipes_core::error::CoreError;
use recipes_core::types::DbId;
use recipes_db::models::category::CreateCategory;
use recipes_db::models::tag::CreateTag;
use recipes_db::repositories::{CategoryRepo, RecipeRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /admin/recipes/{id}/publish
pub async fn publish(
    staff: RequireStaff,
    State(state): State<AppState>,
    ApiPath(recipe_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    set_published(staff, state, recipe_id, true).await
}

/// POST /admin/recipes/{id}/unpublish
pub async fn unpublish(
    staff: RequireStaff,
    State(state): State<AppState>,
    ApiPath(recipe_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    set_published(staff, state, recipe_id, false).await
}

async fn set_published(
    RequireStaff(staff): RequireStaff,
    state: AppState,
    recipe_id: DbId,
    is_published: bool,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: recipe_id,
        })
    };

    if !RecipeRepo::set_published(&state.pool, recipe_id, is_published).await? {
        return Err(not_found());
    }
    let recipe = RecipeRepo::find_by_id(&state.pool, recipe_id)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(
        recipe_id,
        is_published,
        user_id = staff.user_id,
        "Recipe publication changed",
    );

    Ok(Json(DataResponse { data: recipe }))
}

// ---------------------------------------------------------------------------
// Categories and tags
// ---------------------------------------------------------------------------

fn require_name(name: &str, entity: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!("{entity} name must not be empty")).into());
    }
    Ok(())
}

/// POST /admin/categories
///
/// Duplicate names are 409.
pub async fn create_category(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    require_name(&input.name, "Category")?;
    let category = CategoryRepo::create(
        &state.pool,
        &CreateCategory {
            name: input.name.trim().to_string(),
        },
    )
    .await?;

    tracing::info!(category_id = category.id, user_id = staff.user_id, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// DELETE /admin/categories/{id}
///
/// 409 while any recipe is still in the category; recipes are never removed
/// along with it.
pub async fn delete_category(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CategoryRepo::delete(&state.pool, category_id).await? {
        return Err(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }
        .into());
    }

    tracing::info!(category_id, user_id = staff.user_id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /admin/tags
///
/// Returns the existing tag when one with the same name already exists.
pub async fn create_tag(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTag>,
) -> AppResult<impl IntoResponse> {
    require_name(&input.name, "Tag")?;
    let tag = TagRepo::create_or_get(&state.pool, &input).await?;

    tracing::info!(tag_id = tag.id, slug = %tag.slug, user_id = staff.user_id, "Tag saved");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// DELETE /admin/tags/{id}
///
/// Untags every recipe that carried the tag.
pub async fn delete_tag(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    ApiPath(tag_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TagRepo::delete(&state.pool, tag_id).await? {
        return Err(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }
        .into());
    }

    tracing::info!(tag_id, user_id = staff.user_id, "Tag deleted");

    Ok(StatusCode::NO_CONTENT)
}
