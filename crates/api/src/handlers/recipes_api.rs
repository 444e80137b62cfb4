//! Handlers for the `/recipes/api/v2` resource.
//!
//! Reads are public; drafts resolve only for their author. Creating requires
//! authentication, and updating or deleting requires being the author.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recipes_core::error::CoreError;
use recipes_core::filters::parse_category_id;
use recipes_core::ownership::ensure_can_mutate;
use recipes_core::pagination::parse_page_number;
use recipes_core::retrieval::{get_recipe, list_recipes, RecipeFilters};
use recipes_core::types::DbId;
use recipes_core::validation::{validate_recipe_fields, FieldErrors, RecipeFields};
use recipes_db::models::recipe::{CreateRecipe, RecipeWithTags, UpdateRecipe};
use recipes_db::repositories::{CategoryRepo, RecipeRepo, TagRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::query::RecipeListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

/// GET /recipes/api/v2/
///
/// Published recipes, newest first. `?category_id=` is applied only when it
/// is a plain non-negative integer; `?q=` runs a text search.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RecipeListParams>,
) -> AppResult<impl IntoResponse> {
    let collection = RecipeRepo::list_published(&state.pool).await?;

    let filters = RecipeFilters {
        category_id: parse_category_id(params.category_id.as_deref()),
        tag: None,
        query: params.q,
    };
    let page = list_recipes(
        collection,
        &filters,
        state.config.api_page_size,
        parse_page_number(params.page.as_deref()),
    );

    Ok(Json(PaginatedResponse::from(page)))
}

/// POST /recipes/api/v2/
///
/// Create a draft owned by the caller. Any `author` or `is_published` in the
/// payload is ignored.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateRecipe>,
) -> AppResult<impl IntoResponse> {
    check_recipe_input(
        &state.pool,
        &input.fields(),
        Some(input.category),
        Some(&input.tags),
    )
    .await?;

    let recipe = RecipeRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        recipe_id = recipe.recipe.id,
        user_id = auth.user_id,
        "Recipe created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: recipe })))
}

/// GET /recipes/api/v2/{id}/
pub async fn retrieve(
    MaybeAuthUser(requester): MaybeAuthUser,
    State(state): State<AppState>,
    ApiPath(recipe_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = RecipeRepo::find_by_id(&state.pool, recipe_id).await?;
    let recipe = get_recipe(found, recipe_id, requester)?;

    Ok(Json(DataResponse { data: recipe }))
}

/// PATCH /recipes/api/v2/{id}/
///
/// Partial update by the author. The merged result is validated as a whole.
pub async fn partial_update(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(recipe_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateRecipe>,
) -> AppResult<impl IntoResponse> {
    let existing = load_for_mutation(&state.pool, recipe_id, &auth).await?;

    check_recipe_input(
        &state.pool,
        &input.fields_over(&existing.recipe),
        input.category,
        input.tags.as_deref(),
    )
    .await?;

    let recipe = RecipeRepo::update(&state.pool, recipe_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: recipe_id,
        }))?;

    tracing::info!(recipe_id, user_id = auth.user_id, "Recipe updated");

    Ok(Json(DataResponse { data: recipe }))
}

/// DELETE /recipes/api/v2/{id}/
pub async fn destroy(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(recipe_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    load_for_mutation(&state.pool, recipe_id, &auth).await?;

    if !RecipeRepo::delete(&state.pool, recipe_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: recipe_id,
        }));
    }

    tracing::info!(recipe_id, user_id = auth.user_id, "Recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// GET /recipes/api/v2/tag/{id}/
pub async fn tag_detail(
    State(state): State<AppState>,
    ApiPath(tag_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = TagRepo::find_by_id(&state.pool, tag_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }))?;

    Ok(Json(DataResponse { data: tag }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the recipe as the caller sees it, then require ownership.
///
/// A recipe the caller cannot see is 404 before ownership is considered.
async fn load_for_mutation(
    pool: &PgPool,
    recipe_id: DbId,
    auth: &AuthUser,
) -> AppResult<RecipeWithTags> {
    let found = RecipeRepo::find_by_id(pool, recipe_id).await?;
    let recipe = get_recipe(found, recipe_id, auth.requester())?;
    ensure_can_mutate(auth.requester(), &recipe)?;
    Ok(recipe)
}

/// Validate recipe fields and referenced ids, reporting every problem at once.
async fn check_recipe_input(
    pool: &PgPool,
    fields: &RecipeFields,
    category_id: Option<DbId>,
    tag_ids: Option<&[DbId]>,
) -> AppResult<()> {
    let mut errors = match validate_recipe_fields(fields) {
        Ok(()) => FieldErrors::new(),
        Err(CoreError::InvalidFields(errors)) => errors,
        Err(other) => return Err(other.into()),
    };

    if let Some(id) = category_id {
        if CategoryRepo::find_by_id(pool, id).await?.is_none() {
            errors
                .entry("category".into())
                .or_default()
                .push(format!("Category {id} does not exist"));
        }
    }

    if let Some(ids) = tag_ids {
        for id in TagRepo::missing_ids(pool, ids).await? {
            errors
                .entry("tags".into())
                .or_default()
                .push(format!("Tag {id} does not exist"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidFields(errors).into())
    }
}
