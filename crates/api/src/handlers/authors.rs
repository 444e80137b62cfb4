//! Handlers for the `/authors/api` resource: registration and the caller's
//! own account, profile and recipe dashboard.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recipes_core::error::CoreError;
use recipes_core::pagination::parse_page_number;
use recipes_core::retrieval::list_owned;
use recipes_core::types::DbId;
use recipes_core::validation::{validate_account_fields, AccountFields};
use recipes_db::models::profile::UpdateProfile;
use recipes_db::models::user::{CreateUser, UserResponse};
use recipes_db::repositories::{ProfileRepo, RecipeRepo, UserRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Request body for `POST /authors/api/`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// An account together with its profile bio.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub bio: String,
}

/// POST /authors/api/
///
/// Register a new (non-staff) author. Duplicate usernames or emails are 409.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    validate_account_fields(&AccountFields {
        username: input.username.clone(),
        email: input.email.clone(),
        password: input.password.clone(),
    })?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash,
            is_staff: false,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Author registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AuthorResponse {
                user: UserResponse::from(&user),
                bio: String::new(),
            },
        }),
    ))
}

/// GET /authors/api/me/
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let author = load_author(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: author }))
}

/// PATCH /authors/api/me/
///
/// Update the caller's profile bio.
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    ProfileRepo::update(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    let author = load_author(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: author }))
}

/// GET /authors/api/me/recipes/
///
/// The caller's recipes in every publication state, newest first.
pub async fn my_recipes(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let collection = RecipeRepo::list_by_author(&state.pool, auth.user_id).await?;
    let page = list_owned(
        collection,
        auth.requester(),
        state.config.api_page_size,
        parse_page_number(params.page.as_deref()),
    )?;
    Ok(Json(PaginatedResponse::from(page)))
}

async fn load_author(pool: &PgPool, user_id: DbId) -> AppResult<AuthorResponse> {
    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    let bio = ProfileRepo::find_by_author(pool, user_id)
        .await?
        .map(|p| p.bio)
        .unwrap_or_default();

    Ok(AuthorResponse {
        user: UserResponse::from(&user),
        bio,
    })
}
