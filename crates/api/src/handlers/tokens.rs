//! Handlers for the `/recipes/api/token` endpoints (obtain, refresh, verify).

use axum::extract::State;
use axum::Json;
use recipes_core::error::CoreError;
use recipes_core::roles::role_for;
use recipes_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, validate_token, validate_token_of_type,
    TOKEN_TYPE_REFRESH,
};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /recipes/api/token/`.
#[derive(Debug, Deserialize)]
pub struct TokenObtainRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /recipes/api/token/refresh/`.
#[derive(Debug, Deserialize)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

/// Request body for `POST /recipes/api/token/verify/`.
#[derive(Debug, Deserialize)]
pub struct TokenVerifyRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct AccessToken {
    pub access: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct TokenStatus {
    pub valid: bool,
    pub token_type: String,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "No active account found with the given credentials".into(),
    ))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /recipes/api/token/
///
/// Exchange username + password for an access and a refresh token.
/// Unknown users, wrong passwords and deactivated accounts are all 401.
pub async fn obtain(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TokenObtainRequest>,
) -> AppResult<Json<TokenPair>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Rejected token request: wrong password");
        return Err(invalid_credentials());
    }

    let role = role_for(user.is_staff);
    let jwt = &state.config.jwt;
    let access = generate_access_token(user.id, role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let refresh = generate_refresh_token(user.id, role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "Issued token pair");

    Ok(Json(TokenPair {
        access,
        refresh,
        expires_in: jwt.access_token_expiry_mins * 60,
    }))
}

/// POST /recipes/api/token/refresh/
///
/// Exchange a valid refresh token for a new access token. The account must
/// still exist and be active.
pub async fn refresh(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TokenRefreshRequest>,
) -> AppResult<Json<AccessToken>> {
    let jwt = &state.config.jwt;
    let claims = validate_token_of_type(&input.refresh, TOKEN_TYPE_REFRESH, jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        ))
    })?;

    let user = UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(invalid_credentials)?;

    let access = generate_access_token(user.id, role_for(user.is_staff), jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(AccessToken {
        access,
        expires_in: jwt.access_token_expiry_mins * 60,
    }))
}

/// POST /recipes/api/token/verify/
///
/// 200 for a well-signed, unexpired token of either kind; 401 otherwise.
pub async fn verify(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TokenVerifyRequest>,
) -> AppResult<Json<TokenStatus>> {
    let claims = validate_token(&input.token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Token is invalid or expired".into()))
    })?;

    Ok(Json(TokenStatus {
        valid: true,
        token_type: claims.token_type,
    }))
}
