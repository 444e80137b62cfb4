//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use recipes_core::error::CoreError;
use recipes_core::requester::Requester;
use recipes_core::types::DbId;

use crate::auth::jwt::{validate_token_of_type, TOKEN_TYPE_ACCESS};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (`"staff"` or `"author"`).
    pub role: String,
}

impl AuthUser {
    pub fn requester(&self) -> Requester {
        Requester::User(self.user_id)
    }

    /// Decode the `Authorization` header, if one was sent.
    ///
    /// `Ok(None)` when the header is absent; a present but malformed or
    /// invalid header is always an error.
    fn from_headers(parts: &Parts, state: &AppState) -> Result<Option<Self>, AppError> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;

        let claims = validate_token_of_type(token, TOKEN_TYPE_ACCESS, &state.config.jwt)
            .map_err(|_| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
            })?;

        Ok(Some(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        }))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_headers(parts, state)?.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })
    }
}

/// The caller as a [`Requester`]: anonymous without an `Authorization`
/// header, the token's user otherwise.
///
/// Used by read endpoints that are public but let authors see their own drafts.
#[derive(Debug, Clone, Copy)]
pub struct MaybeAuthUser(pub Requester);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let requester = AuthUser::from_headers(parts, state)?
            .map(|user| user.requester())
            .unwrap_or_default();
        Ok(MaybeAuthUser(requester))
    }
}
