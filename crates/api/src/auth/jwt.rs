//! JWT access and refresh tokens.
//!
//! Both token kinds are HS256-signed JWTs carrying [`Claims`]; the
//! `token_type` claim keeps a refresh token from being accepted as an
//! access token and vice versa. Nothing is stored server-side.

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use recipes_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's role name (`"staff"` or `"author"`).
    pub role: String,
    /// [`TOKEN_TYPE_ACCESS`] or [`TOKEN_TYPE_REFRESH`].
    pub token_type: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 7).
    pub refresh_token_expiry_days: i64,
}

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }
}

fn issue(
    user_id: DbId,
    role: &str,
    token_type: &str,
    lifetime_secs: i64,
    config: &JwtConfig,
) -> Result<String, JwtError> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        token_type: token_type.to_string(),
        exp: now + lifetime_secs,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Generate a short-lived access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, JwtError> {
    issue(
        user_id,
        role,
        TOKEN_TYPE_ACCESS,
        config.access_token_expiry_mins * 60,
        config,
    )
}

/// Generate a long-lived refresh token for the given user.
pub fn generate_refresh_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, JwtError> {
    issue(
        user_id,
        role,
        TOKEN_TYPE_REFRESH,
        config.refresh_token_expiry_days * 24 * 60 * 60,
        config,
    )
}

/// Validate and decode any token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, JwtError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Validate a token and require it to be of `token_type`.
pub fn validate_token_of_type(
    token: &str,
    token_type: &str,
    config: &JwtConfig,
) -> Result<Claims, JwtError> {
    let claims = validate_token(token, config)?;
    if claims.token_type != token_type {
        return Err(ErrorKind::InvalidToken.into());
    }
    Ok(claims)
}
