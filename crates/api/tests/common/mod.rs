#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use recipes_api::auth::jwt::{generate_access_token, JwtConfig};
use recipes_api::auth::password::hash_password;
use recipes_api::config::ServerConfig;
use recipes_api::router::build_app_router;
use recipes_api::state::AppState;
use recipes_core::roles::role_for;
use recipes_core::types::DbId;
use recipes_db::models::category::{Category, CreateCategory};
use recipes_db::models::recipe::{CreateRecipe, RecipeWithTags};
use recipes_db::models::tag::{CreateTag, Tag};
use recipes_db::models::user::{CreateUser, User};
use recipes_db::repositories::{CategoryRepo, RecipeRepo, TagRepo, UserRepo};

/// Password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
///
/// Both page sizes are 3 so pagination is exercised with a handful of rows.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8000".to_string()],
        request_timeout_secs: 30,
        per_page: 3,
        api_page_size: 3,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the production router over the given pool with [`test_config`].
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, None, Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user with [`TEST_PASSWORD`] (and its profile).
pub async fn create_user(pool: &PgPool, username: &str, is_staff: bool) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        first_name: String::new(),
        last_name: String::new(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        is_staff,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// A valid access token for `user`.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, role_for(user.is_staff), &test_config().jwt)
        .expect("token generation should succeed")
}

pub async fn create_category(pool: &PgPool, name: &str) -> Category {
    CategoryRepo::create(pool, &CreateCategory { name: name.into() })
        .await
        .expect("category creation should succeed")
}

pub async fn create_tag(pool: &PgPool, name: &str) -> Tag {
    TagRepo::create_or_get(pool, &CreateTag { name: name.into() })
        .await
        .expect("tag creation should succeed")
}

/// A complete, valid recipe payload.
pub fn recipe_payload(title: &str, category_id: DbId) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": format!("{title} description"),
        "preparation_time": 10,
        "preparation_time_unit": "Minutes",
        "servings": 4,
        "servings_unit": "Portions",
        "preparation_steps": "Mix everything.\nCook it.",
        "category": category_id,
        "tags": [],
    })
}

/// Insert a draft recipe directly through the repository.
pub async fn create_draft(
    pool: &PgPool,
    author: &User,
    category: &Category,
    title: &str,
    tags: Vec<DbId>,
) -> RecipeWithTags {
    let input = CreateRecipe {
        title: title.into(),
        description: format!("{title} description"),
        preparation_time: 10,
        preparation_time_unit: "Minutes".into(),
        servings: 4,
        servings_unit: "Portions".into(),
        preparation_steps: "Mix everything.\nCook it.".into(),
        preparation_steps_is_html: false,
        cover: None,
        category: category.id,
        tags,
    };
    RecipeRepo::create(pool, author.id, &input)
        .await
        .expect("recipe creation should succeed")
}

/// Insert a recipe and publish it.
pub async fn create_published(
    pool: &PgPool,
    author: &User,
    category: &Category,
    title: &str,
    tags: Vec<DbId>,
) -> RecipeWithTags {
    let recipe = create_draft(pool, author, category, title, tags).await;
    RecipeRepo::set_published(pool, recipe.recipe.id, true)
        .await
        .expect("publishing should succeed");
    RecipeRepo::find_by_id(pool, recipe.recipe.id)
        .await
        .expect("lookup should succeed")
        .expect("recipe should exist")
}
