//! Integration tests for the staff-only category and tag endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_category, create_published, create_tag, create_user, delete_auth, get,
    post_json_auth, token_for,
};
use recipes_db::repositories::{CategoryRepo, RecipeRepo, TagRepo};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn reference_data_requires_staff(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/admin/categories",
        json!({ "name": "Dessert" }),
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let category = create_category(&pool, "Dinner").await;
    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/admin/categories/{}", category.id),
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_category_and_reject_duplicates(pool: PgPool) {
    let staff = create_user(&pool, "editor", true).await;
    let token = token_for(&staff);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/admin/categories",
        json!({ "name": " Dessert " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["name"], "Dessert");

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/admin/categories",
        json!({ "name": "Dessert" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/admin/categories",
        json!({ "name": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A category still holding recipes is 409 and nothing is removed.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_referenced_category_is_conflict(pool: PgPool) {
    let staff = create_user(&pool, "editor", true).await;
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Dinner").await;
    let recipe = create_published(&pool, &author, &category, "Roast chicken", vec![]).await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/admin/categories/{}", category.id),
        &token_for(&staff),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    assert!(RecipeRepo::find_by_id(&pool, recipe.recipe.id)
        .await
        .unwrap()
        .is_some());
    assert!(CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unused_category(pool: PgPool) {
    let staff = create_user(&pool, "editor", true).await;
    let category = create_category(&pool, "Unused").await;
    let uri = format!("/admin/categories/{}", category.id);

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token_for(&staff)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(common::build_test_app(pool), &uri, &token_for(&staff)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_tag_is_idempotent_by_name(pool: PgPool) {
    let staff = create_user(&pool, "editor", true).await;
    let token = token_for(&staff);

    let mut ids = Vec::new();
    for name in ["Веган", "Веган", "Суп"] {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/admin/tags",
            json!({ "name": name }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        ids.push((json["data"]["id"].as_i64().unwrap(), json["data"]["slug"].clone()));
    }

    assert_eq!(ids[0], ids[1]);
    assert_eq!(ids[0].1, "tag");
    assert_eq!(ids[2].1, "tag-2");
}

/// Deleting a tag untags its recipes; the recipes stay listed.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_tag_keeps_recipes(pool: PgPool) {
    let staff = create_user(&pool, "editor", true).await;
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Dinner").await;
    let vegan = create_tag(&pool, "Vegan").await;
    let recipe = create_published(&pool, &author, &category, "Chickpea curry", vec![vegan.id]).await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/admin/tags/{}", vegan.id),
        &token_for(&staff),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(TagRepo::find_by_id(&pool, vegan.id).await.unwrap().is_none());

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/recipes/api/v2/{}/", recipe.recipe.id),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["tags"], json!([]));
}
