//! HTTP-level integration tests for the `/recipes/api/v2` endpoints.
//!
//! Covers publication gating, author-only drafts, pagination, the lenient
//! `category_id` filter, creation ownership and author-only mutation.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_category, create_draft, create_published, create_tag, create_user, delete,
    delete_auth, get, get_auth, patch_json, patch_json_auth, post_json, post_json_auth,
    recipe_payload, token_for,
};
use recipes_db::repositories::RecipeRepo;
use sqlx::PgPool;

fn result_ids(json: &serde_json::Value) -> Vec<i64> {
    json["results"]
        .as_array()
        .expect("results must be an array")
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Only published recipes are listed, newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_contains_exactly_published(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Dinner").await;
    let first = create_published(&pool, &author, &category, "First recipe", vec![]).await;
    create_draft(&pool, &author, &category, "Hidden draft", vec![]).await;
    let second = create_published(&pool, &author, &category, "Second recipe", vec![]).await;

    let response = get(common::build_test_app(pool), "/recipes/api/v2/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    assert_eq!(
        result_ids(&json),
        vec![second.recipe.id, first.recipe.id]
    );
}

/// Eight published recipes at page size 3 split into pages of 3, 3 and 2.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_paginated(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Dinner").await;
    for n in 1..=8 {
        create_published(&pool, &author, &category, &format!("Recipe number {n}"), vec![]).await;
    }

    let mut sizes = Vec::new();
    for page in 1..=3 {
        let app = common::build_test_app(pool.clone());
        let json = body_json(get(app, &format!("/recipes/api/v2/?page={page}")).await).await;
        assert_eq!(json["total_pages"], 3);
        sizes.push(json["results"].as_array().unwrap().len());
    }
    assert_eq!(sizes, vec![3, 3, 2]);

    // Out-of-range and malformed page numbers clamp instead of failing.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/recipes/api/v2/?page=99").await).await;
    assert_eq!(json["current_page"], 3);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/recipes/api/v2/?page=abc").await).await;
    assert_eq!(json["current_page"], 1);
    assert!(json["previous"].is_null());
    assert_eq!(json["next"], 2);
}

/// A numeric `category_id` narrows the list; anything else is ignored.
#[sqlx::test(migrations = "../db/migrations")]
async fn category_filter_is_lenient(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let dinner = create_category(&pool, "Dinner").await;
    let dessert = create_category(&pool, "Dessert").await;
    create_published(&pool, &author, &dinner, "Beef stew pot", vec![]).await;
    let cake = create_published(&pool, &author, &dessert, "Carrot cake", vec![]).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/recipes/api/v2/?category_id={}", dessert.id)).await)
        .await;
    assert_eq!(result_ids(&json), vec![cake.recipe.id]);

    for raw in ["abc", "", "-1", "1.5"] {
        let app = common::build_test_app(pool.clone());
        let json = body_json(get(app, &format!("/recipes/api/v2/?category_id={raw}")).await).await;
        assert_eq!(json["count"], 2, "category_id={raw:?} must not filter");
    }
}

/// A title substring unique to one recipe returns exactly that recipe.
#[sqlx::test(migrations = "../db/migrations")]
async fn search_by_title_substring(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Dinner").await;
    create_published(&pool, &author, &category, "Tomato soup", vec![]).await;
    let lasagna = create_published(&pool, &author, &category, "Spinach lasagna", vec![]).await;

    let json = body_json(get(common::build_test_app(pool), "/recipes/api/v2/?q=LASAG").await).await;
    assert_eq!(result_ids(&json), vec![lasagna.recipe.id]);
}

// ---------------------------------------------------------------------------
// Retrieval
// ---------------------------------------------------------------------------

/// Drafts are 404 for anonymous and non-owner callers, visible to their author.
#[sqlx::test(migrations = "../db/migrations")]
async fn draft_visible_only_to_author(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let other = create_user(&pool, "other", false).await;
    let category = create_category(&pool, "Dinner").await;
    let draft = create_draft(&pool, &author, &category, "Secret recipe", vec![]).await;
    let uri = format!("/recipes/api/v2/{}/", draft.recipe.id);

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(common::build_test_app(pool.clone()), &uri, &token_for(&other)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(common::build_test_app(pool), &uri, &token_for(&author)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Secret recipe");
    assert_eq!(json["data"]["is_published"], false);
}

/// Published recipes are readable anonymously, with tags attached.
#[sqlx::test(migrations = "../db/migrations")]
async fn retrieve_published_with_tags(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Dinner").await;
    let tag = create_tag(&pool, "Vegan").await;
    let recipe = create_published(&pool, &author, &category, "Lentil curry", vec![tag.id]).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/recipes/api/v2/{}/", recipe.recipe.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "lentil-curry");
    assert_eq!(json["data"]["category_name"], "Dinner");
    assert_eq!(json["data"]["tags"][0]["slug"], "vegan");
}

/// A garbage bearer token is 401 even on public endpoints.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_token_is_rejected(pool: PgPool) {
    let response = get_auth(common::build_test_app(pool), "/recipes/api/v2/1/", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Creation requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_auth(pool: PgPool) {
    let category = create_category(&pool, "Dinner").await;
    let response = post_json(
        common::build_test_app(pool),
        "/recipes/api/v2/",
        recipe_payload("Anonymous pie", category.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The author is always the caller and the recipe starts as a draft,
/// whatever the payload claims.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_sets_author_to_requester(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let other = create_user(&pool, "other", false).await;
    let category = create_category(&pool, "Dinner").await;
    let tag = create_tag(&pool, "Quick").await;

    let mut payload = recipe_payload("Pancake stack", category.id);
    payload["author"] = serde_json::json!(other.id);
    payload["author_id"] = serde_json::json!(other.id);
    payload["is_published"] = serde_json::json!(true);
    payload["tags"] = serde_json::json!([tag.id]);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/recipes/api/v2/",
        payload,
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["author_id"], author.id);
    assert_eq!(json["data"]["is_published"], false);
    assert_eq!(json["data"]["tags"][0]["id"], tag.id);

    let id = json["data"]["id"].as_i64().unwrap();
    let stored = RecipeRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.recipe.author_id, author.id);
}

/// Repeated titles get distinct slugs.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_assigns_unique_slugs(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Dinner").await;
    let token = token_for(&author);

    let mut slugs = Vec::new();
    for _ in 0..3 {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/recipes/api/v2/",
            recipe_payload("Apple crumble", category.id),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        slugs.push(body_json(response).await["data"]["slug"].as_str().unwrap().to_string());
    }
    assert_eq!(slugs, vec!["apple-crumble", "apple-crumble-2", "apple-crumble-3"]);
}

/// Titles without ASCII letters or digits share the `recipe` base slug.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_non_latin_titles_get_fallback_slugs(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Soups").await;
    let token = token_for(&author);

    let mut slugs = Vec::new();
    for title in ["Борщ с мясом", "Пельмени домашние"] {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/recipes/api/v2/",
            recipe_payload(title, category.id),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED, "{title}");
        slugs.push(body_json(response).await["data"]["slug"].as_str().unwrap().to_string());
    }
    assert_eq!(slugs, vec!["recipe", "recipe-2"]);
}

/// Invalid fields and unknown references are reported together as 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_validates_fields(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;

    let mut payload = recipe_payload("Pie", 9999);
    payload["servings"] = serde_json::json!(0);
    payload["tags"] = serde_json::json!([4242]);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/recipes/api/v2/",
        payload,
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    for field in ["title", "servings", "category", "tags"] {
        assert!(
            json["fields"][field].is_array(),
            "expected an error for {field}: {json}"
        );
    }
}

/// Missing required fields are a 400, not a 422.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_missing_fields_is_400(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/recipes/api/v2/",
        serde_json::json!({ "title": "Only a title" }),
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

/// Only the author may PATCH: anonymous is 401, other users 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn patch_is_owner_only(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let other = create_user(&pool, "other", false).await;
    let category = create_category(&pool, "Dinner").await;
    let recipe = create_published(&pool, &author, &category, "Fish tacos", vec![]).await;
    let uri = format!("/recipes/api/v2/{}/", recipe.recipe.id);
    let patch = serde_json::json!({ "title": "Better fish tacos" });

    let response = patch_json(common::build_test_app(pool.clone()), &uri, patch.clone()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        patch.clone(),
        &token_for(&other),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        patch,
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Better fish tacos");
    assert_eq!(json["data"]["servings"], 4);
}

/// A patch is validated against the merged recipe.
#[sqlx::test(migrations = "../db/migrations")]
async fn patch_validates_merged_fields(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Dinner").await;
    let recipe = create_published(&pool, &author, &category, "Fish tacos", vec![]).await;

    let response = patch_json_auth(
        common::build_test_app(pool),
        &format!("/recipes/api/v2/{}/", recipe.recipe.id),
        serde_json::json!({ "description": "Fish tacos" }),
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["description"].is_array());
}

/// Only the author may DELETE; a successful delete is 204 and the recipe is gone.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_is_owner_only(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let other = create_user(&pool, "other", false).await;
    let category = create_category(&pool, "Dinner").await;
    let recipe = create_published(&pool, &author, &category, "Fish tacos", vec![]).await;
    let uri = format!("/recipes/api/v2/{}/", recipe.recipe.id);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token_for(&other)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response =
        delete_auth(common::build_test_app(pool.clone()), &uri, &token_for(&author)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(RecipeRepo::find_by_id(&pool, recipe.recipe.id)
        .await
        .unwrap()
        .is_none());
}

/// Authors can still edit their own drafts; others get 404, not 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn draft_mutation(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let other = create_user(&pool, "other", false).await;
    let category = create_category(&pool, "Dinner").await;
    let draft = create_draft(&pool, &author, &category, "Work in progress", vec![]).await;
    let uri = format!("/recipes/api/v2/{}/", draft.recipe.id);
    let patch = serde_json::json!({ "servings": 6 });

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        patch.clone(),
        &token_for(&other),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response =
        patch_json_auth(common::build_test_app(pool), &uri, patch, &token_for(&author)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["servings"], 6);
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn tag_detail(pool: PgPool) {
    let tag = create_tag(&pool, "Gluten Free").await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/recipes/api/v2/tag/{}/", tag.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Gluten Free");
    assert_eq!(json["data"]["slug"], "gluten-free");

    let response = get(common::build_test_app(pool), "/recipes/api/v2/tag/9999/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Legacy v1
// ---------------------------------------------------------------------------

/// v1 never shows drafts, even to their author.
#[sqlx::test(migrations = "../db/migrations")]
async fn v1_is_published_only(pool: PgPool) {
    let author = create_user(&pool, "author", false).await;
    let category = create_category(&pool, "Dinner").await;
    let published = create_published(&pool, &author, &category, "Public recipe", vec![]).await;
    let draft = create_draft(&pool, &author, &category, "Private recipe", vec![]).await;

    let json = body_json(get(common::build_test_app(pool.clone()), "/recipes/api/v1/").await).await;
    assert_eq!(result_ids(&json), vec![published.recipe.id]);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/recipes/api/v1/{}/", draft.recipe.id),
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
