//! HTTP-level integration tests for `/categories`.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, create, delete, get, patch_json, post_json, send_raw};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/categories",
        json!({"name": "Travel", "color": "#3B82F6"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Travel");
    assert_eq!(json["color"], "#3B82F6");
    assert_eq!(json["created_at"], json["updated_at"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_applies_default_color(pool: SqlitePool) {
    let json = create(&pool, "/categories", json!({"name": "Books"})).await;
    assert_eq!(json["color"], "#3B82F6");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_with_empty_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/categories", json!({"name": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Validation error");
    assert_eq!(json["details"][0]["path"], json!(["name"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_with_bad_color_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/categories", json!({"name": "Art", "color": "teal"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"][0]["path"], json!(["color"]));
    assert_eq!(json["details"][0]["code"], "hex_color");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_without_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/categories", json!({"color": "#000000"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"][0]["path"], json!(["name"]));
    assert_eq!(json["details"][0]["code"], "required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_with_null_color_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/categories", json!({"name": "Travel", "color": null})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"][0]["path"], json!(["color"]));

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/categories").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_with_malformed_json_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = send_raw(app, Method::POST, "/categories", "{\"name\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_category_name_returns_500(pool: SqlitePool) {
    create(&pool, "/categories", json!({"name": "Travel"})).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/categories", json!({"name": "Travel"})).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/categories").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_categories_is_alphabetical(pool: SqlitePool) {
    for name in ["Travel", "Books", "Music"] {
        create(&pool, "/categories", json!({"name": name})).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Books", "Music", "Travel"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_category_round_trips(pool: SqlitePool) {
    let created = create(&pool, "/categories", json!({"name": "Travel"})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/categories/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_category_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_category_with_bad_id_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_category_merges_fields(pool: SqlitePool) {
    let created = create(
        &pool,
        "/categories",
        json!({"name": "Travel", "color": "#112233"}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(app, &format!("/categories/{id}"), json!({"name": "Trips"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Trips");
    assert_eq!(json["color"], "#112233");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_category_rejects_empty_name(pool: SqlitePool) {
    let created = create(&pool, "/categories", json!({"name": "Travel"})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(app, &format!("/categories/{id}"), json!({"name": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_category_rejects_null_name(pool: SqlitePool) {
    let id = create(&pool, "/categories", json!({"name": "Travel"})).await["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/categories/{id}");

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, &uri, json!({"name": null})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"][0]["path"], json!(["name"]));

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["name"], "Travel");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_category_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/categories/321", json!({"color": "#ABCDEF"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_category_detaches_wish_items(pool: SqlitePool) {
    let category = create(&pool, "/categories", json!({"name": "Travel"})).await;
    let category_id = category["id"].as_i64().unwrap();
    let item = create(
        &pool,
        "/wish-items",
        json!({"title": "Visit Japan", "category_id": category_id}),
    )
    .await;
    let item_id = item["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/categories/{category_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"success": true}));

    let app = common::build_test_app(pool);
    let item = body_json(get(app, &format!("/wish-items/{item_id}")).await).await;
    assert_eq!(item["title"], "Visit Japan");
    assert!(item["category_id"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_category_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/categories/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
