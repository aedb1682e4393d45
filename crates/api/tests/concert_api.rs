//! HTTP-level integration tests for the admin concert endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_concert_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/admin/concert",
        serde_json::json!({
            "name": "Symphony No. 9",
            "totalSeat": 200,
            "description": "Beethoven's ninth, full orchestra",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Symphony No. 9");
    assert_eq!(json["totalSeat"], 200);
    assert_eq!(json["currentTotalSeat"], 200);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_concert_rejects_empty_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/admin/concert",
        serde_json::json!({
            "name": "",
            "totalSeat": 200,
            "description": "A perfectly valid description",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Name is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_concert_rejects_small_capacity(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/admin/concert",
        serde_json::json!({
            "name": "Tiny Venue",
            "totalSeat": 9,
            "description": "A perfectly valid description",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Total seat must be at least 10 seat");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_concert_rejects_short_description(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/admin/concert",
        serde_json::json!({
            "name": "Acoustic Set",
            "totalSeat": 50,
            "description": "short",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"],
        "Description must be at least 10 characters long"
    );
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_concerts_in_creation_order(pool: PgPool) {
    common::create_concert(&pool, "First", 10).await;
    common::create_concert(&pool, "Second", 20).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/admin/concert").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "First");
    assert_eq!(list[1]["name"], "Second");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_concert_returns_200(pool: PgPool) {
    let id = common::create_concert(&pool, "Doomed Show", 10).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/admin/concert/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/admin/concert").await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_concert_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/admin/concert/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Concert not found");
}
