//! End-to-end smoke tests for the full miniblogd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use miniblog_adapter_http_axum::router;
use miniblog_adapter_http_axum::state::AppState;
use miniblog_adapter_storage_sqlite_sqlx::{
    Config, SqliteCategoryRepository, SqlitePostRepository, SqliteUserRepository,
};
use miniblog_app::services::category_service::CategoryService;
use miniblog_app::services::post_service::PostService;
use miniblog_app::services::user_service::UserService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let post_repo = SqlitePostRepository::new(pool.clone());
    let user_repo = SqliteUserRepository::new(pool.clone());
    let category_repo = SqliteCategoryRepository::new(pool);

    let state = AppState::new(
        PostService::new(post_repo),
        UserService::new(user_repo),
        CategoryService::new(category_repo),
    );

    router::build(state)
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(content) => {
            builder = builder.header("content-type", "application/json");
            Body::from(content.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_welcome_message_on_home() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["message"], "welcome to v1");
}

// ---------------------------------------------------------------------------
// Users: the create → get → miss scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_user_scenario() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/users/", Some(r#"{"name":"Alice"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let created = json(&body);
    assert_eq!(created["name"], "Alice");
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["name"], "Alice");

    let (status, body) = send(&app, "GET", "/users/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body)["error"], "user not found");
}

#[tokio::test]
async fn should_list_users_after_creating_them() {
    let app = app().await;
    send(&app, "POST", "/users/", Some(r#"{"name":"Alice"}"#)).await;
    send(&app, "POST", "/users/", Some(r#"{"name":"Bob"}"#)).await;

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = json(&body);
    assert_eq!(users.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_default_missing_user_fields_on_create() {
    let app = app().await;
    let (status, body) = send(&app, "POST", "/users/", Some("{}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["name"], "");
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_list_and_get_categories() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/categories/", Some(r#"{"name":"rust"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let id = json(&body)["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/categories/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["name"], "rust");

    let (status, body) = send(&app, "GET", "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body).as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "GET", "/categories/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body)["error"], "category not found");
}

// ---------------------------------------------------------------------------
// Posts: full CRUD cycle with eager-loaded associations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_post_crud_cycle() {
    let app = app().await;

    let (_, body) = send(&app, "POST", "/users/", Some(r#"{"name":"Alice"}"#)).await;
    let user_id = json(&body)["id"].as_i64().unwrap();
    let (_, body) = send(&app, "POST", "/categories/", Some(r#"{"name":"rust"}"#)).await;
    let category_id = json(&body)["id"].as_i64().unwrap();

    // Create
    let (status, body) = send(
        &app,
        "POST",
        "/posts/",
        Some(&format!(
            r#"{{"title":"hello","body":"world","user_id":{user_id},"category_id":{category_id}}}"#
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created = json(&body);
    assert_eq!(created["title"], "hello");
    let post_id = created["id"].as_i64().unwrap();

    // Get: associations resolved in the same response
    let (status, body) = send(&app, "GET", &format!("/posts/{post_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let detail = json(&body);
    assert_eq!(detail["body"], "world");
    assert_eq!(detail["user"]["name"], "Alice");
    assert_eq!(detail["category"]["name"], "rust");

    // Update: partial body keeps unmentioned fields
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/posts/{post_id}"),
        Some(r#"{"title":"updated"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = json(&body);
    assert_eq!(updated["title"], "updated");
    assert_eq!(updated["body"], "world");

    // Delete
    let (status, body) = send(&app, "DELETE", &format!("/posts/{post_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    // Gone
    let (status, body) = send(&app, "GET", &format!("/posts/{post_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body)["error"], "post not found");
}

#[tokio::test]
async fn should_list_exactly_the_created_posts() {
    let app = app().await;
    for title in ["a", "b", "c"] {
        send(
            &app,
            "POST",
            "/posts/",
            Some(&format!(r#"{{"title":"{title}"}}"#)),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/posts/", None).await;
    assert_eq!(status, StatusCode::OK);
    let posts = json(&body);
    let titles: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["a", "b", "c"]);
}

#[tokio::test]
async fn should_return_empty_array_when_no_posts_exist() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/posts/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!([]));
}

#[tokio::test]
async fn should_accept_dangling_references_and_roundtrip_them() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/posts/",
        Some(r#"{"title":"orphan","category_id":999,"user_id":888}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let post_id = json(&body)["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/posts/{post_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let detail = json(&body);
    assert_eq!(detail["category_id"], 999);
    assert_eq!(detail["user_id"], 888);
    assert!(detail["category"].is_null());
    assert!(detail["user"].is_null());
}

#[tokio::test]
async fn should_not_write_when_updating_missing_post() {
    let app = app().await;

    let (status, _) = send(&app, "PUT", "/posts/42", Some(r#"{"title":"ghost"}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/posts/", None).await;
    assert_eq!(json(&body), serde_json::json!([]));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_post() {
    let app = app().await;
    let (status, _) = send(&app, "DELETE", "/posts/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_default_missing_post_fields_on_create() {
    let app = app().await;
    let (status, body) = send(&app, "POST", "/posts/", Some("{}")).await;

    assert_eq!(status, StatusCode::OK);
    let created = json(&body);
    assert_eq!(created["title"], "");
    assert_eq!(created["body"], "");
    assert!(created["category_id"].is_null());
    assert!(created["user_id"].is_null());
}
