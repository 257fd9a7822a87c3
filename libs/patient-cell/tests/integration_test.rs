use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use patient_cell::router::profile_routes;
use patient_cell::ProfileStore;
use shared_storage::JsonStore;

async fn create_test_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(ProfileStore::load(JsonStore::new(dir.path())).await);
    (dir, profile_routes(store))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn profile_round_trip() {
    let (_dir, app) = create_test_app().await;

    let body = json!({
        "name": "María López",
        "email": "maria@example.com",
        "phone": "+54 11 5555-0001"
    });
    let response = app
        .clone()
        .oneshot(json_request(Method::PUT, "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload["name"], "María López");
}

#[tokio::test]
async fn incomplete_profile_is_rejected() {
    let (_dir, app) = create_test_app().await;

    let body = json!({
        "name": "María López",
        "email": "",
        "phone": "+54 11 5555-0001"
    });
    let response = app
        .oneshot(json_request(Method::PUT, "/", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_without_saved_profile_is_404() {
    let (_dir, app) = create_test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_clears_the_profile() {
    let (_dir, app) = create_test_app().await;

    let body = json!({
        "name": "María López",
        "email": "maria@example.com",
        "phone": "+54 11 5555-0001"
    });
    app.clone()
        .oneshot(json_request(Method::PUT, "/", body))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
