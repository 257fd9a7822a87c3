use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use professional_cell::router::professional_routes;
use professional_cell::ScheduleCatalog;

fn catalog_json(professional_id: Uuid) -> Value {
    json!([
        {
            "id": professional_id,
            "name": "Lic. Ana García",
            "specialty": "Psicología Clínica",
            "schedule": [
                { "weekday": 1, "start": "09:00:00", "end": "13:00:00" },
                { "weekday": 3, "start": "14:00:00", "end": "18:00:00" }
            ]
        }
    ])
}

async fn write_catalog(value: &Value) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("professionals.json");
    tokio::fs::write(&path, serde_json::to_vec(value).unwrap())
        .await
        .unwrap();
    (dir, path)
}

#[tokio::test]
async fn catalog_loads_from_file() {
    let professional_id = Uuid::new_v4();
    let (_dir, path) = write_catalog(&catalog_json(professional_id)).await;

    let catalog = ScheduleCatalog::load(&path).await.unwrap();

    assert_eq!(catalog.list().len(), 1);
    let professional = catalog.get(professional_id).unwrap();
    assert_eq!(professional.specialty, "Psicología Clínica");
    assert_eq!(professional.schedule.len(), 2);
}

#[tokio::test]
async fn catalog_with_duplicate_weekday_fails_to_load() {
    let professional_id = Uuid::new_v4();
    let broken = json!([
        {
            "id": professional_id,
            "name": "Lic. Ana García",
            "specialty": "Psicología Clínica",
            "schedule": [
                { "weekday": 1, "start": "09:00:00", "end": "12:00:00" },
                { "weekday": 1, "start": "14:00:00", "end": "18:00:00" }
            ]
        }
    ]);
    let (_dir, path) = write_catalog(&broken).await;

    assert!(ScheduleCatalog::load(&path).await.is_err());
}

#[tokio::test]
async fn missing_catalog_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    assert!(ScheduleCatalog::load(&path).await.is_err());
}

#[tokio::test]
async fn list_endpoint_returns_professionals() {
    let professional_id = Uuid::new_v4();
    let (_dir, path) = write_catalog(&catalog_json(professional_id)).await;
    let catalog = Arc::new(ScheduleCatalog::load(&path).await.unwrap());
    let app = professional_routes(catalog);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload["total"], 1);
    assert_eq!(payload["professionals"][0]["name"], "Lic. Ana García");
}

#[tokio::test]
async fn unknown_professional_returns_404() {
    let professional_id = Uuid::new_v4();
    let (_dir, path) = write_catalog(&catalog_json(professional_id)).await;
    let catalog = Arc::new(ScheduleCatalog::load(&path).await.unwrap());
    let app = professional_routes(catalog);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
