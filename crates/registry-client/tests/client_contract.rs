//! Contract tests for the registry client against an in-process server.
//!
//! A throwaway axum router on a random port stands in for the registry;
//! every status-classification branch of the client gets exercised.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use patrol_registry_client::{PointsUpdate, RegistryClient, RegistryDriver, RemoteError};
use serde_json::json;
use std::time::Duration;

fn driver_json(id: &str, points: i32) -> serde_json::Value {
    json!({
        "id": id,
        "isSuspended": false,
        "numberOfViolationPoints": points,
        "picture": "",
        "owner": {
            "id": "OWN-1",
            "firstName": "Marko",
            "lastName": "Markovic",
            "address": "Cara Dusana 1",
            "jmbg": "0101990500001",
            "email": "marko@mail.com"
        }
    })
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_get_decodes_success_body() {
    let app = Router::new().route(
        "/drivers/:id",
        get(|Path(id): Path<String>| async move { Json(driver_json(&id, 7)) }),
    );
    let base = spawn(app).await;

    let client = RegistryClient::with_default_timeout(base).unwrap();
    let resp = client.driver_by_id("DRV-9").await.unwrap();

    assert_eq!(resp.status, 200);
    let driver = resp.body.expect("decoded body");
    assert_eq!(driver.id, "DRV-9");
    assert_eq!(driver.number_of_violation_points, 7);
}

#[tokio::test]
async fn test_clean_404_is_not_an_error() {
    let app = Router::new().route(
        "/drivers/:id",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({"error": "driver not found"}))) }),
    );
    let base = spawn(app).await;

    let client = RegistryClient::with_default_timeout(base).unwrap();
    let resp = client.driver_by_id("missing").await.unwrap();

    assert_eq!(resp.status, 404);
    assert!(resp.is_not_found());
    assert!(resp.body.is_none());
}

#[tokio::test]
async fn test_server_error_is_a_normal_outcome_with_empty_body() {
    let app = Router::new().route(
        "/vehicles/:registration",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = spawn(app).await;

    let client = RegistryClient::with_default_timeout(base).unwrap();
    let resp = client.vehicle_by_registration("NS-123-AB").await.unwrap();

    assert_eq!(resp.status, 500);
    assert!(!resp.is_success());
    assert!(resp.body.is_none());
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let app = Router::new().route("/drivers/:id", get(|| async { "not json at all" }));
    let base = spawn(app).await;

    let client = RegistryClient::with_default_timeout(base).unwrap();
    let err = client.driver_by_id("DRV-1").await.unwrap_err();

    assert!(matches!(err, RemoteError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_error() {
    // grab a free port, then close it again
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RegistryClient::with_default_timeout(format!("http://{addr}")).unwrap();
    let err = client.driver_by_id("DRV-1").await.unwrap_err();

    assert!(matches!(err, RemoteError::Transport(_)));
}

#[tokio::test]
async fn test_timeout_is_honored() {
    let app = Router::new().route(
        "/drivers/:id",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(driver_json("DRV-1", 0))
        }),
    );
    let base = spawn(app).await;

    let client = RegistryClient::new(base, Duration::from_millis(50)).unwrap();
    let err = client.driver_by_id("DRV-1").await.unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_patch_sends_delta_and_decodes_updated_driver() {
    let app = Router::new().route(
        "/drivers/:id/points",
        patch(
            |Path(id): Path<String>, Json(req): Json<PointsUpdate>| async move {
                Json(driver_json(&id, 3 + req.delta))
            },
        ),
    );
    let base = spawn(app).await;

    let client = RegistryClient::with_default_timeout(base).unwrap();
    let resp = client.add_driver_points("DRV-4", 5).await.unwrap();

    let driver: RegistryDriver = resp.body.expect("decoded body");
    assert_eq!(driver.number_of_violation_points, 8);
}
