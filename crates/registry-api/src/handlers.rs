//! Registry handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::model::{Driver, PointsUpdate, SuspendUpdate, Vehicle};
use crate::store::RegistryStore;

type AppState = Arc<RegistryStore>;
type NotFound = (StatusCode, Json<serde_json::Value>);

fn not_found(what: &str) -> NotFound {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{what} not found") })),
    )
}

pub async fn health() -> impl IntoResponse {
    Json(json!({"service": "registry", "status": "ok"}))
}

// ===== Vehicles =====

pub async fn list_vehicles(State(store): State<AppState>) -> impl IntoResponse {
    Json(store.vehicles().await)
}

pub async fn vehicle_by_registration(
    State(store): State<AppState>,
    Path(registration): Path<String>,
) -> Result<Json<Vehicle>, NotFound> {
    store
        .vehicle_by_registration(&registration)
        .await
        .map(Json)
        .ok_or_else(|| not_found("vehicle"))
}

pub async fn vehicle_by_owner_jmbg(
    State(store): State<AppState>,
    Path(jmbg): Path<String>,
) -> Result<Json<Vehicle>, NotFound> {
    store
        .vehicle_by_owner_jmbg(&jmbg)
        .await
        .map(Json)
        .ok_or_else(|| not_found("vehicle"))
}

// ===== Drivers =====

pub async fn list_drivers(State(store): State<AppState>) -> impl IntoResponse {
    Json(store.drivers().await)
}

pub async fn driver_by_id(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Driver>, NotFound> {
    store
        .driver_by_id(&id)
        .await
        .map(Json)
        .ok_or_else(|| not_found("driver"))
}

pub async fn driver_by_email(
    State(store): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Driver>, NotFound> {
    store
        .driver_by_email(&email)
        .await
        .map(Json)
        .ok_or_else(|| not_found("driver"))
}

pub async fn update_driver_points(
    State(store): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PointsUpdate>,
) -> Result<Json<Driver>, NotFound> {
    store
        .apply_points(&id, req.delta)
        .await
        .map(Json)
        .ok_or_else(|| not_found("driver"))
}

pub async fn update_driver_suspension(
    State(store): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SuspendUpdate>,
) -> Result<Json<Driver>, NotFound> {
    store
        .set_suspended(&id, req.is_suspended)
        .await
        .map(Json)
        .ok_or_else(|| not_found("driver"))
}

// ===== Owners / transfers / admins =====

pub async fn list_owners(State(store): State<AppState>) -> impl IntoResponse {
    Json(store.owners().await)
}

pub async fn list_transfers(State(store): State<AppState>) -> impl IntoResponse {
    Json(store.transfers().await)
}

pub async fn list_admins(State(store): State<AppState>) -> impl IntoResponse {
    Json(store.admins().await)
}
