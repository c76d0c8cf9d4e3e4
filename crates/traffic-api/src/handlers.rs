//! Traffic API handlers
//!
//! Thin layer: bind the payload, call the business service, map the
//! result. All interesting decisions live in patrol-business.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use patrol_business::{
    OwnerService, PointSync, PoliceService, TransferService, VehicleService, ViolationService,
};
use patrol_core::{
    NewOwner, NewPolicePerson, NewTransfer, NewVehicle, NewViolation, VehicleSearch,
    VehicleVerification,
};
use patrol_persistence::ViolationRow;
use patrol_registry_client::{RegistryDriver, RegistryVehicle};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Warning attached when the violation persisted but the registry point
/// update did not apply. Wording is part of the established contract.
const POINTS_WARNING: &str = "violation created but mup points update failed";

pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

// ===== Police =====

#[derive(Deserialize)]
pub struct RankChange {
    pub upgrade: bool,
}

pub async fn create_police(
    State(state): State<AppState>,
    Json(payload): Json<NewPolicePerson>,
) -> ApiResult<impl IntoResponse> {
    let police = PoliceService::new(&state.ctx).register(payload).await?;
    Ok((StatusCode::CREATED, Json(police)))
}

pub async fn list_police(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let list = PoliceService::new(&state.ctx).list().await?;
    Ok(Json(list))
}

pub async fn get_police(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let police = PoliceService::new(&state.ctx).get(&id).await?;
    Ok(Json(police))
}

pub async fn toggle_police_suspend(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let police = PoliceService::new(&state.ctx).toggle_suspend(&id).await?;
    Ok(Json(police))
}

pub async fn change_police_rank(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RankChange>,
) -> ApiResult<impl IntoResponse> {
    let police = PoliceService::new(&state.ctx)
        .change_rank(&id, payload.upgrade)
        .await?;
    Ok(Json(police))
}

// ===== Owners =====

pub async fn create_owner(
    State(state): State<AppState>,
    Json(payload): Json<NewOwner>,
) -> ApiResult<impl IntoResponse> {
    let owner = OwnerService::new(&state.ctx).register(payload).await?;
    Ok((StatusCode::CREATED, Json(owner)))
}

pub async fn list_owners(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let list = OwnerService::new(&state.ctx).list().await?;
    Ok(Json(list))
}

pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let owner = OwnerService::new(&state.ctx).get(&id).await?;
    Ok(Json(owner))
}

// ===== Vehicles =====

pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<NewVehicle>,
) -> ApiResult<impl IntoResponse> {
    let vehicle = VehicleService::new(&state.ctx).register(payload).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

pub async fn list_vehicles(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let list = VehicleService::new(&state.ctx).list().await?;
    Ok(Json(list))
}

pub async fn search_vehicles(
    State(state): State<AppState>,
    Json(filter): Json<VehicleSearch>,
) -> ApiResult<impl IntoResponse> {
    let list = VehicleService::new(&state.ctx).search(&filter).await?;
    Ok(Json(list))
}

pub async fn verify_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<VehicleVerification>,
) -> ApiResult<impl IntoResponse> {
    let verification = VehicleService::new(&state.ctx).verify(&payload).await?;
    Ok(Json(verification))
}

// ===== Violations =====

/// Intake response; `driver` carries the updated registry record when the
/// point push applied, `warning` flags the degraded outcome when it did
/// not.
#[derive(Serialize)]
pub struct ViolationResponse {
    pub violation: ViolationRow,
    pub vehicle: RegistryVehicle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<RegistryDriver>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

pub async fn create_violation(
    State(state): State<AppState>,
    Json(payload): Json<NewViolation>,
) -> ApiResult<impl IntoResponse> {
    let outcome = ViolationService::new(&state.ctx).record(payload).await?;

    let (driver, warning) = match outcome.sync {
        PointSync::Applied(driver) => (Some(driver), None),
        PointSync::Pending => (None, Some(POINTS_WARNING)),
    };

    Ok((
        StatusCode::CREATED,
        Json(ViolationResponse {
            violation: outcome.violation,
            vehicle: outcome.vehicle,
            driver,
            warning,
        }),
    ))
}

pub async fn list_violations(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let list = ViolationService::new(&state.ctx).list().await?;
    Ok(Json(list))
}

pub async fn get_violation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let violation = ViolationService::new(&state.ctx).get(&id).await?;
    Ok(Json(violation))
}

pub async fn list_violations_by_driver(
    State(state): State<AppState>,
    Path(driver_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let list = ViolationService::new(&state.ctx)
        .list_by_driver(&driver_id)
        .await?;
    Ok(Json(list))
}

pub async fn driver_report(
    State(state): State<AppState>,
    Path(driver_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let report = ViolationService::new(&state.ctx)
        .driver_report(&driver_id)
        .await?;
    Ok(Json(report))
}

// ===== Transfers =====

pub async fn create_transfer(
    State(state): State<AppState>,
    Json(payload): Json<NewTransfer>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match TransferService::new(&state.ctx).transfer(payload).await {
        Ok(transfer) => Ok((StatusCode::CREATED, Json(transfer))),
        // this route reports referential failures as 400, per contract
        Err(err) if err.is_not_found() || err.is_validation() => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )),
        Err(err) => {
            let (status, body) = ApiError::from(err).into_parts();
            Err((status, Json(body)))
        }
    }
}

pub async fn list_transfers(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let list = TransferService::new(&state.ctx).list().await?;
    Ok(Json(list))
}
