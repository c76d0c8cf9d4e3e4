//! Violation intake engine and driver reports
//!
//! Intake orchestrates three steps against two systems: remote
//! vehicle/driver validation, local persistence, then a best-effort point
//! push back to the registry. The two remote calls gate the write; the
//! point push never un-writes it - a failed push degrades the outcome to
//! `PointSync::Pending` instead of rolling back, and the caller is told.

use chrono::Utc;
use patrol_core::{new_id, NewViolation, RiskLevel, ViolationType};
use patrol_persistence::{PoliceRepo, ViolationRepo, ViolationRow};
use patrol_registry_client::{RegistryDriver, RegistryVehicle};
use serde::Serialize;

use crate::error::{BusinessError, BusinessResult};
use crate::services::ServiceContext;

/// Whether the registry point update for a recorded violation applied.
///
/// `Pending` means the violation is durably persisted locally but the
/// driver's registry record was not updated; the two stores diverge until
/// reconciled out of band.
#[derive(Debug, Clone)]
pub enum PointSync {
    Applied(RegistryDriver),
    Pending,
}

impl PointSync {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Result of a successful violation intake.
#[derive(Debug, Clone)]
pub struct ViolationOutcome {
    pub violation: ViolationRow,
    pub vehicle: RegistryVehicle,
    pub sync: PointSync,
}

/// Driver risk report, derived fresh on every call.
#[derive(Debug, Clone, Serialize)]
pub struct DriverReport {
    pub driver_id: String,
    pub total_violations: usize,
    pub risk_score: i32,
    pub risk_level: RiskLevel,
}

/// Sum of the risk weights of the given violations. Rows whose stored
/// type no longer parses contribute nothing.
fn risk_score(violations: &[ViolationRow]) -> i32 {
    violations
        .iter()
        .filter_map(|v| ViolationType::from_str(&v.type_of_violation).ok())
        .map(|t| t.risk_weight())
        .sum()
}

/// Violation Intake Service
pub struct ViolationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ViolationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a violation.
    ///
    /// The violation's `vehicle_id` is treated as a registration string
    /// and resolved against the registry before anything is written.
    pub async fn record(&self, req: NewViolation) -> BusinessResult<ViolationOutcome> {
        // 1. resolve the vehicle; a clean 404 and a transport failure are
        //    different rejections
        let vehicle = self
            .ctx
            .registry()
            .vehicle_by_registration(&req.vehicle_id)
            .await?
            .body
            .ok_or(BusinessError::InvalidVehicleRegistration)?;

        // 2. stolen vehicles escalate whatever the caller submitted
        let effective = ViolationType::effective(req.type_of_violation, vehicle.is_stolen);

        // 3. resolve the driver; suspension blocks intake entirely
        let driver = self
            .ctx
            .registry()
            .driver_by_id(&req.driver_id)
            .await?
            .body
            .ok_or(BusinessError::InvalidDriverId)?;
        if driver.is_suspended {
            return Err(BusinessError::DriverSuspended);
        }

        // 4. a referenced officer must exist and be in service
        if let Some(police_id) = req.police_ref() {
            let officer = PoliceRepo::get_by_id(self.ctx.pool(), police_id)
                .await
                .map_err(|e| {
                    if e.is_not_found() {
                        BusinessError::PoliceNotFound(police_id.to_string())
                    } else {
                        e.into()
                    }
                })?;
            if officer.is_suspended {
                return Err(BusinessError::PoliceSuspended);
            }
        }

        // 5. persist locally
        let row = ViolationRow {
            id: new_id(),
            type_of_violation: effective.as_str().to_string(),
            date: req.date.unwrap_or_else(Utc::now),
            location: req.location.clone(),
            driver_id: req.driver_id.clone(),
            vehicle_id: req.vehicle_id.clone(),
            police_id: req.police_ref().map(str::to_string),
            created_at: Utc::now(),
        };
        ViolationRepo::insert(self.ctx.pool(), &row).await?;

        // 6-7. push points, best effort; the violation stays either way
        let delta = effective.point_delta();
        let sync = match self.ctx.registry().add_driver_points(&row.driver_id, delta).await {
            Ok(resp) => match resp.body {
                Some(updated) => PointSync::Applied(updated),
                None => {
                    tracing::warn!(
                        driver_id = %row.driver_id,
                        status = resp.status,
                        "registry rejected the point update; sync pending"
                    );
                    PointSync::Pending
                }
            },
            Err(err) => {
                tracing::warn!(
                    driver_id = %row.driver_id,
                    error = %err,
                    "registry point update failed; sync pending"
                );
                PointSync::Pending
            }
        };

        Ok(ViolationOutcome {
            violation: row,
            vehicle,
            sync,
        })
    }

    /// All violations, newest first.
    pub async fn list(&self) -> BusinessResult<Vec<ViolationRow>> {
        Ok(ViolationRepo::list(self.ctx.pool()).await?)
    }

    pub async fn get(&self, id: &str) -> BusinessResult<ViolationRow> {
        Ok(ViolationRepo::get_by_id(self.ctx.pool(), id).await?)
    }

    pub async fn list_by_driver(&self, driver_id: &str) -> BusinessResult<Vec<ViolationRow>> {
        Ok(ViolationRepo::list_by_driver(self.ctx.pool(), driver_id).await?)
    }

    /// Aggregate the driver's local violation history into a risk report.
    pub async fn driver_report(&self, driver_id: &str) -> BusinessResult<DriverReport> {
        let violations = self.list_by_driver(driver_id).await?;
        let score = risk_score(&violations);
        Ok(DriverReport {
            driver_id: driver_id.to_string(),
            total_violations: violations.len(),
            risk_score: score,
            risk_level: RiskLevel::classify(score),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(type_of_violation: &str) -> ViolationRow {
        ViolationRow {
            id: new_id(),
            type_of_violation: type_of_violation.to_string(),
            date: Utc::now(),
            location: String::new(),
            driver_id: "DRV-1".to_string(),
            vehicle_id: "NS-123-AB".to_string(),
            police_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_risk_score_aggregation() {
        let violations = vec![row("CRITICAL"), row("MAJOR"), row("MINOR")];
        assert_eq!(risk_score(&violations), 17);
        assert_eq!(RiskLevel::classify(risk_score(&violations)), RiskLevel::Medium);
    }

    #[test]
    fn test_unparseable_rows_do_not_count() {
        let violations = vec![row("MINOR"), row("legacy-unknown")];
        assert_eq!(risk_score(&violations), 2);
    }

    #[test]
    fn test_report_wire_format_is_snake_case() {
        let report = DriverReport {
            driver_id: "DRV-1".to_string(),
            total_violations: 3,
            risk_score: 21,
            risk_level: RiskLevel::High,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["driver_id"], "DRV-1");
        assert_eq!(json["risk_score"], 21);
        assert_eq!(json["risk_level"], "HIGH");
    }
}
