//! Vehicle registration, search and owner verification

use chrono::Utc;
use patrol_core::{new_id, NewVehicle, VehicleSearch, VehicleVerification};
use patrol_persistence::{OwnerRepo, VehicleDetail, VehicleRepo, VehicleRow};
use serde::Serialize;

use crate::error::{BusinessError, BusinessResult};
use crate::services::ServiceContext;

/// Result of a vehicle/owner verification.
#[derive(Debug, Clone, Serialize)]
pub struct Verification {
    pub valid: bool,
    pub vehicle: VehicleDetail,
}

/// Vehicle Service
pub struct VehicleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VehicleService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a vehicle. The owner must already exist.
    pub async fn register(&self, req: NewVehicle) -> BusinessResult<VehicleDetail> {
        req.validate()?;

        let owner = OwnerRepo::get_by_id(self.ctx.pool(), &req.owner_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    BusinessError::OwnerNotFound(req.owner_id.clone())
                } else {
                    e.into()
                }
            })?;

        let now = Utc::now();
        let row = VehicleRow {
            id: new_id(),
            mark: req.mark,
            model: req.model,
            registration: req.registration,
            year: req.year,
            color: req.color,
            is_stolen: req.is_stolen,
            owner_id: req.owner_id,
            created_at: now,
            updated_at: now,
        };
        VehicleRepo::insert(self.ctx.pool(), &row).await?;
        Ok(VehicleDetail {
            vehicle: row,
            owner,
        })
    }

    /// All vehicles with owners attached, newest first.
    pub async fn list(&self) -> BusinessResult<Vec<VehicleDetail>> {
        let rows = VehicleRepo::list(self.ctx.pool()).await?;
        self.attach_owners(rows).await
    }

    /// Substring search over mark/model/color/registration.
    pub async fn search(&self, filter: &VehicleSearch) -> BusinessResult<Vec<VehicleDetail>> {
        let rows = VehicleRepo::search(self.ctx.pool(), filter).await?;
        self.attach_owners(rows).await
    }

    /// Verify a vehicle against its claimed owner.
    ///
    /// Valid only when the registration exists locally, the recorded
    /// owner's JMBG matches, and the vehicle is not flagged stolen. An
    /// unknown registration is a NotFound error, not an invalid result.
    pub async fn verify(&self, req: &VehicleVerification) -> BusinessResult<Verification> {
        req.validate()?;

        let vehicle = VehicleRepo::get_by_registration(self.ctx.pool(), &req.registration)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    BusinessError::VehicleNotFound(req.registration.clone())
                } else {
                    e.into()
                }
            })?;
        let owner = OwnerRepo::get_by_id(self.ctx.pool(), &vehicle.owner_id).await?;

        let valid = owner.jmbg == req.jmbg && !vehicle.is_stolen;
        Ok(Verification {
            valid,
            vehicle: VehicleDetail { vehicle, owner },
        })
    }

    pub(crate) async fn detail(&self, vehicle: VehicleRow) -> BusinessResult<VehicleDetail> {
        let owner = OwnerRepo::get_by_id(self.ctx.pool(), &vehicle.owner_id).await?;
        Ok(VehicleDetail { vehicle, owner })
    }

    async fn attach_owners(&self, rows: Vec<VehicleRow>) -> BusinessResult<Vec<VehicleDetail>> {
        let mut details = Vec::with_capacity(rows.len());
        for row in rows {
            details.push(self.detail(row).await?);
        }
        Ok(details)
    }
}
