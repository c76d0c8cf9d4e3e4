//! Owner registration and lookup

use chrono::Utc;
use patrol_core::{new_id, NewOwner};
use patrol_persistence::{OwnerRepo, OwnerRow};

use crate::error::{BusinessError, BusinessResult};
use crate::services::ServiceContext;

/// Owner Service
pub struct OwnerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OwnerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register an owner. JMBG uniqueness is enforced by the store.
    pub async fn register(&self, req: NewOwner) -> BusinessResult<OwnerRow> {
        req.validate()?;

        let now = Utc::now();
        let row = OwnerRow {
            id: new_id(),
            first_name: req.first_name,
            last_name: req.last_name,
            address: req.address,
            jmbg: req.jmbg,
            email: req.email,
            created_at: now,
            updated_at: now,
        };
        OwnerRepo::insert(self.ctx.pool(), &row).await?;
        Ok(row)
    }

    /// All owners, newest first.
    pub async fn list(&self) -> BusinessResult<Vec<OwnerRow>> {
        Ok(OwnerRepo::list(self.ctx.pool()).await?)
    }

    pub async fn get(&self, id: &str) -> BusinessResult<OwnerRow> {
        OwnerRepo::get_by_id(self.ctx.pool(), id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    BusinessError::OwnerNotFound(id.to_string())
                } else {
                    e.into()
                }
            })
    }
}
