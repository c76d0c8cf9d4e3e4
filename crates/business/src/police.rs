//! Police person management
//!
//! Registration stores a bcrypt hash of the credentials; suspension is a
//! toggle and rank changes walk the LOW/MEDIUM/HIGH ladder one step at a
//! time.

use chrono::Utc;
use patrol_core::{new_id, CoreError, NewPolicePerson, Rank};
use patrol_persistence::{PoliceRepo, PoliceRow};

use crate::error::{BusinessError, BusinessResult};
use crate::services::ServiceContext;

/// Police Service
pub struct PoliceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PoliceService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a police person with hashed credentials.
    pub async fn register(&self, req: NewPolicePerson) -> BusinessResult<PoliceRow> {
        if req.email.is_empty() || req.password.is_empty() {
            return Err(CoreError::validation("email and password are required").into());
        }

        let hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)?;
        let now = Utc::now();
        let row = PoliceRow {
            id: new_id(),
            first_name: req.first_name,
            last_name: req.last_name,
            rank: req.rank.as_str().to_string(),
            is_suspended: false,
            email: req.email,
            password: hash,
            created_at: now,
            updated_at: now,
        };
        PoliceRepo::insert(self.ctx.pool(), &row).await?;
        Ok(row)
    }

    /// All police persons, newest first.
    pub async fn list(&self) -> BusinessResult<Vec<PoliceRow>> {
        Ok(PoliceRepo::list(self.ctx.pool()).await?)
    }

    pub async fn get(&self, id: &str) -> BusinessResult<PoliceRow> {
        PoliceRepo::get_by_id(self.ctx.pool(), id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    BusinessError::PoliceNotFound(id.to_string())
                } else {
                    e.into()
                }
            })
    }

    /// Flip the suspension flag.
    pub async fn toggle_suspend(&self, id: &str) -> BusinessResult<PoliceRow> {
        let mut officer = self.get(id).await?;
        officer.is_suspended = !officer.is_suspended;
        PoliceRepo::update_profile(
            self.ctx.pool(),
            &officer.id,
            &officer.rank,
            officer.is_suspended,
        )
        .await?;
        Ok(officer)
    }

    /// Move one step along the rank ladder.
    pub async fn change_rank(&self, id: &str, upgrade: bool) -> BusinessResult<PoliceRow> {
        let mut officer = self.get(id).await?;
        let rank = Rank::from_str(&officer.rank)?;

        let next = if upgrade {
            rank.promoted().ok_or(BusinessError::AlreadyMaxRank)?
        } else {
            rank.demoted().ok_or(BusinessError::AlreadyMinRank)?
        };

        officer.rank = next.as_str().to_string();
        PoliceRepo::update_profile(
            self.ctx.pool(),
            &officer.id,
            &officer.rank,
            officer.is_suspended,
        )
        .await?;
        Ok(officer)
    }
}
