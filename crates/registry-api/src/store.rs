//! In-memory registry store
//!
//! The record set is owned by one `RegistryStore` passed explicitly to
//! the handlers and guarded by an RwLock - axum serves requests
//! concurrently, so unguarded mutation of the record vectors would race.

use tokio::sync::RwLock;

use crate::model::{Administrator, Driver, Owner, Transfer, Vehicle};
use crate::seed;

/// Point count at which a driver is automatically suspended.
pub const SUSPENSION_THRESHOLD: i32 = 10;

/// The registry's full record set.
#[derive(Debug, Clone, Default)]
pub struct Records {
    pub owners: Vec<Owner>,
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<Driver>,
    pub transfers: Vec<Transfer>,
    pub admins: Vec<Administrator>,
}

/// Mutex-guarded registry state.
#[derive(Debug)]
pub struct RegistryStore {
    inner: RwLock<Records>,
}

impl RegistryStore {
    pub fn new(records: Records) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }

    /// A store populated with randomized mock data.
    pub fn seeded() -> Self {
        Self::new(seed::generate())
    }

    pub async fn owners(&self) -> Vec<Owner> {
        self.inner.read().await.owners.clone()
    }

    pub async fn vehicles(&self) -> Vec<Vehicle> {
        self.inner.read().await.vehicles.clone()
    }

    pub async fn drivers(&self) -> Vec<Driver> {
        self.inner.read().await.drivers.clone()
    }

    pub async fn transfers(&self) -> Vec<Transfer> {
        self.inner.read().await.transfers.clone()
    }

    pub async fn admins(&self) -> Vec<Administrator> {
        self.inner.read().await.admins.clone()
    }

    pub async fn vehicle_by_registration(&self, registration: &str) -> Option<Vehicle> {
        self.inner
            .read()
            .await
            .vehicles
            .iter()
            .find(|v| v.registration == registration)
            .cloned()
    }

    pub async fn vehicle_by_owner_jmbg(&self, jmbg: &str) -> Option<Vehicle> {
        self.inner
            .read()
            .await
            .vehicles
            .iter()
            .find(|v| v.owner.jmbg == jmbg)
            .cloned()
    }

    pub async fn driver_by_id(&self, id: &str) -> Option<Driver> {
        self.inner
            .read()
            .await
            .drivers
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    pub async fn driver_by_email(&self, email: &str) -> Option<Driver> {
        self.inner
            .read()
            .await
            .drivers
            .iter()
            .find(|d| d.owner.email == email)
            .cloned()
    }

    /// Apply a point delta to a driver.
    ///
    /// The counter never goes below zero, and reaching the suspension
    /// threshold flips the driver's suspension flag.
    pub async fn apply_points(&self, id: &str, delta: i32) -> Option<Driver> {
        let mut records = self.inner.write().await;
        let driver = records.drivers.iter_mut().find(|d| d.id == id)?;

        driver.number_of_violation_points += delta;
        if driver.number_of_violation_points < 0 {
            driver.number_of_violation_points = 0;
        }
        if driver.number_of_violation_points >= SUSPENSION_THRESHOLD {
            driver.is_suspended = true;
        }

        Some(driver.clone())
    }

    /// Set a driver's suspension flag directly.
    pub async fn set_suspended(&self, id: &str, suspended: bool) -> Option<Driver> {
        let mut records = self.inner.write().await;
        let driver = records.drivers.iter_mut().find(|d| d.id == id)?;
        driver.is_suspended = suspended;
        Some(driver.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(n: u32) -> Owner {
        Owner {
            id: format!("OWN-{n}"),
            first_name: "Marko".to_string(),
            last_name: "Markovic".to_string(),
            address: "Cara Dusana 1".to_string(),
            jmbg: format!("01019905000{n:02}"),
            email: format!("marko{n}@mail.com"),
        }
    }

    fn driver(n: u32, points: i32) -> Driver {
        Driver {
            id: format!("DRV-{n}"),
            is_suspended: points >= SUSPENSION_THRESHOLD,
            number_of_violation_points: points,
            picture: String::new(),
            owner: owner(n),
        }
    }

    fn store() -> RegistryStore {
        RegistryStore::new(Records {
            drivers: vec![driver(1, 2), driver(2, 8)],
            vehicles: vec![Vehicle {
                id: "VEH-1".to_string(),
                mark: "Audi".to_string(),
                model: "A4".to_string(),
                registration: "NS-123-AB".to_string(),
                year: 2018,
                color: "Black".to_string(),
                is_stolen: false,
                owner: owner(1),
            }],
            ..Records::default()
        })
    }

    #[tokio::test]
    async fn test_lookup_by_registration_and_jmbg() {
        let store = store();
        assert!(store.vehicle_by_registration("NS-123-AB").await.is_some());
        assert!(store.vehicle_by_registration("XX-000-XX").await.is_none());

        let by_jmbg = store.vehicle_by_owner_jmbg("0101990500001").await.unwrap();
        assert_eq!(by_jmbg.registration, "NS-123-AB");
    }

    #[tokio::test]
    async fn test_points_clamp_at_zero() {
        let store = store();
        let updated = store.apply_points("DRV-1", -5).await.unwrap();
        assert_eq!(updated.number_of_violation_points, 0);
        assert!(!updated.is_suspended);
    }

    #[tokio::test]
    async fn test_threshold_suspends_driver() {
        let store = store();
        let updated = store.apply_points("DRV-2", 3).await.unwrap();
        assert_eq!(updated.number_of_violation_points, 11);
        assert!(updated.is_suspended);
    }

    #[tokio::test]
    async fn test_unknown_driver_yields_none() {
        let store = store();
        assert!(store.apply_points("DRV-99", 1).await.is_none());
        assert!(store.set_suspended("DRV-99", true).await.is_none());
    }

    #[tokio::test]
    async fn test_suspend_toggle_round_trip() {
        let store = store();
        let suspended = store.set_suspended("DRV-1", true).await.unwrap();
        assert!(suspended.is_suspended);
        let restored = store.set_suspended("DRV-1", false).await.unwrap();
        assert!(!restored.is_suspended);
    }

    #[tokio::test]
    async fn test_driver_lookup_by_owner_email() {
        let store = store();
        let found = store.driver_by_email("marko2@mail.com").await.unwrap();
        assert_eq!(found.id, "DRV-2");
    }
}
