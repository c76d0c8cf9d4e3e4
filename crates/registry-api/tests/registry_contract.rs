//! End-to-end tests of the registry stub through its real router,
//! consumed with the same client crate the traffic service uses.

use std::sync::Arc;

use patrol_registry_api::model::{Driver, Owner, Vehicle};
use patrol_registry_api::{router, Records, RegistryStore};
use patrol_registry_client::RegistryClient;

fn owner(n: u32) -> Owner {
    Owner {
        id: format!("OWN-{n}"),
        first_name: "Ana".to_string(),
        last_name: "Petrovic".to_string(),
        address: "Zmaj Jovina 5".to_string(),
        jmbg: format!("02029950012{n}"),
        email: format!("ana{n}@mail.com"),
    }
}

fn records() -> Records {
    Records {
        owners: vec![owner(1), owner(2)],
        vehicles: vec![Vehicle {
            id: "VEH-1".to_string(),
            mark: "Toyota".to_string(),
            model: "Corolla".to_string(),
            registration: "BG-111-AA".to_string(),
            year: 2020,
            color: "White".to_string(),
            is_stolen: true,
            owner: owner(1),
        }],
        drivers: vec![Driver {
            id: "DRV-1".to_string(),
            is_suspended: false,
            number_of_violation_points: 8,
            picture: String::new(),
            owner: owner(2),
        }],
        transfers: vec![],
        admins: vec![],
    }
}

async fn spawn_registry(records: Records) -> RegistryClient {
    let app = router(Arc::new(RegistryStore::new(records)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    RegistryClient::with_default_timeout(format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn test_vehicle_lookup_round_trip() {
    let client = spawn_registry(records()).await;

    let found = client.vehicle_by_registration("BG-111-AA").await.unwrap();
    let vehicle = found.body.expect("vehicle body");
    assert!(vehicle.is_stolen);
    assert_eq!(vehicle.owner.id, "OWN-1");

    let missing = client.vehicle_by_registration("XX-000-XX").await.unwrap();
    assert!(missing.is_not_found());
}

#[tokio::test]
async fn test_vehicle_lookup_by_owner_jmbg() {
    let client = spawn_registry(records()).await;

    let found = client.vehicle_by_owner_jmbg("020299500121").await.unwrap();
    assert_eq!(found.body.expect("vehicle body").registration, "BG-111-AA");
}

#[tokio::test]
async fn test_point_patch_suspends_at_threshold() {
    let client = spawn_registry(records()).await;

    let updated = client.add_driver_points("DRV-1", 3).await.unwrap();
    let driver = updated.body.expect("driver body");
    assert_eq!(driver.number_of_violation_points, 11);
    assert!(driver.is_suspended);
}

#[tokio::test]
async fn test_point_patch_unknown_driver_is_404() {
    let client = spawn_registry(records()).await;

    let resp = client.add_driver_points("DRV-42", 1).await.unwrap();
    assert!(resp.is_not_found());
    assert!(resp.body.is_none());
}

#[tokio::test]
async fn test_driver_lookup_by_email() {
    let client = spawn_registry(records()).await;

    let resp = client.driver_by_email("ana2@mail.com").await.unwrap();
    assert_eq!(resp.body.expect("driver body").id, "DRV-1");
}
