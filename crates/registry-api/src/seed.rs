//! Mock data generation
//!
//! Randomized owners, vehicles, drivers and transfers in the same shape
//! the real motor-vehicle authority would serve. Roughly one vehicle in
//! ten is flagged stolen; drivers start with 0-11 points and anyone at or
//! past the threshold begins suspended.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Administrator, Driver, Owner, Transfer, Vehicle};
use crate::store::{Records, SUSPENSION_THRESHOLD};

/// Password every seeded registry account authenticates with.
pub const SEED_PASSWORD: &str = "123";

const FIRST_NAMES: &[&str] = &[
    "Marko", "Jovan", "Ana", "Milica", "Petar", "Nikola", "Ivana", "Stefan", "Mina", "Luka",
];
const LAST_NAMES: &[&str] = &[
    "Markovic", "Jovanovic", "Petrovic", "Nikolic", "Ilic", "Savic", "Stojanovic", "Kovacevic",
];
const STREETS: &[&str] = &[
    "Bulevar Oslobodjenja", "Cara Dusana", "Zmaj Jovina", "Bulevar Evrope", "Narodnog Fronta",
    "Temerinska", "Kralja Petra",
];
const MARKS: &[&str] = &[
    "Audi", "BMW", "Volkswagen", "Skoda", "Opel", "Toyota", "Peugeot", "Renault",
];
const COLORS: &[&str] = &["Black", "White", "Gray", "Blue", "Red", "Silver"];
const REGISTRATIONS: &[&str] = &[
    "NS-123-AB", "NS-456-CD", "BG-111-AA", "BG-222-BB", "SU-777-ZZ", "NI-333-CC", "KG-999-DD",
    "ZR-101-EE", "PA-202-FF", "SM-303-GG",
];

fn models_for(mark: &str) -> &'static [&'static str] {
    match mark {
        "Audi" => &["A3", "A4", "A6"],
        "BMW" => &["320d", "X3", "X5"],
        "Volkswagen" => &["Golf", "Passat", "Polo"],
        "Skoda" => &["Octavia", "Fabia", "Superb"],
        "Opel" => &["Astra", "Corsa", "Insignia"],
        "Toyota" => &["Corolla", "Yaris", "RAV4"],
        "Peugeot" => &["208", "308", "3008"],
        _ => &["Clio", "Megane", "Kadjar"],
    }
}

/// Generate a full randomized record set.
pub fn generate() -> Records {
    let mut rng = rand::thread_rng();

    let owners: Vec<Owner> = (0..8usize)
        .map(|i| {
            let first = *FIRST_NAMES.choose(&mut rng).unwrap_or(&"Marko");
            let last = *LAST_NAMES.choose(&mut rng).unwrap_or(&"Markovic");
            Owner {
                id: format!("OWN-{}", i + 1),
                first_name: first.to_string(),
                last_name: last.to_string(),
                address: format!(
                    "{} {}",
                    STREETS.choose(&mut rng).unwrap_or(&"Cara Dusana"),
                    rng.gen_range(1..100)
                ),
                jmbg: format!(
                    "0{}0{}99{:05}{:02}",
                    rng.gen_range(1..10),
                    rng.gen_range(1..10),
                    rng.gen_range(0..100000),
                    i + 1
                ),
                email: format!("{}.{}{}@mail.com", first, last, i + 1).to_lowercase(),
            }
        })
        .collect();

    let vehicles: Vec<Vehicle> = (0..10usize)
        .map(|i| {
            let mark = *MARKS.choose(&mut rng).unwrap_or(&"Audi");
            let model = *models_for(mark).choose(&mut rng).unwrap_or(&"A4");
            Vehicle {
                id: format!("VEH-{}", i + 1),
                mark: mark.to_string(),
                model: model.to_string(),
                registration: REGISTRATIONS[i % REGISTRATIONS.len()].to_string(),
                year: 2008 + rng.gen_range(0..17),
                color: COLORS.choose(&mut rng).unwrap_or(&"Black").to_string(),
                is_stolen: rng.gen_range(0..10) == 0,
                owner: owners[rng.gen_range(0..owners.len())].clone(),
            }
        })
        .collect();

    let drivers: Vec<Driver> = (0..8usize)
        .map(|i| {
            let points = rng.gen_range(0..12);
            Driver {
                id: format!("DRV-{}", i + 1),
                is_suspended: points >= SUSPENSION_THRESHOLD,
                number_of_violation_points: points,
                picture: format!("driver{}.jpg", i + 1),
                owner: owners[i % owners.len()].clone(),
            }
        })
        .collect();

    let admins = vec![
        Administrator {
            id: "ADM-1".to_string(),
            first_name: "Admin".to_string(),
            last_name: "MUP".to_string(),
            email: "admin@mup.rs".to_string(),
            password: SEED_PASSWORD.to_string(),
        },
        Administrator {
            id: "ADM-2".to_string(),
            first_name: "Supervisor".to_string(),
            last_name: "MUP".to_string(),
            email: "supervisor@mup.rs".to_string(),
            password: SEED_PASSWORD.to_string(),
        },
    ];

    let transfers: Vec<Transfer> = (0..3usize)
        .map(|i| {
            let old_owner = owners[rng.gen_range(0..owners.len())].clone();
            let mut new_owner = owners[rng.gen_range(0..owners.len())].clone();
            while new_owner.id == old_owner.id {
                new_owner = owners[rng.gen_range(0..owners.len())].clone();
            }
            Transfer {
                id: format!("TRA-{}", i + 1),
                vehicle: vehicles[rng.gen_range(0..vehicles.len())].clone(),
                old_owner,
                new_owner,
                date_of_transfer: Utc::now() - Duration::days(rng.gen_range(28..360i64)),
            }
        })
        .collect();

    Records {
        owners,
        vehicles,
        drivers,
        transfers,
        admins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let records = generate();
        assert_eq!(records.owners.len(), 8);
        assert_eq!(records.vehicles.len(), 10);
        assert_eq!(records.drivers.len(), 8);
        assert_eq!(records.admins.len(), 2);
        assert_eq!(records.transfers.len(), 3);
    }

    #[test]
    fn test_seeded_suspension_matches_threshold() {
        let records = generate();
        for driver in &records.drivers {
            assert_eq!(
                driver.is_suspended,
                driver.number_of_violation_points >= SUSPENSION_THRESHOLD
            );
        }
    }

    #[test]
    fn test_transfers_never_self_transfer() {
        let records = generate();
        for t in &records.transfers {
            assert_ne!(t.old_owner.id, t.new_owner.id);
        }
    }
}
