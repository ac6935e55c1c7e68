//! Fixed reference rows for the lookup tables.

use rusqlite::{params, Transaction};
use serde::Serialize;

use super::Database;
use crate::error::Result;

pub const SPECIES: &[(i64, &str, &str, &str)] = &[
    (1, "Lion", "Savanna", "Carnivore"),
    (2, "Elephant", "Grassland", "Herbivore"),
    (3, "Penguin", "Polar", "Piscivore"),
    (4, "Giraffe", "Savanna", "Herbivore"),
];

pub const FOOD_TYPES: &[(i64, &str, &str, &str)] = &[
    (1, "Meat", "kg", "Refrigerated"),
    (2, "Hay", "kg", "Dry storage"),
    (3, "Fish", "kg", "Frozen"),
    (4, "Fruits", "kg", "Fresh produce"),
    (5, "Vegetables", "kg", "Fresh produce"),
];

pub const ROLES: &[(i64, &str, &str, &str)] = &[
    (1, "Zookeeper", "Animal Care", "Responsible for daily care of animals"),
    (2, "Veterinarian", "Medical", "Provides medical care to animals"),
    (3, "Manager", "Administration", "Oversees zoo operations"),
    (4, "Guide", "Education", "Conducts tours and educational programs"),
];

/// Rows actually inserted by one seeding pass. Zero everywhere on a re-run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub species: usize,
    pub food_types: usize,
    pub roles: usize,
}

impl Database {
    /// Insert the reference species, food types and roles, skipping any row
    /// whose id or unique name already exists.
    pub fn seed_lookups(&self) -> Result<SeedSummary> {
        self.transaction(|tx| {
            Ok(SeedSummary {
                species: insert_or_ignore(
                    tx,
                    "INSERT OR IGNORE INTO Species (speciesID, name, habitat, diet) VALUES (?1, ?2, ?3, ?4)",
                    SPECIES,
                )?,
                food_types: insert_or_ignore(
                    tx,
                    "INSERT OR IGNORE INTO FoodTypes (foodTypeID, name, unit, storage_requirements) VALUES (?1, ?2, ?3, ?4)",
                    FOOD_TYPES,
                )?,
                roles: insert_or_ignore(
                    tx,
                    "INSERT OR IGNORE INTO Roles (roleID, title, department, description) VALUES (?1, ?2, ?3, ?4)",
                    ROLES,
                )?,
            })
        })
    }
}

fn insert_or_ignore(
    tx: &Transaction<'_>,
    sql: &str,
    rows: &[(i64, &str, &str, &str)],
) -> Result<usize> {
    let mut stmt = tx.prepare(sql)?;
    let mut inserted = 0;
    for (id, a, b, c) in rows {
        inserted += stmt.execute(params![id, a, b, c])?;
    }
    Ok(inserted)
}
