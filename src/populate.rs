//! Demonstration dataset spanning every entity.
//!
//! Names are distinct from the seeded lookup rows so the dataset loads into a
//! freshly initialized database without tripping UNIQUE constraints.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use zoo_core::models::*;
use zoo_core::Database;

/// Ids assigned to the rows created by [`populate`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PopulateSummary {
    pub species: Vec<i64>,
    pub animals: Vec<i64>,
    pub food_types: Vec<i64>,
    pub food_inventory: Vec<i64>,
    pub roles: Vec<i64>,
    pub staff: Vec<i64>,
    pub feedings: Vec<i64>,
}

/// Initialize the database at `path` without resetting it, then insert the
/// demonstration dataset, printing one line per created row.
pub fn populate(path: impl AsRef<Path>) -> Result<PopulateSummary> {
    let db = Database::initialize(path.as_ref(), false)
        .with_context(|| format!("failed to initialize {}", path.as_ref().display()))?;
    println!("Database initialized successfully!");

    let summary = insert_demo_data(&db)?;
    println!("\n--- Database Population Complete ---");
    Ok(summary)
}

fn insert_demo_data(db: &Database) -> Result<PopulateSummary> {
    let mut summary = PopulateSummary::default();

    for (name, habitat, diet) in [
        ("African Lion", "Savanna", "Carnivore"),
        ("African Elephant", "Grassland", "Herbivore"),
        ("Emperor Penguin", "Antarctic", "Piscivore"),
        ("Reticulated Giraffe", "Savanna", "Herbivore"),
    ] {
        let id = db
            .create_species(CreateSpeciesInput {
                name: name.into(),
                habitat: habitat.into(),
                diet: diet.into(),
            })
            .with_context(|| format!("failed to create species {name}"))?;
        println!("Created Species: {name} (ID: {id})");
        summary.species.push(id);
    }

    let species = &summary.species;
    let animals = [
        ("Simba", species[0], Gender::Male, date(2015, 3, 15), "Healthy"),
        ("Nala", species[0], Gender::Female, date(2016, 5, 20), "Healthy"),
        ("Dumbo", species[1], Gender::Male, date(2010, 7, 10), "Good"),
        ("Tux", species[2], Gender::Male, date(2018, 12, 1), "Active"),
        ("Patches", species[3], Gender::Female, date(2017, 9, 25), "Good"),
    ];
    for (name, species_id, gender, birthdate, health_status) in animals {
        let id = db
            .create_animal(CreateAnimalInput {
                name: name.into(),
                species_id,
                gender: Some(gender),
                birthdate,
                health_status: Some(health_status.into()),
            })
            .with_context(|| format!("failed to create animal {name}"))?;
        println!("Created Animal: {name} (ID: {id})");
        summary.animals.push(id);
    }

    for (name, unit, storage) in [
        ("Raw Meat", "kg", "Refrigerated"),
        ("Timothy Hay", "kg", "Dry storage"),
        ("Frozen Fish", "kg", "Freezer"),
        ("Mixed Fruits", "kg", "Refrigerated"),
    ] {
        let id = db
            .create_food_type(CreateFoodTypeInput {
                name: name.into(),
                unit: unit.into(),
                storage_requirements: Some(storage.into()),
            })
            .with_context(|| format!("failed to create food type {name}"))?;
        println!("Created Food Type: {name} (ID: {id})");
        summary.food_types.push(id);
    }

    let food = &summary.food_types;
    let stock = [
        (food[0], 500.0, date(2024, 12, 31)),
        (food[1], 1000.0, date(2024, 11, 15)),
        (food[2], 250.0, date(2024, 10, 30)),
        (food[3], 300.0, date(2024, 9, 15)),
    ];
    for (food_type_id, quantity, expiration_date) in stock {
        let id = db
            .create_food_inventory(CreateFoodInventoryInput {
                food_type_id,
                quantity,
                expiration_date,
            })
            .with_context(|| format!("failed to stock food type {food_type_id}"))?;
        println!("Created Food Inventory: Type ID {food_type_id} (Inventory ID: {id})");
        summary.food_inventory.push(id);
    }

    for (title, department, description) in [
        ("Senior Zookeeper", "Animal Care", "Responsible for daily animal care"),
        ("Wildlife Veterinarian", "Medical", "Provides medical care"),
        ("Zoo Manager", "Administration", "Oversees zoo operations"),
    ] {
        let id = db
            .create_role(CreateRoleInput {
                title: title.into(),
                department: department.into(),
                description: Some(description.into()),
            })
            .with_context(|| format!("failed to create role {title}"))?;
        println!("Created Role: {title} (ID: {id})");
        summary.roles.push(id);
    }

    let roles = &summary.roles;
    let staff = [
        ("John", "Smith", roles[0], "USA", 50000.0),
        ("Maria", "Garcia", roles[1], "Spain", 75000.0),
        ("Alex", "Wong", roles[2], "Canada", 90000.0),
    ];
    for (first_name, last_name, role_id, country, salary) in staff {
        let id = db
            .create_staff(CreateStaffInput {
                first_name: first_name.into(),
                last_name: last_name.into(),
                role_id,
                country: country.into(),
                salary,
                hire_date: None,
            })
            .with_context(|| format!("failed to create staff member {first_name} {last_name}"))?;
        println!("Created Staff: {first_name} {last_name} (ID: {id})");
        summary.staff.push(id);
    }

    let (animals, staff) = (&summary.animals, &summary.staff);
    let feedings = [
        (animals[0], food[0], staff[0], 10.5, "Morning feeding"),
        (animals[2], food[1], staff[0], 25.0, "Midday feeding"),
        (animals[3], food[2], staff[1], 5.2, "Fish diet"),
    ];
    for (animal_id, food_type_id, staff_id, quantity, notes) in feedings {
        let id = db
            .create_feeding(CreateFeedingInput {
                animal_id,
                food_type_id,
                staff_id,
                quantity,
                notes: Some(notes.into()),
                feeding_date: None,
            })
            .with_context(|| format!("failed to record feeding for animal {animal_id}"))?;
        println!("Created Feeding Record: Animal ID {animal_id} (Feeding ID: {id})");
        summary.feedings.push(id);
    }

    tracing::info!(
        species = summary.species.len(),
        animals = summary.animals.len(),
        feedings = summary.feedings.len(),
        "Demonstration data loaded"
    );
    Ok(summary)
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
