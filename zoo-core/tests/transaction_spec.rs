use speculate2::speculate;

speculate! {
    use rusqlite::params;
    use tempfile::TempDir;
    use zoo_core::models::*;
    use zoo_core::{Database, Error};

    fn setup_db() -> (TempDir, Database) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db = Database::open(dir.path().join("zoo.db")).expect("Failed to open database");
        db.migrate().expect("Failed to create schema");
        (dir, db)
    }

    fn lion(db: &Database) -> i64 {
        db.create_species(CreateSpeciesInput {
            name: "Lion".into(),
            habitat: "Savanna".into(),
            diet: "Carnivore".into(),
        })
        .expect("Failed to create species")
    }

    describe "transaction" {
        it "commits when the closure succeeds" {
            let (_dir, db) = setup_db();

            let id = db.transaction(|tx| {
                tx.execute(
                    "INSERT INTO Species (name, habitat, diet) VALUES (?1, ?2, ?3)",
                    params!["Tiger", "Jungle", "Carnivore"],
                )?;
                Ok(tx.last_insert_rowid())
            }).unwrap();

            assert_eq!(db.get_species(id).unwrap().unwrap().name, "Tiger");
        }

        it "discards every statement when a later one fails" {
            let (_dir, db) = setup_db();

            let result = db.transaction(|tx| {
                tx.execute(
                    "INSERT INTO Species (name, habitat, diet) VALUES (?1, ?2, ?3)",
                    params!["Tiger", "Jungle", "Carnivore"],
                )?;
                // Duplicate name violates UNIQUE.
                tx.execute(
                    "INSERT INTO Species (name, habitat, diet) VALUES (?1, ?2, ?3)",
                    params!["Tiger", "Swamp", "Carnivore"],
                )?;
                Ok(())
            });

            let err = result.unwrap_err();
            assert!(err.is_constraint_violation());
            assert!(db.get_all_species().unwrap().is_empty());
        }

        it "rolls back when the closure returns its own error" {
            let (_dir, db) = setup_db();

            let result: Result<(), Error> = db.transaction(|tx| {
                tx.execute(
                    "INSERT INTO Roles (title, department) VALUES (?1, ?2)",
                    params!["Keeper", "Animal Care"],
                )?;
                Err(Error::from(rusqlite::Error::QueryReturnedNoRows))
            });

            assert!(matches!(result, Err(Error::Sqlite(rusqlite::Error::QueryReturnedNoRows))));
            assert!(db.get_all_roles().unwrap().is_empty());
        }

        it "leaves the database usable after a rollback" {
            let (_dir, db) = setup_db();
            lion(&db);

            let duplicate = db.create_species(CreateSpeciesInput {
                name: "Lion".into(),
                habitat: "Zoo".into(),
                diet: "Carnivore".into(),
            });
            assert!(duplicate.unwrap_err().is_constraint_violation());

            let elephant = db.create_species(CreateSpeciesInput {
                name: "Elephant".into(),
                habitat: "Grassland".into(),
                diet: "Herbivore".into(),
            }).unwrap();
            assert_eq!(db.get_all_species().unwrap().len(), 2);
            assert!(db.get_species(elephant).unwrap().is_some());
        }
    }

    describe "check constraints" {
        it "rejects a non-positive salary" {
            let (_dir, db) = setup_db();
            let role_id = db.create_role(CreateRoleInput {
                title: "Zookeeper".into(),
                department: "Animal Care".into(),
                description: None,
            }).unwrap();

            let err = db.create_staff(CreateStaffInput {
                first_name: "John".into(),
                last_name: "Doe".into(),
                role_id,
                country: "USA".into(),
                salary: 0.0,
                hire_date: None,
            }).unwrap_err();

            assert!(err.is_constraint_violation());
            assert!(db.get_all_staff().unwrap().is_empty());
        }

        it "rejects negative stock" {
            let (_dir, db) = setup_db();
            let meat = db.create_food_type(CreateFoodTypeInput {
                name: "Meat".into(),
                unit: "kg".into(),
                storage_requirements: None,
            }).unwrap();

            let err = db.create_food_inventory(CreateFoodInventoryInput {
                food_type_id: meat,
                quantity: -1.0,
                expiration_date: None,
            }).unwrap_err();

            assert!(err.is_constraint_violation());
        }

        it "rejects an unknown gender written directly" {
            let (_dir, db) = setup_db();
            let species_id = lion(&db);

            let result = db.transaction(|tx| {
                tx.execute(
                    "INSERT INTO Animals (name, speciesID, gender) VALUES (?1, ?2, ?3)",
                    params!["Leo", species_id, "Other"],
                )?;
                Ok(())
            });

            assert!(result.unwrap_err().is_constraint_violation());
        }
    }

    describe "foreign keys" {
        it "rejects a row pointing at a missing parent" {
            let (_dir, db) = setup_db();

            let err = db.create_animal(CreateAnimalInput {
                name: "Ghost".into(),
                species_id: 42,
                gender: None,
                birthdate: None,
                health_status: None,
            }).unwrap_err();

            assert!(err.is_constraint_violation());
            assert!(db.get_all_animals().unwrap().is_empty());
        }

        it "refuses to delete a referenced lookup row" {
            let (_dir, db) = setup_db();
            let species_id = lion(&db);
            db.create_animal(CreateAnimalInput {
                name: "Leo".into(),
                species_id,
                gender: None,
                birthdate: None,
                health_status: None,
            }).unwrap();

            let err = db.delete_species(species_id).unwrap_err();
            assert!(err.is_constraint_violation());
            assert!(db.get_species(species_id).unwrap().is_some());
        }

        it "rejects an update that points at a missing parent and keeps the row" {
            let (_dir, db) = setup_db();
            let species_id = lion(&db);
            let animal_id = db.create_animal(CreateAnimalInput {
                name: "Leo".into(),
                species_id,
                gender: None,
                birthdate: None,
                health_status: None,
            }).unwrap();

            let err = db.update_animal(animal_id, UpdateAnimalInput {
                name: Some("Renamed".into()),
                species_id: Some(999),
                ..Default::default()
            }).unwrap_err();
            assert!(err.is_constraint_violation());

            let animal = db.get_animal(animal_id).unwrap().unwrap();
            assert_eq!(animal.name, "Leo");
            assert_eq!(animal.species_id, species_id);
        }

        it "allows deleting a lookup row once nothing references it" {
            let (_dir, db) = setup_db();
            let species_id = lion(&db);
            let animal_id = db.create_animal(CreateAnimalInput {
                name: "Leo".into(),
                species_id,
                gender: None,
                birthdate: None,
                health_status: None,
            }).unwrap();

            assert!(db.delete_animal(animal_id).unwrap());
            assert!(db.delete_species(species_id).unwrap());
        }
    }
}
