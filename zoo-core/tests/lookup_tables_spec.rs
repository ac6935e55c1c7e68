use speculate2::speculate;

speculate! {
    use tempfile::TempDir;
    use zoo_core::models::*;
    use zoo_core::Database;

    fn setup_db() -> (TempDir, Database) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db = Database::open(dir.path().join("zoo.db")).expect("Failed to open database");
        db.migrate().expect("Failed to create schema");
        (dir, db)
    }

    fn species_input(name: &str, habitat: &str, diet: &str) -> CreateSpeciesInput {
        CreateSpeciesInput {
            name: name.into(),
            habitat: habitat.into(),
            diet: diet.into(),
        }
    }

    describe "species" {
        it "walks the full lifecycle" {
            let (_dir, db) = setup_db();

            let id = db.create_species(species_input("Lion", "Savanna", "Carnivore")).unwrap();
            assert_eq!(id, 1);

            let species = db.get_species(id).unwrap().unwrap();
            assert_eq!(species, Species {
                id: 1,
                name: "Lion".into(),
                habitat: "Savanna".into(),
                diet: "Carnivore".into(),
            });

            let updated = db.update_species(id, UpdateSpeciesInput {
                name: Some("African Lion".into()),
                habitat: Some("African Savanna".into()),
                diet: Some("Apex Predator".into()),
            }).unwrap();
            assert!(updated);

            let species = db.get_species(id).unwrap().unwrap();
            assert_eq!(species.name, "African Lion");
            assert_eq!(species.habitat, "African Savanna");
            assert_eq!(species.diet, "Apex Predator");

            assert_eq!(db.get_all_species().unwrap().len(), 1);

            assert!(db.delete_species(id).unwrap());
            assert!(db.get_species(id).unwrap().is_none());
        }

        it "keeps fields that an update leaves out" {
            let (_dir, db) = setup_db();
            let id = db.create_species(species_input("Lion", "Savanna", "Carnivore")).unwrap();

            db.update_species(id, UpdateSpeciesInput {
                diet: Some("Apex Predator".into()),
                ..Default::default()
            }).unwrap();

            let species = db.get_species(id).unwrap().unwrap();
            assert_eq!(species.name, "Lion");
            assert_eq!(species.habitat, "Savanna");
            assert_eq!(species.diet, "Apex Predator");
        }

        it "reports false for a missing id" {
            let (_dir, db) = setup_db();
            db.create_species(species_input("Lion", "Savanna", "Carnivore")).unwrap();

            assert!(db.get_species(99).unwrap().is_none());
            assert!(!db.update_species(99, UpdateSpeciesInput {
                name: Some("Ghost".into()),
                ..Default::default()
            }).unwrap());
            assert!(!db.delete_species(99).unwrap());
            assert_eq!(db.get_all_species().unwrap().len(), 1);
        }

        it "lists every row in id order" {
            let (_dir, db) = setup_db();
            assert!(db.get_all_species().unwrap().is_empty());

            db.create_species(species_input("Lion", "Savanna", "Carnivore")).unwrap();
            db.create_species(species_input("Elephant", "Grassland", "Herbivore")).unwrap();
            db.create_species(species_input("Penguin", "Polar", "Piscivore")).unwrap();

            let names: Vec<_> = db.get_all_species().unwrap().into_iter().map(|s| s.name).collect();
            assert_eq!(names, ["Lion", "Elephant", "Penguin"]);
        }

        it "rejects a duplicate name" {
            let (_dir, db) = setup_db();
            db.create_species(species_input("Lion", "Savanna", "Carnivore")).unwrap();

            let err = db.create_species(species_input("Lion", "Zoo", "Carnivore")).unwrap_err();
            assert!(err.is_constraint_violation());
        }
    }

    describe "food types" {
        it "walks the full lifecycle" {
            let (_dir, db) = setup_db();

            let id = db.create_food_type(CreateFoodTypeInput {
                name: "Meat".into(),
                unit: "kg".into(),
                storage_requirements: Some("Refrigerated".into()),
            }).unwrap();

            let food = db.get_food_type(id).unwrap().unwrap();
            assert_eq!(food.name, "Meat");
            assert_eq!(food.unit, "kg");
            assert_eq!(food.storage_requirements.as_deref(), Some("Refrigerated"));

            assert!(db.update_food_type(id, UpdateFoodTypeInput {
                name: Some("Fresh Meat".into()),
                unit: Some("lbs".into()),
                storage_requirements: Some("Frozen".into()),
            }).unwrap());

            let food = db.get_food_type(id).unwrap().unwrap();
            assert_eq!(food.name, "Fresh Meat");
            assert_eq!(food.unit, "lbs");
            assert_eq!(food.storage_requirements.as_deref(), Some("Frozen"));

            assert_eq!(db.get_all_food_types().unwrap().len(), 1);
            assert!(db.delete_food_type(id).unwrap());
            assert!(db.get_food_type(id).unwrap().is_none());
            assert!(!db.delete_food_type(id).unwrap());
        }

        it "stores no storage requirements when none are given" {
            let (_dir, db) = setup_db();
            let id = db.create_food_type(CreateFoodTypeInput {
                name: "Hay".into(),
                unit: "bale".into(),
                storage_requirements: None,
            }).unwrap();

            assert_eq!(db.get_food_type(id).unwrap().unwrap().storage_requirements, None);
        }

        it "keeps storage requirements when an update omits them" {
            let (_dir, db) = setup_db();
            let id = db.create_food_type(CreateFoodTypeInput {
                name: "Fish".into(),
                unit: "kg".into(),
                storage_requirements: Some("Frozen".into()),
            }).unwrap();

            db.update_food_type(id, UpdateFoodTypeInput {
                unit: Some("crate".into()),
                ..Default::default()
            }).unwrap();

            let food = db.get_food_type(id).unwrap().unwrap();
            assert_eq!(food.name, "Fish");
            assert_eq!(food.unit, "crate");
            assert_eq!(food.storage_requirements.as_deref(), Some("Frozen"));
        }
    }

    describe "roles" {
        it "walks the full lifecycle" {
            let (_dir, db) = setup_db();

            let id = db.create_role(CreateRoleInput {
                title: "Zookeeper".into(),
                department: "Animal Care".into(),
                description: Some("Responsible for animal feeding".into()),
            }).unwrap();

            let role = db.get_role(id).unwrap().unwrap();
            assert_eq!(role.title, "Zookeeper");
            assert_eq!(role.department, "Animal Care");

            assert!(db.update_role(id, UpdateRoleInput {
                title: Some("Senior Zookeeper".into()),
                department: Some("Animal Management".into()),
                description: Some("Advanced animal care".into()),
            }).unwrap());

            let role = db.get_role(id).unwrap().unwrap();
            assert_eq!(role.title, "Senior Zookeeper");
            assert_eq!(role.department, "Animal Management");
            assert_eq!(role.description.as_deref(), Some("Advanced animal care"));

            assert_eq!(db.get_all_roles().unwrap().len(), 1);
            assert!(db.delete_role(id).unwrap());
            assert!(db.get_role(id).unwrap().is_none());
        }

        it "keeps the description when an update omits it" {
            let (_dir, db) = setup_db();
            let id = db.create_role(CreateRoleInput {
                title: "Guide".into(),
                department: "Education".into(),
                description: Some("Conducts tours".into()),
            }).unwrap();

            db.update_role(id, UpdateRoleInput {
                department: Some("Visitor Services".into()),
                ..Default::default()
            }).unwrap();

            let role = db.get_role(id).unwrap().unwrap();
            assert_eq!(role.title, "Guide");
            assert_eq!(role.department, "Visitor Services");
            assert_eq!(role.description.as_deref(), Some("Conducts tours"));
        }

        it "reports false for a missing id" {
            let (_dir, db) = setup_db();
            assert!(!db.update_role(7, UpdateRoleInput::default()).unwrap());
            assert!(!db.delete_role(7).unwrap());
        }
    }
}
