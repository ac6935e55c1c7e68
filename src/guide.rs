//! Static overview of the schema and the record-access API.

const GUIDE: &str = r#"
Zoo Management System
=====================

CRUD (create, read, update, delete) access to a zoo's operational records,
stored in a single SQLite file. Every operation runs in its own transaction:
it either commits completely or leaves the database untouched.

DATABASE STRUCTURE
------------------

1. Species        speciesID, name (unique), habitat, diet
2. Animals        animalID, name, speciesID -> Species, gender (Male/Female),
                  birthdate, health_status (default "Good")
3. FoodTypes      foodTypeID, name (unique), unit, storage_requirements
4. FoodInventory  inventoryID, foodTypeID -> FoodTypes, quantity (>= 0),
                  expiration_date, last_updated (stamped on every write)
5. Roles          roleID, title (unique), department, description
6. Staff          staffID, firstName, lastName, roleID -> Roles, country,
                  hire_date (default today), salary (> 0)
7. Feeding        feedingID, animalID -> Animals, foodTypeID -> FoodTypes,
                  staffID -> Staff, feeding_date (default now),
                  quantity (> 0), notes
8. AnimalCare     careID, animalID -> Animals, staffID -> Staff, care_date,
                  care_type, notes

Foreign keys are enforced: a species, food type, role, animal or staff member
cannot be deleted while other rows still reference it.

RECORD ACCESS (zoo_core::Database)
----------------------------------

  Species        create_species, get_species, get_all_species,
                 update_species, delete_species
  Animals        create_animal, get_animal, get_all_animals,
                 update_animal, delete_animal
  FoodTypes      create_food_type, get_food_type, get_all_food_types,
                 update_food_type, delete_food_type
  FoodInventory  create_food_inventory, get_food_inventory,
                 get_all_food_inventory, update_food_inventory,
                 delete_food_inventory
  Roles          create_role, get_role, get_all_roles,
                 update_role, delete_role
  Staff          create_staff, get_staff, get_all_staff,
                 update_staff, delete_staff
  Feeding        create_feeding, get_feeding, get_all_feedings,
                 update_feeding, delete_feeding

  create_*  takes a Create*Input and returns the new id
  get_*     returns Some(record) or None
  get_all_* returns every record, ordered by id
  update_*  takes an Update*Input; fields left as None keep their stored
            value. Returns false when the id does not exist
  delete_*  returns false when the id does not exist

USAGE
-----

  let db = Database::initialize("zoo.db", false)?;

  let tiger = db.create_species(CreateSpeciesInput {
      name: "Tiger".into(),
      habitat: "Asian Forests".into(),
      diet: "Carnivore".into(),
  })?;

  let simba = db.create_animal(CreateAnimalInput {
      name: "Simba".into(),
      species_id: tiger,
      gender: Some(Gender::Male),
      birthdate: None,
      health_status: None,
  })?;

  db.update_animal(simba, UpdateAnimalInput {
      name: Some("King Simba".into()),
      ..Default::default()
  })?;

  for animal in db.get_all_animals()? {
      println!("{} {} ({})", animal.id, animal.name, animal.species_name);
  }

COMMANDS
--------

  zoo init [--keep]        recreate the database (keep existing with --keep)
  zoo populate             load the demonstration dataset
  zoo status               row counts per table
  zoo list <entity>        print every record of one entity (--json for JSON)
  zoo guide                this text

  --db <PATH> or ZOO_DATABASE selects the database file (default: zoo.db)
"#;

/// The guide text shown by `zoo guide`.
pub fn guide() -> &'static str {
    GUIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_lists_every_table() {
        let text = guide();
        for table in [
            "Species",
            "Animals",
            "FoodTypes",
            "FoodInventory",
            "Roles",
            "Staff",
            "Feeding",
            "AnimalCare",
        ] {
            assert!(text.contains(table), "guide is missing {table}");
        }
    }
}
