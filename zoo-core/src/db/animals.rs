use rusqlite::{params, Connection, OptionalExtension, Row};

use super::Database;
use crate::error::Result;
use crate::models::*;

const SELECT_ANIMALS: &str = r#"
    SELECT a.animalID, a.name, a.speciesID, a.gender, a.birthdate, a.health_status, s.name
    FROM Animals a
    JOIN Species s ON a.speciesID = s.speciesID
"#;

impl Database {
    pub fn create_animal(&self, input: CreateAnimalInput) -> Result<i64> {
        let health_status = input
            .health_status
            .unwrap_or_else(|| DEFAULT_HEALTH_STATUS.to_string());

        self.transaction(|tx| {
            tx.execute(
                r#"INSERT INTO Animals (name, speciesID, gender, birthdate, health_status)
                   VALUES (?1, ?2, ?3, ?4, ?5)"#,
                params![
                    input.name,
                    input.species_id,
                    input.gender,
                    input.birthdate,
                    health_status,
                ],
            )?;
            let id = tx.last_insert_rowid();
            tracing::debug!(id, species_id = input.species_id, "Created animal");
            Ok(id)
        })
    }

    pub fn get_animal(&self, id: i64) -> Result<Option<Animal>> {
        self.transaction(|tx| find_animal(tx, id))
    }

    pub fn get_all_animals(&self) -> Result<Vec<Animal>> {
        self.transaction(|tx| {
            let mut stmt = tx.prepare(&format!("{SELECT_ANIMALS} ORDER BY a.animalID"))?;
            let animals = stmt
                .query_map([], animal_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(animals)
        })
    }

    /// Fields left as `None` keep their stored value. Returns `false` if no
    /// animal has this id.
    pub fn update_animal(&self, id: i64, input: UpdateAnimalInput) -> Result<bool> {
        self.transaction(|tx| {
            let Some(current) = find_animal(tx, id)? else {
                return Ok(false);
            };

            let changed = tx.execute(
                r#"UPDATE Animals
                   SET name = ?1, speciesID = ?2, gender = ?3, birthdate = ?4, health_status = ?5
                   WHERE animalID = ?6"#,
                params![
                    input.name.unwrap_or(current.name),
                    input.species_id.unwrap_or(current.species_id),
                    input.gender.or(current.gender),
                    input.birthdate.or(current.birthdate),
                    input.health_status.unwrap_or(current.health_status),
                    id,
                ],
            )?;
            tracing::debug!(id, "Updated animal");
            Ok(changed > 0)
        })
    }

    pub fn delete_animal(&self, id: i64) -> Result<bool> {
        self.transaction(|tx| {
            let deleted = tx.execute("DELETE FROM Animals WHERE animalID = ?1", [id])?;
            tracing::debug!(id, deleted, "Deleted animal");
            Ok(deleted > 0)
        })
    }
}

fn find_animal(conn: &Connection, id: i64) -> Result<Option<Animal>> {
    let animal = conn
        .query_row(
            &format!("{SELECT_ANIMALS} WHERE a.animalID = ?1"),
            [id],
            animal_from_row,
        )
        .optional()?;
    Ok(animal)
}

fn animal_from_row(row: &Row<'_>) -> rusqlite::Result<Animal> {
    Ok(Animal {
        id: row.get(0)?,
        name: row.get(1)?,
        species_id: row.get(2)?,
        gender: row.get(3)?,
        birthdate: row.get(4)?,
        health_status: row.get(5)?,
        species_name: row.get(6)?,
    })
}
