use rusqlite::{params, Connection, OptionalExtension, Row};

use super::Database;
use crate::error::Result;
use crate::models::*;

const SELECT_SPECIES: &str = "SELECT speciesID, name, habitat, diet FROM Species";

impl Database {
    pub fn create_species(&self, input: CreateSpeciesInput) -> Result<i64> {
        self.transaction(|tx| {
            tx.execute(
                "INSERT INTO Species (name, habitat, diet) VALUES (?1, ?2, ?3)",
                params![input.name, input.habitat, input.diet],
            )?;
            let id = tx.last_insert_rowid();
            tracing::debug!(id, name = %input.name, "Created species");
            Ok(id)
        })
    }

    pub fn get_species(&self, id: i64) -> Result<Option<Species>> {
        self.transaction(|tx| find_species(tx, id))
    }

    pub fn get_all_species(&self) -> Result<Vec<Species>> {
        self.transaction(|tx| {
            let mut stmt = tx.prepare(&format!("{SELECT_SPECIES} ORDER BY speciesID"))?;
            let species = stmt
                .query_map([], species_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(species)
        })
    }

    /// Returns `false` if no species has this id.
    pub fn update_species(&self, id: i64, input: UpdateSpeciesInput) -> Result<bool> {
        self.transaction(|tx| {
            let Some(current) = find_species(tx, id)? else {
                return Ok(false);
            };

            let changed = tx.execute(
                "UPDATE Species SET name = ?1, habitat = ?2, diet = ?3 WHERE speciesID = ?4",
                params![
                    input.name.unwrap_or(current.name),
                    input.habitat.unwrap_or(current.habitat),
                    input.diet.unwrap_or(current.diet),
                    id,
                ],
            )?;
            tracing::debug!(id, "Updated species");
            Ok(changed > 0)
        })
    }

    /// Fails with a constraint violation while animals still reference the species.
    pub fn delete_species(&self, id: i64) -> Result<bool> {
        self.transaction(|tx| {
            let deleted = tx.execute("DELETE FROM Species WHERE speciesID = ?1", [id])?;
            tracing::debug!(id, deleted, "Deleted species");
            Ok(deleted > 0)
        })
    }
}

fn find_species(conn: &Connection, id: i64) -> Result<Option<Species>> {
    let species = conn
        .query_row(
            &format!("{SELECT_SPECIES} WHERE speciesID = ?1"),
            [id],
            species_from_row,
        )
        .optional()?;
    Ok(species)
}

fn species_from_row(row: &Row<'_>) -> rusqlite::Result<Species> {
    Ok(Species {
        id: row.get(0)?,
        name: row.get(1)?,
        habitat: row.get(2)?,
        diet: row.get(3)?,
    })
}
