use rusqlite::{params, Connection, OptionalExtension, Row};

use super::Database;
use crate::error::Result;
use crate::models::*;

const SELECT_FOOD_TYPES: &str =
    "SELECT foodTypeID, name, unit, storage_requirements FROM FoodTypes";

impl Database {
    pub fn create_food_type(&self, input: CreateFoodTypeInput) -> Result<i64> {
        self.transaction(|tx| {
            tx.execute(
                "INSERT INTO FoodTypes (name, unit, storage_requirements) VALUES (?1, ?2, ?3)",
                params![input.name, input.unit, input.storage_requirements],
            )?;
            let id = tx.last_insert_rowid();
            tracing::debug!(id, name = %input.name, "Created food type");
            Ok(id)
        })
    }

    pub fn get_food_type(&self, id: i64) -> Result<Option<FoodType>> {
        self.transaction(|tx| find_food_type(tx, id))
    }

    pub fn get_all_food_types(&self) -> Result<Vec<FoodType>> {
        self.transaction(|tx| {
            let mut stmt = tx.prepare(&format!("{SELECT_FOOD_TYPES} ORDER BY foodTypeID"))?;
            let food_types = stmt
                .query_map([], food_type_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(food_types)
        })
    }

    pub fn update_food_type(&self, id: i64, input: UpdateFoodTypeInput) -> Result<bool> {
        self.transaction(|tx| {
            let Some(current) = find_food_type(tx, id)? else {
                return Ok(false);
            };

            let changed = tx.execute(
                r#"UPDATE FoodTypes SET name = ?1, unit = ?2, storage_requirements = ?3
                   WHERE foodTypeID = ?4"#,
                params![
                    input.name.unwrap_or(current.name),
                    input.unit.unwrap_or(current.unit),
                    input.storage_requirements.or(current.storage_requirements),
                    id,
                ],
            )?;
            tracing::debug!(id, "Updated food type");
            Ok(changed > 0)
        })
    }

    pub fn delete_food_type(&self, id: i64) -> Result<bool> {
        self.transaction(|tx| {
            let deleted = tx.execute("DELETE FROM FoodTypes WHERE foodTypeID = ?1", [id])?;
            tracing::debug!(id, deleted, "Deleted food type");
            Ok(deleted > 0)
        })
    }
}

fn find_food_type(conn: &Connection, id: i64) -> Result<Option<FoodType>> {
    let food_type = conn
        .query_row(
            &format!("{SELECT_FOOD_TYPES} WHERE foodTypeID = ?1"),
            [id],
            food_type_from_row,
        )
        .optional()?;
    Ok(food_type)
}

fn food_type_from_row(row: &Row<'_>) -> rusqlite::Result<FoodType> {
    Ok(FoodType {
        id: row.get(0)?,
        name: row.get(1)?,
        unit: row.get(2)?,
        storage_requirements: row.get(3)?,
    })
}
