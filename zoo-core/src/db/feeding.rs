use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{now, Database};
use crate::error::Result;
use crate::models::*;

const SELECT_FEEDING: &str = r#"
    SELECT f.feedingID,
           f.animalID, a.name,
           f.foodTypeID, ft.name,
           f.staffID, s.firstName || ' ' || s.lastName,
           f.quantity, f.notes, f.feeding_date
    FROM Feeding f
    JOIN Animals a ON f.animalID = a.animalID
    JOIN FoodTypes ft ON f.foodTypeID = ft.foodTypeID
    JOIN Staff s ON f.staffID = s.staffID
"#;

impl Database {
    /// Record a feeding. The animal, food type and staff member must exist.
    pub fn create_feeding(&self, input: CreateFeedingInput) -> Result<i64> {
        let feeding_date = input.feeding_date.unwrap_or_else(now);

        self.transaction(|tx| {
            tx.execute(
                r#"INSERT INTO Feeding (animalID, foodTypeID, staffID, feeding_date, quantity, notes)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
                params![
                    input.animal_id,
                    input.food_type_id,
                    input.staff_id,
                    feeding_date,
                    input.quantity,
                    input.notes,
                ],
            )?;
            let id = tx.last_insert_rowid();
            tracing::debug!(
                id,
                animal_id = input.animal_id,
                food_type_id = input.food_type_id,
                staff_id = input.staff_id,
                "Recorded feeding"
            );
            Ok(id)
        })
    }

    pub fn get_feeding(&self, id: i64) -> Result<Option<Feeding>> {
        self.transaction(|tx| find_feeding(tx, id))
    }

    pub fn get_all_feedings(&self) -> Result<Vec<Feeding>> {
        self.transaction(|tx| {
            let mut stmt = tx.prepare(&format!("{SELECT_FEEDING} ORDER BY f.feedingID"))?;
            let feedings = stmt
                .query_map([], feeding_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(feedings)
        })
    }

    pub fn update_feeding(&self, id: i64, input: UpdateFeedingInput) -> Result<bool> {
        self.transaction(|tx| {
            let Some(current) = find_feeding(tx, id)? else {
                return Ok(false);
            };

            let changed = tx.execute(
                r#"UPDATE Feeding
                   SET animalID = ?1, foodTypeID = ?2, staffID = ?3, feeding_date = ?4, quantity = ?5, notes = ?6
                   WHERE feedingID = ?7"#,
                params![
                    input.animal_id.unwrap_or(current.animal_id),
                    input.food_type_id.unwrap_or(current.food_type_id),
                    input.staff_id.unwrap_or(current.staff_id),
                    input.feeding_date.unwrap_or(current.feeding_date),
                    input.quantity.unwrap_or(current.quantity),
                    input.notes.or(current.notes),
                    id,
                ],
            )?;
            tracing::debug!(id, "Updated feeding");
            Ok(changed > 0)
        })
    }

    pub fn delete_feeding(&self, id: i64) -> Result<bool> {
        self.transaction(|tx| {
            let deleted = tx.execute("DELETE FROM Feeding WHERE feedingID = ?1", [id])?;
            tracing::debug!(id, deleted, "Deleted feeding");
            Ok(deleted > 0)
        })
    }
}

fn find_feeding(conn: &Connection, id: i64) -> Result<Option<Feeding>> {
    let feeding = conn
        .query_row(
            &format!("{SELECT_FEEDING} WHERE f.feedingID = ?1"),
            [id],
            feeding_from_row,
        )
        .optional()?;
    Ok(feeding)
}

fn feeding_from_row(row: &Row<'_>) -> rusqlite::Result<Feeding> {
    Ok(Feeding {
        id: row.get(0)?,
        animal_id: row.get(1)?,
        animal_name: row.get(2)?,
        food_type_id: row.get(3)?,
        food_type_name: row.get(4)?,
        staff_id: row.get(5)?,
        staff_name: row.get(6)?,
        quantity: row.get(7)?,
        notes: row.get(8)?,
        feeding_date: row.get(9)?,
    })
}
