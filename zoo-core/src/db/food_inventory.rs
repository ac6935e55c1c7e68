use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{now, Database};
use crate::error::Result;
use crate::models::*;

const SELECT_INVENTORY: &str = r#"
    SELECT i.inventoryID, i.foodTypeID, ft.name, i.quantity, i.expiration_date, i.last_updated
    FROM FoodInventory i
    JOIN FoodTypes ft ON i.foodTypeID = ft.foodTypeID
"#;

impl Database {
    pub fn create_food_inventory(&self, input: CreateFoodInventoryInput) -> Result<i64> {
        self.transaction(|tx| {
            tx.execute(
                r#"INSERT INTO FoodInventory (foodTypeID, quantity, expiration_date, last_updated)
                   VALUES (?1, ?2, ?3, ?4)"#,
                params![
                    input.food_type_id,
                    input.quantity,
                    input.expiration_date,
                    now(),
                ],
            )?;
            let id = tx.last_insert_rowid();
            tracing::debug!(
                id,
                food_type_id = input.food_type_id,
                quantity = input.quantity,
                "Created inventory entry"
            );
            Ok(id)
        })
    }

    pub fn get_food_inventory(&self, id: i64) -> Result<Option<FoodInventoryItem>> {
        self.transaction(|tx| find_inventory(tx, id))
    }

    pub fn get_all_food_inventory(&self) -> Result<Vec<FoodInventoryItem>> {
        self.transaction(|tx| {
            let mut stmt = tx.prepare(&format!("{SELECT_INVENTORY} ORDER BY i.inventoryID"))?;
            let items = stmt
                .query_map([], inventory_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(items)
        })
    }

    /// Adjust a stock entry. `last_updated` is refreshed even when every
    /// field is left as `None`.
    pub fn update_food_inventory(&self, id: i64, input: UpdateFoodInventoryInput) -> Result<bool> {
        self.transaction(|tx| {
            let Some(current) = find_inventory(tx, id)? else {
                return Ok(false);
            };

            let changed = tx.execute(
                r#"UPDATE FoodInventory
                   SET foodTypeID = ?1, quantity = ?2, expiration_date = ?3, last_updated = ?4
                   WHERE inventoryID = ?5"#,
                params![
                    input.food_type_id.unwrap_or(current.food_type_id),
                    input.quantity.unwrap_or(current.quantity),
                    input.expiration_date.or(current.expiration_date),
                    now(),
                    id,
                ],
            )?;
            tracing::debug!(id, "Updated inventory entry");
            Ok(changed > 0)
        })
    }

    pub fn delete_food_inventory(&self, id: i64) -> Result<bool> {
        self.transaction(|tx| {
            let deleted = tx.execute("DELETE FROM FoodInventory WHERE inventoryID = ?1", [id])?;
            tracing::debug!(id, deleted, "Deleted inventory entry");
            Ok(deleted > 0)
        })
    }
}

fn find_inventory(conn: &Connection, id: i64) -> Result<Option<FoodInventoryItem>> {
    let item = conn
        .query_row(
            &format!("{SELECT_INVENTORY} WHERE i.inventoryID = ?1"),
            [id],
            inventory_from_row,
        )
        .optional()?;
    Ok(item)
}

fn inventory_from_row(row: &Row<'_>) -> rusqlite::Result<FoodInventoryItem> {
    Ok(FoodInventoryItem {
        id: row.get(0)?,
        food_type_id: row.get(1)?,
        food_type_name: row.get(2)?,
        quantity: row.get(3)?,
        expiration_date: row.get(4)?,
        last_updated: row.get(5)?,
    })
}
