use rusqlite::{params, Connection, OptionalExtension, Row};

use super::Database;
use crate::error::Result;
use crate::models::*;

const SELECT_ROLES: &str = "SELECT roleID, title, department, description FROM Roles";

impl Database {
    pub fn create_role(&self, input: CreateRoleInput) -> Result<i64> {
        self.transaction(|tx| {
            tx.execute(
                "INSERT INTO Roles (title, department, description) VALUES (?1, ?2, ?3)",
                params![input.title, input.department, input.description],
            )?;
            let id = tx.last_insert_rowid();
            tracing::debug!(id, title = %input.title, "Created role");
            Ok(id)
        })
    }

    pub fn get_role(&self, id: i64) -> Result<Option<Role>> {
        self.transaction(|tx| find_role(tx, id))
    }

    pub fn get_all_roles(&self) -> Result<Vec<Role>> {
        self.transaction(|tx| {
            let mut stmt = tx.prepare(&format!("{SELECT_ROLES} ORDER BY roleID"))?;
            let roles = stmt
                .query_map([], role_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(roles)
        })
    }

    pub fn update_role(&self, id: i64, input: UpdateRoleInput) -> Result<bool> {
        self.transaction(|tx| {
            let Some(current) = find_role(tx, id)? else {
                return Ok(false);
            };

            let changed = tx.execute(
                "UPDATE Roles SET title = ?1, department = ?2, description = ?3 WHERE roleID = ?4",
                params![
                    input.title.unwrap_or(current.title),
                    input.department.unwrap_or(current.department),
                    input.description.or(current.description),
                    id,
                ],
            )?;
            tracing::debug!(id, "Updated role");
            Ok(changed > 0)
        })
    }

    pub fn delete_role(&self, id: i64) -> Result<bool> {
        self.transaction(|tx| {
            let deleted = tx.execute("DELETE FROM Roles WHERE roleID = ?1", [id])?;
            tracing::debug!(id, deleted, "Deleted role");
            Ok(deleted > 0)
        })
    }
}

fn find_role(conn: &Connection, id: i64) -> Result<Option<Role>> {
    let role = conn
        .query_row(&format!("{SELECT_ROLES} WHERE roleID = ?1"), [id], role_from_row)
        .optional()?;
    Ok(role)
}

fn role_from_row(row: &Row<'_>) -> rusqlite::Result<Role> {
    Ok(Role {
        id: row.get(0)?,
        title: row.get(1)?,
        department: row.get(2)?,
        description: row.get(3)?,
    })
}
