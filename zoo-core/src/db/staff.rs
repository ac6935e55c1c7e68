use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{today, Database};
use crate::error::Result;
use crate::models::*;

const SELECT_STAFF: &str = r#"
    SELECT s.staffID, s.firstName, s.lastName, s.roleID, r.title,
           s.country, s.hire_date, s.salary
    FROM Staff s
    JOIN Roles r ON s.roleID = r.roleID
"#;

impl Database {
    /// A missing `hire_date` records today's date.
    pub fn create_staff(&self, input: CreateStaffInput) -> Result<i64> {
        let hire_date = input.hire_date.unwrap_or_else(today);

        self.transaction(|tx| {
            tx.execute(
                r#"INSERT INTO Staff (firstName, lastName, roleID, country, hire_date, salary)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
                params![
                    input.first_name,
                    input.last_name,
                    input.role_id,
                    input.country,
                    hire_date,
                    input.salary,
                ],
            )?;
            let id = tx.last_insert_rowid();
            tracing::debug!(id, role_id = input.role_id, "Created staff member");
            Ok(id)
        })
    }

    pub fn get_staff(&self, id: i64) -> Result<Option<StaffMember>> {
        self.transaction(|tx| find_staff(tx, id))
    }

    pub fn get_all_staff(&self) -> Result<Vec<StaffMember>> {
        self.transaction(|tx| {
            let mut stmt = tx.prepare(&format!("{SELECT_STAFF} ORDER BY s.staffID"))?;
            let staff = stmt
                .query_map([], staff_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(staff)
        })
    }

    pub fn update_staff(&self, id: i64, input: UpdateStaffInput) -> Result<bool> {
        self.transaction(|tx| {
            let Some(current) = find_staff(tx, id)? else {
                return Ok(false);
            };

            let changed = tx.execute(
                r#"UPDATE Staff
                   SET firstName = ?1, lastName = ?2, roleID = ?3, country = ?4, hire_date = ?5, salary = ?6
                   WHERE staffID = ?7"#,
                params![
                    input.first_name.unwrap_or(current.first_name),
                    input.last_name.unwrap_or(current.last_name),
                    input.role_id.unwrap_or(current.role_id),
                    input.country.unwrap_or(current.country),
                    input.hire_date.unwrap_or(current.hire_date),
                    input.salary.unwrap_or(current.salary),
                    id,
                ],
            )?;
            tracing::debug!(id, "Updated staff member");
            Ok(changed > 0)
        })
    }

    pub fn delete_staff(&self, id: i64) -> Result<bool> {
        self.transaction(|tx| {
            let deleted = tx.execute("DELETE FROM Staff WHERE staffID = ?1", [id])?;
            tracing::debug!(id, deleted, "Deleted staff member");
            Ok(deleted > 0)
        })
    }
}

fn find_staff(conn: &Connection, id: i64) -> Result<Option<StaffMember>> {
    let member = conn
        .query_row(&format!("{SELECT_STAFF} WHERE s.staffID = ?1"), [id], staff_from_row)
        .optional()?;
    Ok(member)
}

fn staff_from_row(row: &Row<'_>) -> rusqlite::Result<StaffMember> {
    Ok(StaffMember {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        role_id: row.get(3)?,
        role_title: row.get(4)?,
        country: row.get(5)?,
        hire_date: row.get(6)?,
        salary: row.get(7)?,
    })
}
