//! Database handle, transaction wrapper and per-entity record access.
//!
//! Every public operation opens its own connection, runs inside a single
//! transaction and drops the connection before returning. Nothing is pooled.

mod animals;
mod feeding;
mod food_inventory;
mod food_types;
mod roles;
pub mod schema;
pub mod seed;
mod species;
mod staff;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use rusqlite::{Connection, Transaction};
use serde::Serialize;

use crate::error::{Error, Result};

pub use seed::SeedSummary;

/// File name used when no database path is configured.
pub const DEFAULT_DATABASE_FILE: &str = "zoo.db";

/// Handle on a zoo database file.
///
/// Holds only the path; connections are opened per call, so the handle is
/// cheap to clone and share.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

/// Row count of every table in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub species: i64,
    pub animals: i64,
    pub food_types: i64,
    pub food_inventory: i64,
    pub roles: i64,
    pub staff: i64,
    pub feeding: i64,
    pub animal_care: i64,
}

impl Database {
    /// Open (creating if absent) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Self {
            path: path.as_ref().to_path_buf(),
        };
        // Touch the file so unwritable locations fail here rather than on first use.
        db.connect()?;
        Ok(db)
    }

    /// Open [`DEFAULT_DATABASE_FILE`] in the working directory.
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_DATABASE_FILE)
    }

    /// Create the schema and seed the lookup tables.
    ///
    /// With `reset_existing` the file at `path` is deleted first. Without it the
    /// call is idempotent: tables are created only if absent and seed rows are
    /// inserted with `INSERT OR IGNORE`.
    pub fn initialize(path: impl AsRef<Path>, reset_existing: bool) -> Result<Self> {
        let path = path.as_ref();

        if reset_existing && path.exists() {
            tracing::info!(path = %path.display(), "Removing existing database");
            std::fs::remove_file(path).map_err(|source| Error::Reset {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let db = Self::open(path)?;
        db.migrate()?;
        let seeded = db.seed_lookups()?;
        tracing::info!(
            path = %path.display(),
            species = seeded.species,
            food_types = seeded.food_types,
            roles = seeded.roles,
            "Database initialized"
        );

        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create every table and index that does not exist yet.
    pub fn migrate(&self) -> Result<()> {
        self.transaction(|tx| {
            tx.execute_batch(schema::SCHEMA)?;
            Ok(())
        })
    }

    /// Run `f` inside one transaction on a fresh connection.
    ///
    /// Commits when `f` returns `Ok`. On `Err` the transaction is rolled back
    /// and the original error is returned. The connection is closed on every
    /// path.
    pub fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        match f(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                tracing::error!(error = %err, "Transaction failed, rolling back");
                if let Err(rollback_err) = tx.rollback() {
                    tracing::warn!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Run `f` against a fresh connection outside any explicit transaction.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.connect()?;
        f(&conn)
    }

    pub fn table_counts(&self) -> Result<TableCounts> {
        self.with_connection(|conn| {
            let count = |table: &str| -> Result<i64> {
                let n: i64 =
                    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
                Ok(n)
            };

            Ok(TableCounts {
                species: count("Species")?,
                animals: count("Animals")?,
                food_types: count("FoodTypes")?,
                food_inventory: count("FoodInventory")?,
                roles: count("Roles")?,
                staff: count("Staff")?,
                feeding: count("Feeding")?,
                animal_care: count("AnimalCare")?,
            })
        })
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        // Must be set outside a transaction; SQLite ignores it inside one.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }
}

/// Current local time truncated to whole seconds, the precision stored in
/// timestamp columns.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
