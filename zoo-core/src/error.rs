//! Error type for the zoo-core crate.

use std::io;
use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Any failure reported by SQLite: constraint violations, locked or
    /// unwritable files, malformed statements.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Removing the previous database file before a forced re-initialization failed.
    #[error("failed to reset database file {path:?}: {source}")]
    Reset { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when SQLite rejected a write because of a UNIQUE, CHECK,
    /// FOREIGN KEY or NOT NULL constraint.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Sqlite(err) => err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation),
            Self::Reset { .. } => false,
        }
    }
}
