//! Core library for the zoo records system.
//!
//! This crate provides the domain models and database operations for the zoo,
//! independent of any front end (CLI, sample driver, etc.).
//!
//! # Usage
//!
//! ```no_run
//! use zoo_core::db::Database;
//! use zoo_core::models::*;
//!
//! let db = Database::initialize("zoo.db", false)?;
//!
//! let tiger = db.create_species(CreateSpeciesInput {
//!     name: "Tiger".into(),
//!     habitat: "Asian Forests".into(),
//!     diet: "Carnivore".into(),
//! })?;
//! let all = db.get_all_species()?;
//! # let _ = (tiger, all);
//! # Ok::<(), zoo_core::Error>(())
//! ```

pub mod db;
pub mod error;
pub mod models;

// Re-export commonly used types at crate root
pub use db::Database;
pub use error::{Error, Result};
