//! Command-line front end for the zoo records database.
//!
//! The data model and record access live in `zoo-core`; this crate adds the
//! informational guide and the demonstration dataset used by the `zoo` binary.

pub mod guide;
pub mod populate;

pub use zoo_core::{db, models, Database};
