//! Repository layer: persistence of the full roster.
//!
//! # Responsibility
//! - Define the load-all/save-all contract the service builds on.
//! - Keep the text encoding and file handling inside the persistence boundary.
//!
//! # Invariants
//! - Repository reads never return a partially parsed roster.
//! - Repository writes replace the whole backing file or leave it untouched.

pub mod codec;
pub mod employee_repo;
