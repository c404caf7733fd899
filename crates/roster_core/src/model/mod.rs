//! Domain model for the employee roster.
//!
//! # Responsibility
//! - Define the record shape shared by storage, service and shell layers.
//!
//! # Invariants
//! - Records are plain values; changing a record means building a new one.
//! - `id` is caller-supplied and acts as the primary key.

pub mod employee;
