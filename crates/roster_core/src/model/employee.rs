//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record.
//! - Provide value-style replacement helpers used by update flows.
//!
//! # Invariants
//! - `id` never changes for the lifetime of a record value.
//! - Uniqueness of `id` is enforced by the service on insert, not here.

use serde::{Deserialize, Serialize};

/// Caller-assigned primary key of an employee record.
pub type EmployeeId = i32;

/// One row of the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    /// No currency or precision rules are applied.
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
        }
    }

    /// Returns a new record with the same `id` and replaced details.
    ///
    /// All three fields are overwritten together; partial updates are not
    /// modelled.
    pub fn with_details(
        &self,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self::new(self.id, name, department, salary)
    }
}
