//! Employee use-case service.
//!
//! # Responsibility
//! - Provide the roster CRUD entry points used by the shell.
//! - Enforce id uniqueness on insert.
//!
//! # Invariants
//! - Every call starts from a fresh `load_all`; nothing is cached.
//! - Only successful mutations call `save_all`, always with the full roster.
//! - Rejections (`false` / `None`) never write to the repository.
//! - Repository failures are returned unchanged.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};
use log::info;

/// Roster operations over any whole-roster repository.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns all records in stored order.
    pub fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        self.repo.load_all()
    }

    /// Appends `employee` unless its id is already taken.
    ///
    /// Returns `Ok(false)` for a duplicate id; the store is left unchanged.
    pub fn add_employee(&self, employee: Employee) -> RepoResult<bool> {
        let mut employees = self.repo.load_all()?;

        if employees.iter().any(|existing| existing.id == employee.id) {
            info!(
                "event=employee_add module=service status=rejected reason=duplicate_id id={}",
                employee.id
            );
            return Ok(false);
        }

        let id = employee.id;
        employees.push(employee);
        self.repo.save_all(&employees)?;
        info!(
            "event=employee_add module=service status=ok id={} records={}",
            id,
            employees.len()
        );
        Ok(true)
    }

    /// Returns the first record with `id`, if any.
    pub fn find_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let employees = self.repo.load_all()?;
        Ok(employees.into_iter().find(|employee| employee.id == id))
    }

    /// Replaces name, department and salary of the first record with `id`.
    ///
    /// Returns `Ok(false)` when no record matches; the store is left
    /// unchanged.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> RepoResult<bool> {
        let mut employees = self.repo.load_all()?;

        let Some(slot) = employees.iter_mut().find(|employee| employee.id == id) else {
            info!(
                "event=employee_update module=service status=rejected reason=not_found id={}",
                id
            );
            return Ok(false);
        };
        *slot = slot.with_details(name, department, salary);

        self.repo.save_all(&employees)?;
        info!("event=employee_update module=service status=ok id={}", id);
        Ok(true)
    }

    /// Removes every record with `id`.
    ///
    /// Returns `Ok(false)` when nothing matched; the store is left unchanged.
    pub fn delete_employee(&self, id: EmployeeId) -> RepoResult<bool> {
        let mut employees = self.repo.load_all()?;
        let before = employees.len();
        employees.retain(|employee| employee.id != id);
        let removed = before - employees.len();

        if removed == 0 {
            info!(
                "event=employee_delete module=service status=rejected reason=not_found id={}",
                id
            );
            return Ok(false);
        }

        self.repo.save_all(&employees)?;
        info!(
            "event=employee_delete module=service status=ok id={} removed={}",
            id, removed
        );
        Ok(true)
    }
}
