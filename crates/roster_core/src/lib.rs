//! Core domain logic for the employee roster.
//! This crate owns the roster file format and every rule about its records.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::employee::{Employee, EmployeeId};
pub use repo::codec::{decode_records, encode_records, CodecError, Field};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, TextFileEmployeeRepository,
};
pub use service::employee_service::EmployeeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
