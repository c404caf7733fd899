//! Core use-case services.
//!
//! # Responsibility
//! - Build roster use-cases (add/find/update/delete/list) on top of
//!   whole-roster repository load and save.
//! - Keep shell callers decoupled from storage details.

pub mod employee_service;
