//! Employee domain model and its validation rules.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Gate every record write behind one shared validator.
//!
//! # Invariants
//! - Every stored employee is identified by a store-assigned `EmployeeId`.
//! - Deletion is immediate and total; there are no tombstones.

pub mod employee;
pub mod validation;
