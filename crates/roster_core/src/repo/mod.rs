//! Repository layer: the session's employee store.
//!
//! # Responsibility
//! - Define the data access contract used by services.
//! - Keep collection ordering, id assignment and change events in one place.
//!
//! # Invariants
//! - Repository writes only accept validator-produced values.
//! - Repository APIs return semantic errors (`NotFound`) for unknown ids.

pub mod employee_repo;
pub mod events;
