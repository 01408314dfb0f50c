//! Dashboard aggregation over employee snapshots.
//!
//! # Responsibility
//! - Compute summary cards (counts, distinct groups, monetary total).
//! - Compute categorical breakdowns for charts.
//!
//! # Invariants
//! - Aggregations are pure: no store access, no mutation.

pub mod dashboard;
