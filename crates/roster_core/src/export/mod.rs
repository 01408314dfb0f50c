//! Report exports.
//!
//! # See also
//! - `csv` for the only wire format this crate produces.

pub mod csv;
