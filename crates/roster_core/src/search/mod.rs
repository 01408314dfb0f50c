//! Free-text filtering over employee snapshots.
//!
//! # Responsibility
//! - Derive the table view for the current search box text.
//! - Keep matching rules inside core so exports and views agree.

pub mod filter;
