//! Case-insensitive substring filter for the employee table.
//!
//! # Invariants
//! - Blank queries return the input unchanged.
//! - Output keeps the relative order of the input (stable filter).
//! - The input slice is never mutated.

use crate::model::employee::EmployeeRecord;

/// Returns records whose name, city, role or nucleus name contain `query`.
///
/// Matching lowercases both sides, so accented capitals (`JOÃO`) match too.
pub fn filter_employees(records: &[EmployeeRecord], query: &str) -> Vec<EmployeeRecord> {
    if query.trim().is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(record, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query(record: &EmployeeRecord, needle: &str) -> bool {
    [
        record.name.as_str(),
        record.city.as_str(),
        record.role.as_str(),
        record.nucleus_name.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
