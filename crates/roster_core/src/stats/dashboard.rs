//! Summary statistics for the dashboard view.
//!
//! # Invariants
//! - Currency parsing is best-effort: unparsable values count as zero and
//!   never surface as errors.
//! - Breakdown maps are ordered by key so output is deterministic.

use crate::model::employee::EmployeeRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

/// Bucket for records without a role.
pub const ROLE_UNDEFINED_LABEL: &str = "Não Definido";

static CURRENCY_NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"R\$|\s").expect("valid currency noise regex"));

/// Figures shown on the dashboard cards and charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub distinct_nuclei: usize,
    pub distinct_cities: usize,
    pub total_value: f64,
    pub by_role: BTreeMap<String, usize>,
    pub by_gender: BTreeMap<String, usize>,
}

/// Builds every dashboard figure from one snapshot.
pub fn summarize(records: &[EmployeeRecord]) -> DashboardSummary {
    DashboardSummary {
        total_employees: total_count(records),
        distinct_nuclei: distinct_nucleus_count(records),
        distinct_cities: distinct_city_count(records),
        total_value: total_monetary_value(records),
        by_role: counts_by_role(records),
        by_gender: counts_by_gender(records),
    }
}

/// Groups by exact role text; blank roles go to [`ROLE_UNDEFINED_LABEL`].
pub fn counts_by_role(records: &[EmployeeRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let role = if record.role.trim().is_empty() {
            ROLE_UNDEFINED_LABEL
        } else {
            record.role.as_str()
        };
        *counts.entry(role.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Groups by gender literal (`masculino`, `feminino`, `outros`).
pub fn counts_by_gender(records: &[EmployeeRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.gender.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

pub fn total_count(records: &[EmployeeRecord]) -> usize {
    records.len()
}

pub fn distinct_nucleus_count(records: &[EmployeeRecord]) -> usize {
    records
        .iter()
        .map(|record| record.nucleus_number)
        .collect::<HashSet<_>>()
        .len()
}

/// Case-sensitive: `Valença` and `VALENÇA` count as two cities.
pub fn distinct_city_count(records: &[EmployeeRecord]) -> usize {
    records
        .iter()
        .map(|record| record.city.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Sums every record's `value` after parsing it from display format.
pub fn total_monetary_value(records: &[EmployeeRecord]) -> f64 {
    records
        .iter()
        .map(|record| parse_currency(&record.value))
        .sum()
}

/// Parses `R$ 3.200,00` style text into `3200.0`.
///
/// Strips the currency symbol and whitespace, drops `.` thousands
/// separators and reads `,` as the decimal separator. Anything that still
/// fails to parse, or parses to a non-finite number, yields `0.0`.
pub fn parse_currency(value: &str) -> f64 {
    let stripped = CURRENCY_NOISE_RE.replace_all(value, "");
    let normalized = stripped.replace('.', "").replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => 0.0,
    }
}

/// Formats an amount as Brazilian currency, e.g. `R$ 11.500,00`.
pub fn format_brl(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}
