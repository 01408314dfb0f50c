//! Core domain logic for the Roster employee registry.
//! This crate is the single source of truth for business invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod stats;

pub use export::csv::{to_csv, write_csv_export, ExportError, CSV_HEADERS, EXPORT_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::employee::{
    role_suggestions, sample_employees, EmployeeId, EmployeeInput, EmployeeRecord, Gender,
    NewEmployee, KNOWN_ROLES,
};
pub use model::validation::{validate_existing, validate_new, ValidationErrors};
pub use repo::employee_repo::{
    EmployeeRepository, InMemoryEmployeeRepository, RepoError, RepoResult,
};
pub use repo::events::{StoreEvent, StoreListener, SubscriptionId};
pub use search::filter::filter_employees;
pub use service::employee_service::{EmployeeService, ServiceError, ServiceResult};
pub use stats::dashboard::{
    counts_by_gender, counts_by_role, distinct_city_count, distinct_nucleus_count, format_brl,
    parse_currency, summarize, total_count, total_monetary_value, DashboardSummary,
    ROLE_UNDEFINED_LABEL,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
