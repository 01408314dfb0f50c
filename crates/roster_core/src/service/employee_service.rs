//! Employee use-case service.
//!
//! # Responsibility
//! - Provide the entry points a presentation layer calls: register, edit,
//!   remove, look up, search, export and summarize.
//! - Resolve validation at the boundary so the store only sees valid data.
//!
//! # Invariants
//! - Registration and edit share one validator and differ only in id policy.
//! - Validation failures never reach the repository.
//! - Derived views (search, export, dashboard) read one consistent snapshot.

use crate::export::csv::to_csv;
use crate::model::employee::{sample_employees, EmployeeId, EmployeeInput, EmployeeRecord};
use crate::model::validation::{validate_existing, validate_new, ValidationErrors};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use crate::repo::events::{StoreEvent, SubscriptionId};
use crate::search::filter::filter_employees;
use crate::stats::dashboard::{summarize, DashboardSummary};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for employee use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Form input failed one or more field rules.
    Validation(ValidationErrors),
    /// Target employee does not exist (stale reference).
    NotFound(EmployeeId),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "{errors}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}

/// Employee service facade over a repository implementation.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a service and registers the demonstration roster into it.
    ///
    /// # Errors
    /// Fails only if the built-in sample data stops passing validation.
    pub fn with_sample_data(repo: R) -> ServiceResult<Self> {
        let mut service = Self::new(repo);
        for input in sample_employees() {
            service.register(&input)?;
        }
        Ok(service)
    }

    /// Validates registration input and stores it with a fresh id.
    ///
    /// The new record becomes the first entry of [`Self::list`].
    pub fn register(&mut self, input: &EmployeeInput) -> ServiceResult<EmployeeRecord> {
        let employee = validate_new(input).map_err(|errors| {
            log_rejection("register", &errors);
            errors
        })?;
        Ok(self.repo.create_employee(employee)?)
    }

    /// Validates edit input and replaces the stored record with the same id.
    pub fn edit(&mut self, input: &EmployeeInput) -> ServiceResult<EmployeeRecord> {
        let record = validate_existing(input).map_err(|errors| {
            log_rejection("edit", &errors);
            errors
        })?;
        Ok(self.repo.update_employee(record)?)
    }

    /// Deletes one employee by id.
    pub fn remove(&mut self, id: &str) -> ServiceResult<()> {
        Ok(self.repo.delete_employee(id)?)
    }

    pub fn get(&self, id: &str) -> Option<EmployeeRecord> {
        self.repo.get_employee(id)
    }

    /// Current snapshot, most recently registered first.
    pub fn list(&self) -> Vec<EmployeeRecord> {
        self.repo.list_employees()
    }

    /// Table view for the search box text.
    pub fn search(&self, query: &str) -> Vec<EmployeeRecord> {
        let snapshot = self.repo.list_employees();
        let matches = filter_employees(&snapshot, query);
        debug!(
            "event=employee_search module=service status=ok total={} matches={}",
            snapshot.len(),
            matches.len()
        );
        matches
    }

    /// CSV report of exactly the rows [`Self::search`] shows for `query`.
    pub fn export_csv(&self, query: &str) -> String {
        to_csv(&self.search(query))
    }

    /// Dashboard figures over the full snapshot.
    pub fn dashboard(&self) -> DashboardSummary {
        summarize(&self.repo.list_employees())
    }

    /// Registers a change listener on the underlying store.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.repo.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.repo.unsubscribe(id)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

fn log_rejection(operation: &str, errors: &ValidationErrors) {
    // Field keys only; submitted values may contain personal data.
    let fields = errors.fields().collect::<Vec<_>>().join(",");
    warn!("event=employee_{operation} module=service status=invalid fields={fields}");
}
