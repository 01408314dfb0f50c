//! Employee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered employee collection for one session.
//! - Assign ids and publish change events to subscribers.
//!
//! # Invariants
//! - Inputs are pre-validated; the store only guards against unknown ids.
//! - Order is most-recently-created first; updates keep their position.
//! - Ids are never reused, even after the record is deleted.
//! - Failed operations leave the collection untouched and publish nothing.

use crate::model::employee::{EmployeeId, EmployeeRecord, NewEmployee};
use crate::repo::events::{StoreEvent, StoreListener, Subscribers, SubscriptionId};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No record carries the given id (stale reference on the caller side).
    NotFound(EmployeeId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for employee CRUD and change subscription.
pub trait EmployeeRepository {
    fn create_employee(&mut self, employee: NewEmployee) -> RepoResult<EmployeeRecord>;
    fn update_employee(&mut self, record: EmployeeRecord) -> RepoResult<EmployeeRecord>;
    fn delete_employee(&mut self, id: &str) -> RepoResult<()>;
    fn get_employee(&self, id: &str) -> Option<EmployeeRecord>;
    /// Snapshot copy; mutating it never affects the store.
    fn list_employees(&self) -> Vec<EmployeeRecord>;
    fn subscribe(&mut self, listener: StoreListener) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// Session-scoped, in-memory employee store.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Vec<EmployeeRecord>,
    /// Only ever grows, so ids of deleted records are never handed out again.
    issued_ids: HashSet<EmployeeId>,
    subscribers: Subscribers,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn next_id(&mut self) -> EmployeeId {
        loop {
            let candidate = Uuid::new_v4().to_string();
            if self.issued_ids.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.employees.iter().position(|employee| employee.id == id)
    }

    fn notify(&mut self, event: StoreEvent) {
        debug!(
            "event=store_notify module=store status=ok change={} id={} listeners={}",
            event.name(),
            event.employee_id(),
            self.subscribers.len()
        );
        self.subscribers.publish(&event);
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn create_employee(&mut self, employee: NewEmployee) -> RepoResult<EmployeeRecord> {
        let id = self.next_id();
        let record = employee.into_record(id.clone());
        self.employees.insert(0, record.clone());

        info!(
            "event=employee_create module=store status=ok id={} total={}",
            id,
            self.employees.len()
        );
        self.notify(StoreEvent::Created(id));
        Ok(record)
    }

    fn update_employee(&mut self, record: EmployeeRecord) -> RepoResult<EmployeeRecord> {
        let Some(index) = self.position(&record.id) else {
            warn!(
                "event=employee_update module=store status=not_found id={}",
                record.id
            );
            return Err(RepoError::NotFound(record.id));
        };

        self.employees[index] = record.clone();
        info!(
            "event=employee_update module=store status=ok id={} position={}",
            record.id, index
        );
        self.notify(StoreEvent::Updated(record.id.clone()));
        Ok(record)
    }

    fn delete_employee(&mut self, id: &str) -> RepoResult<()> {
        let Some(index) = self.position(id) else {
            warn!("event=employee_delete module=store status=not_found id={id}");
            return Err(RepoError::NotFound(id.to_string()));
        };

        let removed = self.employees.remove(index);
        info!(
            "event=employee_delete module=store status=ok id={} total={}",
            removed.id,
            self.employees.len()
        );
        self.notify(StoreEvent::Deleted(removed.id));
        Ok(())
    }

    fn get_employee(&self, id: &str) -> Option<EmployeeRecord> {
        self.employees
            .iter()
            .find(|employee| employee.id == id)
            .cloned()
    }

    fn list_employees(&self) -> Vec<EmployeeRecord> {
        self.employees.clone()
    }

    fn subscribe(&mut self, listener: StoreListener) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
