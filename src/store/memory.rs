//! In-memory store backed by a locked `BTreeMap`.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::EmployeeStore;
use crate::employee::Employee;

/// Employee store held entirely in process memory.
///
/// Records are enumerated in id order.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<BTreeMap<String, Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn get(&self, id: &str) -> StoreResult<Option<Employee>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(id).cloned())
    }

    fn list(&self) -> StoreResult<Vec<Employee>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.values().cloned().collect())
    }

    fn put(&self, employee: Employee) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(employee.id.clone(), employee);
        Ok(())
    }

    fn replace(&self, employee: Employee) -> StoreResult<Option<Employee>> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        match records.get_mut(&employee.id) {
            Some(existing) => Ok(Some(std::mem::replace(existing, employee))),
            None => Ok(None),
        }
    }

    fn remove(&self, id: &str) -> StoreResult<Option<Employee>> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.remove(id))
    }

    fn has(&self, id: &str) -> StoreResult<bool> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.contains_key(id))
    }

    fn len(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}
