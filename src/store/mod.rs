//! # Employee Store
//!
//! Process-scoped key-value storage for employee records. Created empty when
//! the server starts and discarded when it exits.
//!
//! All access goes through a single lock, so each operation, including the
//! check-and-write in `replace` and `remove`, is atomic with respect to
//! concurrent requests.

pub mod errors;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryEmployeeStore;

use crate::employee::Employee;

/// Storage operations for employee records
pub trait EmployeeStore: Send + Sync {
    /// Fetch a record by id
    fn get(&self, id: &str) -> StoreResult<Option<Employee>>;

    /// All records, in a stable order
    fn list(&self) -> StoreResult<Vec<Employee>>;

    /// Insert or overwrite the record stored under `employee.id`
    fn put(&self, employee: Employee) -> StoreResult<()>;

    /// Overwrite an existing record. Returns the previous record, or `None`
    /// without writing anything if the id is absent.
    fn replace(&self, employee: Employee) -> StoreResult<Option<Employee>>;

    /// Remove and return a record
    fn remove(&self, id: &str) -> StoreResult<Option<Employee>>;

    /// Remove a record, reporting whether it existed
    fn delete(&self, id: &str) -> StoreResult<bool> {
        Ok(self.remove(id)?.is_some())
    }

    fn has(&self, id: &str) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }

    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
