//! employee-api - An in-memory employee records HTTP service
//!
//! CRUD over a single process-scoped collection of employee records,
//! validated at write time and served as JSON.

pub mod employee;
pub mod http_server;
pub mod observability;
pub mod store;

pub use employee::{Employee, EmployeeInput, IdGenerator, UuidGenerator, ValidationError};
pub use http_server::{ApiError, EmployeeState, HttpServer, HttpServerConfig};
pub use store::{EmployeeStore, InMemoryEmployeeStore, StoreError};
