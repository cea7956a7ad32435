//! # Employee Records
//!
//! The record type, its write-time validation and identifier generation.

pub mod id;
pub mod model;
pub mod validator;

pub use id::{IdGenerator, UuidGenerator};
pub use model::{Employee, EmployeeInput};
pub use validator::{employee_schema, validate_employee, FieldRule, FieldType, ValidationError};
