//! # HTTP Server Module
//!
//! Axum server exposing the employee API.
//!
//! # Endpoints
//!
//! - `GET /` - Welcome message
//! - `GET /employees` - List employees
//! - `POST /employees` - Create an employee
//! - `GET /employees/:id` - Fetch an employee
//! - `PUT /employees/:id` - Replace an employee
//! - `DELETE /employees/:id` - Delete an employee

pub mod config;
pub mod employee_routes;
pub mod errors;
pub mod extract;
pub mod server;

pub use config::HttpServerConfig;
pub use employee_routes::EmployeeState;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
