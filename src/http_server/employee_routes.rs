//! Employee HTTP Routes
//!
//! CRUD endpoints over the employee store, plus the welcome message at `/`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use super::errors::{ApiError, ApiResult};
use super::extract::JsonBody;
use crate::employee::{validate_employee, Employee, IdGenerator, UuidGenerator};
use crate::store::{EmployeeStore, InMemoryEmployeeStore};

// ==================
// Shared State
// ==================

/// State shared across employee handlers
pub struct EmployeeState {
    pub store: Arc<dyn EmployeeStore>,
    pub ids: Arc<dyn IdGenerator>,
}

impl EmployeeState {
    /// Empty in-memory store with random UUID ids
    pub fn new() -> Self {
        Self::with_parts(Arc::new(InMemoryEmployeeStore::new()), Arc::new(UuidGenerator::new()))
    }

    pub fn with_parts(store: Arc<dyn EmployeeStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }
}

impl Default for EmployeeState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Employee Routes
// ==================

/// Create employee routes
pub fn employee_routes(state: Arc<EmployeeState>) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees", post(create_employee_handler))
        .route("/employees/:id", get(get_employee_handler))
        .route("/employees/:id", put(update_employee_handler))
        .route("/employees/:id", delete(delete_employee_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn welcome_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome!".to_string(),
    })
}

async fn list_employees_handler(
    State(state): State<Arc<EmployeeState>>,
) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(state.store.list()?))
}

async fn get_employee_handler(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let employee = state.store.get(&id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(employee))
}

/// Answers 200 rather than 201 on success
async fn create_employee_handler(
    State(state): State<Arc<EmployeeState>>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<Employee>> {
    let input = validate_employee(&body)?;
    let employee = input.with_id(state.ids.generate_id());

    state.store.put(employee.clone())?;
    tracing::info!(id = %employee.id, "employee created");

    Ok(Json(employee))
}

/// Full replacement; the id always comes from the path
async fn update_employee_handler(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<Employee>> {
    let employee = validate_employee(&body)?.with_id(id);

    state
        .store
        .replace(employee.clone())?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id = %employee.id, "employee updated");

    Ok(Json(employee))
}

async fn delete_employee_handler(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if !state.store.delete(&id)? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id = %id, "employee deleted");

    Ok(StatusCode::NO_CONTENT)
}
