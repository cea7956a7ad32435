//! Write-time validation of employee payloads.
//!
//! The accepted shape is described by a small declarative schema
//! (`FieldRule` per field) and interpreted by `validate_employee`.
//! Every field in the schema is required. Rules are checked in schema order
//! and the first failure is reported.
//!
//! - The body must be a JSON object
//! - Fields must be present and non-null
//! - Strings are taken as-is; numbers and booleans are cast to their string
//!   form; objects and arrays are rejected
//! - Values are trimmed; an empty trimmed value counts as missing
//! - Trimmed values must meet the minimum length

use std::borrow::Cow;

use serde_json::{Map, Value};
use thiserror::Error;

use super::model::EmployeeInput;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A payload that does not match the employee shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(format!("{} is a required field", field))
    }

    fn type_mismatch(field: &str, field_type: FieldType) -> Self {
        Self::new(format!("{} must be a `{}` type", field, field_type.type_name()))
    }

    fn too_short(field: &str, min_length: usize) -> Self {
        Self::new(format!("{} must be at least {} characters", field, min_length))
    }
}

/// Field value types understood by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
}

impl FieldType {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
        }
    }

    /// Cast a JSON value to this type, if it has a scalar representation
    fn cast<'a>(&self, value: &'a Value) -> Option<Cow<'a, str>> {
        match (self, value) {
            (FieldType::String, Value::String(s)) => Some(Cow::Borrowed(s.as_str())),
            (FieldType::String, Value::Number(n)) => Some(Cow::Owned(n.to_string())),
            (FieldType::String, Value::Bool(b)) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }
}

/// Constraints for a single required payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub field_type: FieldType,
    pub min_length: usize,
}

impl FieldRule {
    /// A trimmed string field
    pub const fn string(name: &'static str, min_length: usize) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            min_length,
        }
    }
}

/// The employee payload schema: `name` then `profession`
pub fn employee_schema() -> [FieldRule; 2] {
    [FieldRule::string("name", 2), FieldRule::string("profession", 3)]
}

/// Validate an untyped payload, returning the trimmed fields on success.
pub fn validate_employee(body: &Value) -> ValidationResult<EmployeeInput> {
    let obj = body
        .as_object()
        .ok_or_else(|| ValidationError::new("body must be a JSON object"))?;

    let [name_rule, profession_rule] = employee_schema();
    let name = validate_field(obj, &name_rule)?;
    let profession = validate_field(obj, &profession_rule)?;

    Ok(EmployeeInput { name, profession })
}

fn validate_field(obj: &Map<String, Value>, rule: &FieldRule) -> ValidationResult<String> {
    let value = match obj.get(rule.name) {
        None | Some(Value::Null) => return Err(ValidationError::required(rule.name)),
        Some(value) => value,
    };

    let cast = rule
        .field_type
        .cast(value)
        .ok_or_else(|| ValidationError::type_mismatch(rule.name, rule.field_type))?;
    let trimmed = cast.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::required(rule.name));
    }

    if trimmed.chars().count() < rule.min_length {
        return Err(ValidationError::too_short(rule.name, rule.min_length));
    }

    Ok(trimmed.to_string())
}
