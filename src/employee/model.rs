//! Employee record types

use serde::{Deserialize, Serialize};

/// A stored employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-assigned identifier
    pub id: String,

    /// Trimmed display name (at least 2 characters)
    pub name: String,

    /// Trimmed profession (at least 3 characters)
    pub profession: String,
}

/// A validated write payload that has not been assigned an id yet.
///
/// Only `validate_employee` constructs these, so every `Employee` built from
/// one satisfies the record constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInput {
    pub(crate) name: String,
    pub(crate) profession: String,
}

impl EmployeeInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profession(&self) -> &str {
        &self.profession
    }

    /// Attach an identifier, producing a storable record
    pub fn with_id(self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            name: self.name,
            profession: self.profession,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_keeps_fields() {
        let input = EmployeeInput {
            name: "Ada".to_string(),
            profession: "Engineer".to_string(),
        };

        let employee = input.with_id("abc");
        assert_eq!(employee.id, "abc");
        assert_eq!(employee.name, "Ada");
        assert_eq!(employee.profession, "Engineer");
    }

    #[test]
    fn test_serialized_field_order() {
        let employee = Employee {
            id: "1".to_string(),
            name: "Ada".to_string(),
            profession: "Engineer".to_string(),
        };

        let json = serde_json::to_string(&employee).unwrap();
        assert_eq!(json, r#"{"id":"1","name":"Ada","profession":"Engineer"}"#);
    }
}
