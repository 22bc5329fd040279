//! Employee — the single record managed by staffdesk.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StaffdeskError, ValidationError};
use crate::id::EmployeeId;

/// An employee record.
///
/// Updates are full replacements: every field is sent on each save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
}

/// Names the user-editable fields of an [`Employee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Id,
    Name,
    Department,
}

impl EmployeeField {
    /// Lower-case field name, matching the JSON key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Department => "department",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Employee {
    /// Create a builder for constructing an [`Employee`].
    #[must_use]
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] for a negative id, or
    /// [`ValidationError::MissingField`] when `name` or `department` is empty
    /// or only whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.get() < 0 {
            return Err(ValidationError::InvalidId(self.id.to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField(EmployeeField::Name));
        }
        if self.department.trim().is_empty() {
            return Err(ValidationError::MissingField(EmployeeField::Department));
        }
        Ok(())
    }

    /// Return a copy carrying a different identifier.
    #[must_use]
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = id;
        self
    }
}

/// Step-by-step builder for [`Employee`].
#[derive(Debug, Default)]
pub struct EmployeeBuilder {
    id: Option<EmployeeId>,
    name: Option<String>,
    department: Option<String>,
}

impl EmployeeBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<EmployeeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Consume the builder, validate, and return an [`Employee`].
    ///
    /// A missing id yields [`EmployeeId::UNASSIGNED`].
    ///
    /// # Errors
    ///
    /// Returns [`StaffdeskError::Validation`] if `name` or `department` is
    /// missing or blank.
    pub fn build(self) -> Result<Employee, StaffdeskError> {
        let employee = Employee {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
        };
        employee.validate()?;
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_employee_when_fields_provided() {
        let employee = Employee::builder()
            .name("Ann")
            .department("Eng")
            .build()
            .unwrap();
        assert_eq!(employee.id, EmployeeId::UNASSIGNED);
        assert_eq!(employee.name, "Ann");
        assert_eq!(employee.department, "Eng");
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let result = Employee::builder().department("Eng").build();
        assert!(matches!(
            result,
            Err(StaffdeskError::Validation(ValidationError::MissingField(
                EmployeeField::Name
            )))
        ));
    }

    #[test]
    fn should_return_validation_error_when_department_is_blank() {
        let result = Employee::builder().name("Ann").department("   ").build();
        assert!(matches!(
            result,
            Err(StaffdeskError::Validation(ValidationError::MissingField(
                EmployeeField::Department
            )))
        ));
    }

    #[test]
    fn should_return_validation_error_when_id_is_negative() {
        let result = Employee::builder().id(-3).name("Ann").department("Eng").build();
        assert!(matches!(
            result,
            Err(StaffdeskError::Validation(ValidationError::InvalidId(ref id))) if id == "-3"
        ));
    }

    #[test]
    fn should_deserialize_without_id_as_unassigned() {
        let employee: Employee =
            serde_json::from_str(r#"{"name":"Ann","department":"Eng"}"#).unwrap();
        assert_eq!(employee.id, EmployeeId::UNASSIGNED);
    }

    #[test]
    fn should_match_wire_shape() {
        let employee = Employee::builder()
            .id(7)
            .name("Bob")
            .department("Ops")
            .build()
            .unwrap();
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 7, "name": "Bob", "department": "Ops" })
        );
    }
}
