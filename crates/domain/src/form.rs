//! Employee form — the raw text behind a creation or edit form.
//!
//! A form holds whatever the user typed. Turning it into an [`Employee`]
//! enforces the required-field rule: `id`, `name`, and `department` must all
//! be non-blank, and `id` must be a non-negative integer (`0` asks the server
//! to assign one).

use crate::employee::{Employee, EmployeeField};
use crate::error::ValidationError;
use crate::id::EmployeeId;

/// Text values of the three form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub id: String,
    pub name: String,
    pub department: String,
}

impl EmployeeForm {
    /// Build a form from raw input values.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
        }
    }

    /// Current value of a single input.
    #[must_use]
    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Id => &self.id,
            EmployeeField::Name => &self.name,
            EmployeeField::Department => &self.department,
        }
    }

    /// Mutable access to a single input by field name.
    pub fn field_mut(&mut self, field: EmployeeField) -> &mut String {
        match field {
            EmployeeField::Id => &mut self.id,
            EmployeeField::Name => &mut self.name,
            EmployeeField::Department => &mut self.department,
        }
    }

    /// First required field that is empty or blank, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<EmployeeField> {
        [
            (EmployeeField::Id, &self.id),
            (EmployeeField::Name, &self.name),
            (EmployeeField::Department, &self.department),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Whether submitting this form would be allowed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.to_employee().is_ok()
    }

    /// Convert the form into an [`Employee`] ready to be saved.
    ///
    /// Name and department are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first blank field,
    /// or [`ValidationError::InvalidId`] when `id` is not a non-negative
    /// integer.
    pub fn to_employee(&self) -> Result<Employee, ValidationError> {
        if let Some(field) = self.missing_field() {
            return Err(ValidationError::MissingField(field));
        }
        let id: EmployeeId = self.id.trim().parse()?;
        Ok(Employee {
            id,
            name: self.name.trim().to_string(),
            department: self.department.trim().to_string(),
        })
    }

    /// Reset every input to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.name.clone(),
            department: employee.department.clone(),
        }
    }
}
