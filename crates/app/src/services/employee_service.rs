//! Employee service — use-cases behind the `/v1/emp` API.

use staffdesk_domain::employee::Employee;
use staffdesk_domain::error::{NotFoundError, StaffdeskError};
use staffdesk_domain::id::EmployeeId;

use crate::ports::EmployeeRepository;

/// Application service for employee CRUD operations.
pub struct EmployeeService<R> {
    repo: R,
}

fn not_found(id: EmployeeId) -> StaffdeskError {
    NotFoundError {
        entity: "Employee",
        id: id.to_string(),
    }
    .into()
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all employees.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, StaffdeskError> {
        self.repo.get_all().await
    }

    /// Look up an employee by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StaffdeskError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Employee, StaffdeskError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Insert or replace an employee.
    ///
    /// An unassigned id inserts a new record under a fresh identifier. An
    /// assigned id stores the record at that identifier, replacing whatever
    /// was there.
    ///
    /// # Errors
    ///
    /// Returns [`StaffdeskError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    pub async fn upsert_employee(&self, employee: Employee) -> Result<Employee, StaffdeskError> {
        employee.validate()?;
        let saved = if employee.id.is_assigned() {
            self.repo.save(employee).await?
        } else {
            self.repo.create(employee).await?
        };
        tracing::debug!(id = %saved.id, "employee saved");
        Ok(saved)
    }

    /// Replace an existing employee.
    ///
    /// The record is stored under `id` regardless of the id it carries.
    ///
    /// # Errors
    ///
    /// Returns [`StaffdeskError::Validation`] if invariants fail,
    /// [`StaffdeskError::NotFound`] when no employee with `id` exists, or a
    /// storage error from the repository.
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        employee: Employee,
    ) -> Result<Employee, StaffdeskError> {
        let employee = employee.with_id(id);
        employee.validate()?;
        if self.repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        self.repo.save(employee).await
    }

    /// Delete an employee by id, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`StaffdeskError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<Employee, StaffdeskError> {
        let employee = self.get_employee(id).await?;
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::debug!(%id, "employee deleted");
        Ok(employee)
    }
}
