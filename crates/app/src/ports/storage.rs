//! Storage port — repository trait for persisting employees.

use std::future::Future;

use staffdesk_domain::employee::Employee;
use staffdesk_domain::error::StaffdeskError;
use staffdesk_domain::id::EmployeeId;

/// Repository for persisting and querying [`Employee`]s.
pub trait EmployeeRepository {
    /// Insert a new employee, letting storage assign the identifier.
    ///
    /// The incoming `id` is ignored; the returned record carries the
    /// assigned one.
    fn create(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffdeskError>> + Send;

    /// Get an employee by its identifier.
    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, StaffdeskError>> + Send;

    /// Get all employees, ordered by identifier.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, StaffdeskError>> + Send;

    /// Insert the employee at its identifier, or replace the existing record.
    fn save(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffdeskError>> + Send;

    /// Delete an employee by its identifier.
    ///
    /// Returns `false` when nothing was stored under `id`.
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, StaffdeskError>> + Send;
}
