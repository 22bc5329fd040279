//! Employee list view — the collection, a creation form, and per-row actions.

use staffdesk_domain::employee::Employee;
use staffdesk_domain::form::EmployeeForm;
use staffdesk_domain::id::EmployeeId;

use super::ViewError;
use crate::ports::EmployeeGateway;
use crate::routes::Route;

/// State behind the `/` screen.
pub struct EmployeeListView<G> {
    gateway: G,
    employees: Vec<Employee>,
    form: EmployeeForm,
}

impl<G: EmployeeGateway> EmployeeListView<G> {
    /// Create an empty view; call [`activate`](Self::activate) to load it.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            employees: Vec::new(),
            form: EmployeeForm::default(),
        }
    }

    /// Snapshot from the last successful fetch.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// The creation form.
    #[must_use]
    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    /// Mutable access to the creation form.
    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    /// Navigation target of a row's edit action.
    #[must_use]
    pub fn edit_route(&self, id: EmployeeId) -> Route {
        Route::UpdateEmployee(id)
    }

    /// Load the full collection.
    ///
    /// On failure the previous snapshot is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Gateway`] when the fetch fails.
    pub async fn activate(&mut self) -> Result<&[Employee], ViewError> {
        match self.gateway.fetch_all().await {
            Ok(employees) => {
                tracing::debug!(count = employees.len(), "employee list loaded");
                self.employees = employees;
                Ok(&self.employees)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load employees");
                Err(err.into())
            }
        }
    }

    /// Submit the creation form, then reload the list.
    ///
    /// Nothing is sent when a required field is empty. On success the form
    /// is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Validation`] when the form is incomplete, or
    /// [`ViewError::Gateway`] when saving or reloading fails.
    pub async fn submit(&mut self) -> Result<Employee, ViewError> {
        let employee = self.form.to_employee().inspect_err(|err| {
            tracing::debug!(error = %err, "creation form refused");
        })?;

        let saved = self.gateway.upsert(employee).await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to save employee");
        })?;
        tracing::info!(id = %saved.id, "employee saved");

        self.form.clear();
        self.activate().await?;
        Ok(saved)
    }

    /// Delete one row, then reload the list.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Gateway`] when the delete or the reload fails.
    pub async fn delete(&mut self, id: EmployeeId) -> Result<(), ViewError> {
        self.gateway.delete(id).await.inspect_err(|err| {
            tracing::error!(%id, error = %err, "failed to delete employee");
        })?;
        tracing::info!(%id, "employee deleted");

        self.activate().await?;
        Ok(())
    }
}
