//! Update view — edit form for a single employee.

use staffdesk_domain::employee::Employee;
use staffdesk_domain::form::EmployeeForm;
use staffdesk_domain::id::EmployeeId;

use super::ViewError;
use crate::ports::EmployeeGateway;
use crate::routes::Route;

/// Lifecycle of an [`UpdateEmployeeView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateState {
    /// Nothing fetched yet, or the fetch failed.
    Unloaded,
    /// The form holds the fetched record, possibly edited since.
    Loaded,
    /// The form was saved; it now holds what the server stored.
    Submitted,
}

/// State behind the `/update-employee/{id}` screen.
pub struct UpdateEmployeeView<G> {
    gateway: G,
    id: EmployeeId,
    form: EmployeeForm,
    state: UpdateState,
}

impl<G: EmployeeGateway> UpdateEmployeeView<G> {
    /// Create a view for the employee named by the route parameter.
    pub fn new(gateway: G, id: EmployeeId) -> Self {
        Self {
            gateway,
            id,
            form: EmployeeForm::default(),
            state: UpdateState::Unloaded,
        }
    }

    /// Identifier taken from the route.
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> UpdateState {
        self.state
    }

    /// The edit form.
    #[must_use]
    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    /// Mutable access to the edit form.
    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    /// Fetch the employee and pre-fill the form with it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Gateway`] when the fetch fails; the form is left
    /// untouched and the view stays [`UpdateState::Unloaded`].
    pub async fn activate(&mut self) -> Result<&EmployeeForm, ViewError> {
        let id = self.id;
        let employee = self.gateway.fetch_one(id).await.inspect_err(|err| {
            tracing::error!(%id, error = %err, "failed to load employee");
        })?;

        self.form = EmployeeForm::from(&employee);
        self.state = UpdateState::Loaded;
        Ok(&self.form)
    }

    /// Save the edit form.
    ///
    /// Nothing is sent when a required field is empty. On success the form
    /// is replaced by the stored record and the list route is returned as
    /// the place to go next.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Validation`] when the form is incomplete, or
    /// [`ViewError::Gateway`] when saving fails.
    pub async fn submit(&mut self) -> Result<(Employee, Route), ViewError> {
        let employee = self.form.to_employee().inspect_err(|err| {
            tracing::debug!(error = %err, "edit form refused");
        })?;

        let saved = self.gateway.upsert(employee).await.inspect_err(|err| {
            tracing::error!(id = %self.id, error = %err, "failed to save employee");
        })?;
        tracing::info!(id = %saved.id, "employee updated");

        self.form = EmployeeForm::from(&saved);
        self.state = UpdateState::Submitted;
        Ok((saved, Route::EmployeeList))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::GatewayError;
    use crate::views::fake::FakeGateway;
    use staffdesk_domain::employee::EmployeeField;
    use staffdesk_domain::error::ValidationError;

    fn seeded() -> FakeGateway {
        let gateway = FakeGateway::default();
        gateway.seed(Employee {
            id: EmployeeId::new(7),
            name: "Bob".to_string(),
            department: "Ops".to_string(),
        });
        gateway
    }

    #[tokio::test]
    async fn should_prefill_form_with_fetched_employee() {
        let gateway = seeded();
        let expected = gateway.fetch_one(EmployeeId::new(7)).await.unwrap();
        let mut view = UpdateEmployeeView::new(&gateway, EmployeeId::new(7));
        assert_eq!(view.state(), UpdateState::Unloaded);

        view.activate().await.unwrap();

        assert_eq!(view.state(), UpdateState::Loaded);
        assert_eq!(view.form(), &EmployeeForm::from(&expected));
        assert_eq!(view.form().to_employee().unwrap(), expected);
    }

    #[tokio::test]
    async fn should_stay_unloaded_when_employee_missing() {
        let gateway = FakeGateway::default();
        let mut view = UpdateEmployeeView::new(&gateway, EmployeeId::new(3));

        let result = view.activate().await;

        assert!(matches!(
            result,
            Err(ViewError::Gateway(GatewayError::NotFound(id))) if id == EmployeeId::new(3)
        ));
        assert_eq!(view.state(), UpdateState::Unloaded);
        assert_eq!(view.form(), &EmployeeForm::default());
    }

    #[tokio::test]
    async fn should_replace_record_and_return_to_list_after_submit() {
        let gateway = seeded();
        let mut view = UpdateEmployeeView::new(&gateway, EmployeeId::new(7));
        view.activate().await.unwrap();
        view.form_mut().department = "Research".to_string();

        let (saved, next) = view.submit().await.unwrap();

        assert_eq!(next, Route::EmployeeList);
        assert_eq!(saved.department, "Research");
        assert_eq!(view.state(), UpdateState::Submitted);
        let all = gateway.fetch_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].department, "Research");
    }

    #[tokio::test]
    async fn should_not_call_gateway_when_edit_form_has_empty_field() {
        let gateway = seeded();
        let mut view = UpdateEmployeeView::new(&gateway, EmployeeId::new(7));
        view.activate().await.unwrap();
        let calls = gateway.calls.get();
        view.form_mut().name.clear();

        let result = view.submit().await;

        assert!(matches!(
            result,
            Err(ViewError::Validation(ValidationError::MissingField(
                EmployeeField::Name
            )))
        ));
        assert_eq!(gateway.calls.get(), calls);
        assert_eq!(view.state(), UpdateState::Loaded);
    }
}
