//! In-memory gateway shared by the view tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use staffdesk_domain::employee::Employee;
use staffdesk_domain::id::EmployeeId;

use crate::ports::{EmployeeGateway, GatewayError};

/// Server stand-in that counts every call it receives.
#[derive(Default)]
pub(crate) struct FakeGateway {
    store: RefCell<BTreeMap<EmployeeId, Employee>>,
    pub(crate) calls: Cell<usize>,
    pub(crate) offline: Cell<bool>,
}

impl FakeGateway {
    pub(crate) fn seed(&self, employee: Employee) {
        self.store.borrow_mut().insert(employee.id, employee);
    }

    fn hit(&self) -> Result<(), GatewayError> {
        self.calls.set(self.calls.get() + 1);
        if self.offline.get() {
            return Err(GatewayError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

impl EmployeeGateway for FakeGateway {
    async fn fetch_all(&self) -> Result<Vec<Employee>, GatewayError> {
        self.hit()?;
        Ok(self.store.borrow().values().cloned().collect())
    }

    async fn fetch_one(&self, id: EmployeeId) -> Result<Employee, GatewayError> {
        self.hit()?;
        self.store
            .borrow()
            .get(&id)
            .cloned()
            .ok_or(GatewayError::NotFound(id))
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), GatewayError> {
        self.hit()?;
        self.store.borrow_mut().remove(&id);
        Ok(())
    }

    async fn upsert(&self, employee: Employee) -> Result<Employee, GatewayError> {
        self.hit()?;
        let mut store = self.store.borrow_mut();
        let employee = if employee.id.is_assigned() {
            employee
        } else {
            let next = store.keys().next_back().map_or(1, |id| id.get() + 1);
            employee.with_id(EmployeeId::new(next))
        };
        store.insert(employee.id, employee.clone());
        Ok(employee)
    }
}
