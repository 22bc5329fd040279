//! Gateway port — the remote employee API as seen from a front-end.
//!
//! Futures carry no `Send` bound: front-ends run single-threaded, and the
//! browser client cannot produce `Send` futures.

use std::future::Future;

use staffdesk_domain::employee::Employee;
use staffdesk_domain::id::EmployeeId;

/// Failure of a remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server has no employee with this identifier.
    #[error("employee {0} not found")]
    NotFound(EmployeeId),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Client for the `/v1/emp` endpoints.
pub trait EmployeeGateway {
    /// `GET /v1/emp`
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Employee>, GatewayError>>;

    /// `GET /v1/emp/{id}`
    fn fetch_one(&self, id: EmployeeId) -> impl Future<Output = Result<Employee, GatewayError>>;

    /// `DELETE /v1/emp?id={id}`
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<(), GatewayError>>;

    /// `POST /v1/emp` — the server inserts or replaces depending on `id`.
    fn upsert(&self, employee: Employee) -> impl Future<Output = Result<Employee, GatewayError>>;
}

impl<G: EmployeeGateway> EmployeeGateway for &G {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Employee>, GatewayError>> {
        (**self).fetch_all()
    }

    fn fetch_one(&self, id: EmployeeId) -> impl Future<Output = Result<Employee, GatewayError>> {
        (**self).fetch_one(id)
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<(), GatewayError>> {
        (**self).delete(id)
    }

    fn upsert(&self, employee: Employee) -> impl Future<Output = Result<Employee, GatewayError>> {
        (**self).upsert(employee)
    }
}
