//! # staffdesk-adapter-http-reqwest
//!
//! Client for the `/v1/emp` REST API built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `EmployeeGateway` port defined in `staffdesk-app::ports::gateway`
//! - Build request URLs from a configurable base address
//! - Map transport failures, HTTP statuses, and malformed bodies into
//!   `GatewayError`
//!
//! No retries, no timeouts, no authentication.
//!
//! ## Dependency rule
//! Depends on `staffdesk-app` (for the port trait) and `staffdesk-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use staffdesk_app::ports::{EmployeeGateway, GatewayError};
use staffdesk_domain::employee::Employee;
use staffdesk_domain::id::EmployeeId;

/// Address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const EMPLOYEES_PATH: &str = "/v1/emp";

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn transport(err: &reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, GatewayError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", status.as_u16()),
    };
    Err(GatewayError::Status {
        status: status.as_u16(),
        message,
    })
}

/// [`EmployeeGateway`] speaking HTTP through a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestEmployeeGateway {
    client: Client,
    base_url: String,
}

impl Default for ReqwestEmployeeGateway {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ReqwestEmployeeGateway {
    /// Create a gateway for the server at `base_url` (e.g. `http://localhost:8080`).
    ///
    /// Trailing slashes are ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Server address this gateway talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{EMPLOYEES_PATH}", self.base_url)
    }

    fn item_url(&self, id: EmployeeId) -> String {
        format!("{}{EMPLOYEES_PATH}/{id}", self.base_url)
    }
}

impl EmployeeGateway for ReqwestEmployeeGateway {
    async fn fetch_all(&self) -> Result<Vec<Employee>, GatewayError> {
        let url = self.collection_url();
        tracing::debug!(%url, "GET employees");
        let resp = self.client.get(&url).send().await.map_err(|e| transport(&e))?;
        let resp = check_response(resp).await?;
        resp.json()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }

    async fn fetch_one(&self, id: EmployeeId) -> Result<Employee, GatewayError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "GET employee");
        let resp = self.client.get(&url).send().await.map_err(|e| transport(&e))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(id));
        }
        let resp = check_response(resp).await?;
        resp.json()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), GatewayError> {
        let url = self.collection_url();
        tracing::debug!(%url, %id, "DELETE employee");
        let resp = self
            .client
            .delete(&url)
            .query(&[("id", id.get())])
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(id));
        }
        check_response(resp).await?;
        Ok(())
    }

    async fn upsert(&self, employee: Employee) -> Result<Employee, GatewayError> {
        let url = self.collection_url();
        tracing::debug!(%url, id = %employee.id, "POST employee");
        let resp = self
            .client
            .post(&url)
            .json(&employee)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        let resp = check_response(resp).await?;
        resp.json()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_urls_from_base_without_trailing_slash() {
        let gateway = ReqwestEmployeeGateway::new("http://example.test:8080/");
        assert_eq!(gateway.base_url(), "http://example.test:8080");
        assert_eq!(gateway.collection_url(), "http://example.test:8080/v1/emp");
        assert_eq!(
            gateway.item_url(EmployeeId::new(7)),
            "http://example.test:8080/v1/emp/7"
        );
    }

    #[test]
    fn should_default_to_localhost() {
        assert_eq!(
            ReqwestEmployeeGateway::default().base_url(),
            DEFAULT_BASE_URL
        );
    }

    #[tokio::test]
    async fn should_report_transport_error_when_server_unreachable() {
        let gateway = ReqwestEmployeeGateway::new("http://127.0.0.1:9");
        let result = gateway.fetch_all().await;
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }
}
