//! [`EmployeeGateway`] over `gloo-net`, for use inside the browser.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use staffdesk_app::ports::{EmployeeGateway, GatewayError};
use staffdesk_domain::employee::Employee;
use staffdesk_domain::id::EmployeeId;

/// Server address baked in at build time, `STAFFDESK_API_URL` when set.
pub const DEFAULT_BASE_URL: &str = match option_env!("STAFFDESK_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn transport(err: gloo_net::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

fn decode(err: gloo_net::Error) -> GatewayError {
    GatewayError::Decode(err.to_string())
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, GatewayError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {status}"),
    };
    Err(GatewayError::Status { status, message })
}

/// Browser client for the employee API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    /// Create a client for the server at `base_url`; trailing slashes are ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}/v1/emp", self.base_url)
    }

    fn item_url(&self, id: EmployeeId) -> String {
        format!("{}/v1/emp/{id}", self.base_url)
    }
}

impl EmployeeGateway for ApiClient {
    async fn fetch_all(&self) -> Result<Vec<Employee>, GatewayError> {
        let resp = Request::get(&self.collection_url())
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await?.json().await.map_err(decode)
    }

    async fn fetch_one(&self, id: EmployeeId) -> Result<Employee, GatewayError> {
        let resp = Request::get(&self.item_url(id))
            .send()
            .await
            .map_err(transport)?;
        if resp.status() == 404 {
            return Err(GatewayError::NotFound(id));
        }
        check_response(resp).await?.json().await.map_err(decode)
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), GatewayError> {
        let url = format!("{}?id={id}", self.collection_url());
        let resp = Request::delete(&url).send().await.map_err(transport)?;
        if resp.status() == 404 {
            return Err(GatewayError::NotFound(id));
        }
        check_response(resp).await?;
        Ok(())
    }

    async fn upsert(&self, employee: Employee) -> Result<Employee, GatewayError> {
        let resp = Request::post(&self.collection_url())
            .json(&employee)
            .map_err(decode)?
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await?.json().await.map_err(decode)
    }
}
