//! JSON REST handlers for employees.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use staffdesk_app::ports::EmployeeRepository;
use staffdesk_domain::employee::Employee;
use staffdesk_domain::id::EmployeeId;

use crate::error::ApiError;
use crate::extract::{JsonBody, QueryParams};
use crate::state::AppState;

/// `?id=` query parameter used by delete and update.
#[derive(Deserialize)]
pub struct IdQuery {
    pub id: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Employee>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from endpoints returning a single employee.
pub enum EmployeeResponse {
    Ok(Json<Employee>),
}

impl IntoResponse for EmployeeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /v1/emp`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let employees = state.employee_service.list_employees().await?;
    Ok(ListResponse::Ok(Json(employees)))
}

/// `GET /v1/emp/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<EmployeeResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let id: EmployeeId = id.parse()?;
    let employee = state.employee_service.get_employee(id).await?;
    Ok(EmployeeResponse::Ok(Json(employee)))
}

/// `POST /v1/emp` — insert or replace depending on the body's `id`.
pub async fn upsert<R>(
    State(state): State<AppState<R>>,
    JsonBody(employee): JsonBody<Employee>,
) -> Result<EmployeeResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let saved = state.employee_service.upsert_employee(employee).await?;
    Ok(EmployeeResponse::Ok(Json(saved)))
}

/// `PUT /v1/emp?id={id}` — replace an existing employee.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    QueryParams(query): QueryParams<IdQuery>,
    JsonBody(employee): JsonBody<Employee>,
) -> Result<EmployeeResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let id: EmployeeId = query.id.parse()?;
    let saved = state.employee_service.update_employee(id, employee).await?;
    Ok(EmployeeResponse::Ok(Json(saved)))
}

/// `DELETE /v1/emp?id={id}` — responds with the removed employee.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    QueryParams(query): QueryParams<IdQuery>,
) -> Result<EmployeeResponse, ApiError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let id: EmployeeId = query.id.parse()?;
    let removed = state.employee_service.delete_employee(id).await?;
    Ok(EmployeeResponse::Ok(Json(removed)))
}
