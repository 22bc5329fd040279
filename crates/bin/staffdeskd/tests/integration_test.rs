//! End-to-end smoke tests for the full staffdeskd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use staffdesk_adapter_http_axum::router;
use staffdesk_adapter_http_axum::state::AppState;
use staffdesk_adapter_storage_sqlite_sqlx::Database;
use staffdesk_app::services::employee_service::EmployeeService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let repo = Database::in_memory()
        .await
        .expect("in-memory database should initialise")
        .employees();
    router::build(AppState::new(EmployeeService::new(repo)))
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, value)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: create → list → delete scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_create_list_delete_scenario() {
    let app = app().await;

    // Create with an unassigned id
    let (status, created) = send(
        &app,
        "POST",
        "/v1/emp",
        Some(r#"{"id":0,"name":"Ann","department":"Eng"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);

    // List contains exactly one Ann
    let (status, list) = send(&app, "GET", "/v1/emp", None).await;
    assert_eq!(status, StatusCode::OK);
    let anns: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["name"] == "Ann")
        .collect();
    assert_eq!(anns.len(), 1);
    assert_eq!(anns[0]["id"], id);

    // Delete by query parameter
    let (status, removed) = send(&app, "DELETE", &format!("/v1/emp?id={id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, created);

    // Gone from the list and from direct lookup
    let (_, list) = send(&app, "GET", "/v1/emp", None).await;
    assert!(list.as_array().unwrap().iter().all(|e| e["id"] != id));
    let (status, _) = send(&app, "GET", &format!("/v1/emp/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_replace_instead_of_duplicating_on_repeated_upsert() {
    let app = app().await;

    for department in ["Eng", "Sales", "Ops"] {
        let body = format!(r#"{{"id":12,"name":"Bo","department":"{department}"}}"#);
        let (status, _) = send(&app, "POST", "/v1/emp", Some(&body)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, list) = send(&app, "GET", "/v1/emp", None).await;
    assert_eq!(
        list,
        serde_json::json!([{ "id": 12, "name": "Bo", "department": "Ops" }])
    );
}

#[tokio::test]
async fn should_update_existing_employee_with_put() {
    let app = app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/v1/emp",
        Some(r#"{"name":"Cy","department":"Eng"}"#),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/v1/emp?id={id}"),
        Some(r#"{"id":0,"name":"Cy","department":"Research"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["department"], "Research");
}

#[tokio::test]
async fn should_return_json_error_for_invalid_requests() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/emp",
        Some(r#"{"id":0,"name":"","department":"Eng"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "name is required" }));

    let (status, body) = send(&app, "DELETE", "/v1/emp?id=99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "Employee 99 not found" }));

    let (status, _) = send(&app, "GET", "/v1/emp/-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
