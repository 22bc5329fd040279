//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod employees;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use staffdesk_app::ports::EmployeeRepository;

use crate::state::AppState;

/// Build the `/v1` sub-router.
///
/// Any origin may call it, matching a dashboard served from another host.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/emp",
            get(employees::list::<R>)
                .post(employees::upsert::<R>)
                .put(employees::update::<R>)
                .delete(employees::delete::<R>),
        )
        .route("/emp/{id}", get(employees::get::<R>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
