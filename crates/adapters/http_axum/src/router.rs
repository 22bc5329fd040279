//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use staffdesk_app::ports::EmployeeRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/v1` and exposes `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/v1", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve a compiled dashboard from `dir` for every path the API does not claim.
///
/// Unknown paths fall back to `index.html` so client-side routes such as
/// `/update-employee/7` load the app.
pub fn with_dashboard(router: Router, dir: &Path) -> Router {
    let index = ServeFile::new(dir.join("index.html"));
    router.fallback_service(ServeDir::new(dir).fallback(index))
}

async fn health_check() -> &'static str {
    "OK"
}
