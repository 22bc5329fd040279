//! # staffdeskd — staffdesk API server
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Resolve configuration (`staffdesk.toml`, then `STAFFDESK_*` variables)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** server-side crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use staffdesk_adapter_http_axum::router;
use staffdesk_adapter_http_axum::state::AppState;
use staffdesk_adapter_storage_sqlite_sqlx::Database;
use staffdesk_app::services::employee_service::EmployeeService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log).context("parsing log filter")?)
        .init();

    let db = Database::open(&config.database_url).await?;
    let employee_service = EmployeeService::new(db.employees());

    // HTTP
    let mut app = router::build(AppState::new(employee_service));
    if let Some(dir) = &config.dashboard_dir {
        tracing::info!(dir = %dir.display(), "serving dashboard");
        app = router::with_dashboard(app, dir);
    }

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("binding {}", config.listen))?;
    tracing::info!(addr = %config.listen, "staffdeskd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("staffdeskd stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
