//! # staffdesk — terminal front-end
//!
//! Drives the employee list and update views against a remote staffdeskd
//! server. Each invocation activates one view, performs one action, and
//! prints the resulting screen.
//!
//! ## Dependency rule
//! Wiring only: parses arguments, builds the reqwest gateway, and hands it to
//! the views in `staffdesk-app`. Rendering lives in [`render`].

mod render;

use std::io::Write;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use staffdesk_adapter_http_reqwest::{DEFAULT_BASE_URL, ReqwestEmployeeGateway};
use staffdesk_app::ports::EmployeeGateway;
use staffdesk_app::routes::Route;
use staffdesk_app::views::{EmployeeListView, UpdateEmployeeView};
use staffdesk_domain::form::EmployeeForm;
use staffdesk_domain::id::EmployeeId;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "staffdesk", version, about = "Manage employee records")]
struct Cli {
    /// Base URL of the staffdeskd server.
    #[arg(long, global = true, env = "STAFFDESK_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Log filter directive written to stderr.
    #[arg(long, global = true, env = "STAFFDESK_LOG", default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every employee.
    List,
    /// Create or replace an employee, then show the refreshed list.
    ///
    /// An id of 0 lets the server assign one.
    Create {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// Delete an employee, then show the refreshed list.
    Delete { id: EmployeeId },
    /// Load an employee into the edit form, change fields, and save.
    Edit {
        id: EmployeeId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// Navigate to a route path such as `/` or `/update-employee/7`.
    Open { path: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).context("parsing log filter")?)
        .with_writer(std::io::stderr)
        .init();

    let gateway = ReqwestEmployeeGateway::new(cli.api_url);
    tracing::debug!(base_url = gateway.base_url(), "using api");

    let mut out = std::io::stdout().lock();
    run(cli.command, &gateway, &mut out).await
}

async fn run<G: EmployeeGateway>(
    command: Command,
    gateway: &G,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::List => navigate(Route::EmployeeList, gateway, out).await,
        Command::Create {
            id,
            name,
            department,
        } => {
            let mut view = EmployeeListView::new(gateway);
            *view.form_mut() = EmployeeForm::new(
                id.unwrap_or_default(),
                name.unwrap_or_default(),
                department.unwrap_or_default(),
            );
            let saved = view.submit().await?;
            writeln!(out, "Saved employee {}.", saved.id)?;
            render::employee_table(out, view.employees(), |id| view.edit_route(id))?;
            Ok(())
        }
        Command::Delete { id } => {
            let mut view = EmployeeListView::new(gateway);
            view.delete(id).await?;
            writeln!(out, "Deleted employee {id}.")?;
            render::employee_table(out, view.employees(), |id| view.edit_route(id))?;
            Ok(())
        }
        Command::Edit {
            id,
            name,
            department,
        } => {
            let mut view = UpdateEmployeeView::new(gateway, id);
            view.activate().await?;
            if let Some(name) = name {
                view.form_mut().name = name;
            }
            if let Some(department) = department {
                view.form_mut().department = department;
            }
            let (saved, next) = view.submit().await?;
            writeln!(out, "Saved employee {}.", saved.id)?;
            navigate(next, gateway, out).await
        }
        Command::Open { path } => {
            let route = Route::parse(&path).ok_or_else(|| anyhow!("no screen at {path}"))?;
            navigate(route, gateway, out).await
        }
    }
}

/// Activate the view behind `route` and print it.
async fn navigate<G: EmployeeGateway>(
    route: Route,
    gateway: &G,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match route {
        Route::EmployeeList => {
            let mut view = EmployeeListView::new(gateway);
            view.activate().await?;
            render::employee_table(out, view.employees(), |id| view.edit_route(id))?;
        }
        Route::UpdateEmployee(id) => {
            let mut view = UpdateEmployeeView::new(gateway, id);
            view.activate().await?;
            let title = format!("Update employee {}", view.id());
            render::employee_form(out, &title, view.form())?;
        }
    }
    Ok(())
}
