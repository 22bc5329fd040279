//! Front-end views — per-screen state driven through an [`EmployeeGateway`].
//!
//! A view owns its in-memory snapshot and form. Nothing is shared between
//! views; each one re-fetches what it needs when activated.
//!
//! [`EmployeeGateway`]: crate::ports::EmployeeGateway

#[cfg(test)]
pub(crate) mod fake;
pub mod list;
pub mod update;

use staffdesk_domain::error::ValidationError;

use crate::ports::GatewayError;

pub use list::EmployeeListView;
pub use update::{UpdateEmployeeView, UpdateState};

/// Outcome of a failed view action.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The form was refused locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request reached the gateway and failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
