//! # staffdesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/v1/emp` consumed by the front-ends
//! - Allow cross-origin calls so a dashboard hosted elsewhere can reach it
//! - Optionally serve the compiled browser dashboard as a single-page app
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `staffdesk-app` (for port traits and services) and `staffdesk-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
