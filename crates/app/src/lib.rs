//! # staffdesk-app
//!
//! Application layer — use-cases, views, and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EmployeeRepository` — persistence for the server side
//!   - `EmployeeGateway` — the remote `/v1/emp` API as seen by a front-end
//! - Define **driving/inbound ports** as use-case structs:
//!   - `EmployeeService` — list, get, upsert, update, delete (server side)
//!   - `EmployeeListView` / `UpdateEmployeeView` — front-end view state
//! - Define the front-end **routing table** (`Route`)
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `staffdesk-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod routes;
pub mod services;
pub mod views;
