//! # staffdesk-domain
//!
//! Pure domain model for the staffdesk employee-records system.
//!
//! ## Responsibilities
//! - Foundational types: the numeric [`EmployeeId`](id::EmployeeId) and the
//!   error conventions shared by every layer
//! - Define the **Employee** record (id, name, department)
//! - Define the **EmployeeForm**, the raw text behind a creation or edit form,
//!   and its required-field rule
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod employee;
pub mod form;
