//! # staffdesk-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `staffdesk-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations from `./migrations`)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `staffdesk-app` (for port traits) and `staffdesk-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod employee_repo;
mod error;
mod pool;

pub use employee_repo::SqliteEmployeeRepository;
pub use error::StorageError;
pub use pool::Database;
