//! # Roster
//!
//! Departments, roles, and employees on top of a single SQLite connection,
//! usable both as the `roster` binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! roster = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use roster::store::{DepartmentRepository, SqliteStore};
//!
//! let store = SqliteStore::new("./data/roster.db").unwrap();
//! store.initialize().unwrap();
//!
//! let id = store.create_department("Engineering").unwrap();
//! let budget = store.total_salary_by_department(id).unwrap();
//! store.close().unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes the CLI module. Disable with `default-features = false`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod store;
pub mod types;
pub mod validation;
