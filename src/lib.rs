//! Per-environment database configuration for SQL migration tooling.
//!
//! An [`config::EnvironmentStore`] is loaded from a YAML document, the selected
//! environment is resolved with [`config::EnvironmentResolver`] (falling back to
//! built-in defaults when it is missing), and [`resolve::resolve`] validates the
//! dialect and opens a connection through a [`db::Driver`].

pub mod commands;
pub mod config;
pub mod constants;
pub mod db;
pub mod dialect;
pub mod error;
pub mod migration_tracking;
pub mod resolve;

pub use dialect::Dialect;
pub use error::ResolveError;
pub use migration_tracking::MigrationSettings;
pub use resolve::{Resolved, resolve};
