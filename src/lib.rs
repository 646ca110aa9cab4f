//! # Redirector
//!
//! An HTTP redirector that forwards every inbound request to a configured
//! base URL while recording per-path redirect counts. Statistics are exposed
//! through three randomly generated, unguessable endpoints: an HTML report,
//! a JSON report, and a reset action.
//!
//! ## Architecture
//!
//! - [`store`] - Thread-safe statistics store with JSON file persistence
//! - [`tokens`] - Reserved-path registry (load-or-generate random tokens)
//! - [`filter`] - Keyword allow-list applied to request paths
//! - [`handlers`] - Axum handlers for redirecting, reporting, and resetting
//! - [`routes`] - Router wiring the reserved endpoints and the catch-all
//! - [`config`] / [`server`] - CLI configuration and server lifecycle
//!
//! ## Quick Start
//!
//! ```bash
//! # Forward everything to example.com, listen on :8080
//! redirector --base https://example.com --addr 0.0.0.0:8080
//!
//! # Only redirect paths containing "docs" or "blog"
//! redirector --base https://example.com --filter docs,blog
//! ```
//!
//! The reserved statistics URLs are printed at startup and persisted to
//! `paths.json` so they survive restarts.

pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod tokens;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::AppError;
    pub use crate::filter::PathFilter;
    pub use crate::state::AppState;
    pub use crate::store::{StatsSnapshot, StatsStore};
    pub use crate::tokens::ReservedPaths;
}
