//! catalogd-server: HTTP service for catalog tagging
//!
//! Stores items and categories in a many-to-many relationship and
//! exposes CRUD endpoints for both sides plus the association itself.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
