//! fitness-server: REST API over exercises, muscles and their links
//!
//! Layers, leaf first:
//! - [`models`]: entity kinds, validated names, validation errors
//! - [`db`]: Postgres data access (CRUD, related lookups, links)
//! - [`http`]: axum router, body parsing, error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{Database, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{EntityKind, EntityName, ValidationError};
