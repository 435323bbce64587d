//! HTTP server layer
//!
//! Axum server with:
//! - JSON body parsing middleware
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod body;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use body::{JsonBody, MALFORMED_BODY_MESSAGE};
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
