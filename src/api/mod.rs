//! HTTP API.
//!
//! JSON in, JSON out. Routes are nested under `/api/`; `api_router()`
//! returns a `Router` that can be mounted on any axum server instance,
//! and `server` owns the bind/serve/shutdown lifecycle.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server_on, ApiServer, ServerSession};
pub use types::ApiContext;
