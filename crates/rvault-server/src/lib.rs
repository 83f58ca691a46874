//! HTTP server for rvault.
//!
//! Serves the replica store over JSON: read, authenticated update,
//! fault-injection corrupt, tamper verification and majority restore, with
//! permissive CORS and per-client rate limiting.

pub mod config;
pub mod error;
pub mod handler;
pub mod ratelimit;
pub mod router;
pub mod server;
pub mod state;

pub use config::{RateLimitConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use ratelimit::RateLimiter;
pub use server::RvaultServer;
pub use state::AppState;
