//! HTTP service subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → middleware.rs (one info record: `<method> <uri>`)
//!     → body size limit
//!     → handlers.rs (`GET /error`) | docs.rs UI (`/api-docs`) | 404 fallback
//!     → response
//! ```

pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{AppState, HttpServer};
