//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional .env file (sourced in main)
//!     → process environment (PORT)
//!     → loader.rs (parse, fall back to defaults)
//!     → ServiceConfig (immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; an empty environment yields a working config
//! - Malformed values fall back to defaults instead of aborting startup
//! - Config is loaded once; there is no reload mechanism

pub mod loader;
pub mod schema;

pub use loader::load_from_env;
pub use schema::{LogConfig, ServiceConfig, DEFAULT_PORT};
