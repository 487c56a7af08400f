//! Logging demo service.
//!
//! A minimal HTTP service whose product is its logging pipeline: every
//! request is recorded, a deliberately failing diagnostic route feeds the
//! error sinks, and the OpenAPI UI documents the surface. External
//! monitoring tooling reads the append-only files under `logs/`.

pub mod config;
pub mod http;
pub mod logging;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use logging::Logger;
