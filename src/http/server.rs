//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all routes and middleware
//! - Mount the documentation UI and its OpenAPI document
//! - Announce the service and documentation addresses once bound
//!
//! # Design Decisions
//! - The product [`Logger`] lives in [`AppState`] and is the only logging
//!   surface handlers touch; `tower-http` tracing stays on the internal
//!   diagnostics plane
//! - No graceful shutdown: the process runs until externally terminated

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServiceConfig;
use crate::http::{docs, handlers, middleware};
use crate::logging::Logger;

/// Request body cap, matching the limit advertised for JSON payloads.
const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub logger: Arc<Logger>,
}

/// HTTP server for the logging demo.
pub struct HttpServer {
    router: Router,
    logger: Arc<Logger>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &ServiceConfig, logger: Arc<Logger>) -> Self {
        let state = AppState {
            logger: logger.clone(),
        };
        let router = Self::build_router(config, state);
        Self { router, logger }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let api_doc = docs::openapi_for_port(config.port);
        Router::new()
            .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api_doc))
            .route("/error", get(handlers::trigger_error))
            .layer(from_fn_with_state(state.clone(), middleware::log_requests))
            .layer(RequestBodyLimitLayer::new(JSON_BODY_LIMIT))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the server on an already-bound listener.
    ///
    /// Logs the two startup announcements, then serves until the process
    /// is terminated externally.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let port = listener.local_addr()?.port();
        self.logger
            .info(format!("Server is running at http://localhost:{port}"));
        self.logger
            .info(format!("API docs available at http://localhost:{port}/api-docs"));

        axum::serve(listener, self.router).await
    }
}
