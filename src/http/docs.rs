//! OpenAPI document assembly.

use utoipa::openapi::{OpenApi as OpenApiSpec, Server};
use utoipa::OpenApi;

/// Machine-readable description of the HTTP surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Logging Demo API",
        description = "Diagnostic endpoints for exercising the log capture pipeline"
    ),
    paths(crate::http::handlers::trigger_error),
    tags((name = "diagnostics", description = "Deterministic failure triggers"))
)]
pub struct ApiDoc;

/// The OpenAPI document with its server URL pointing at `port`.
pub fn openapi_for_port(port: u16) -> OpenApiSpec {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(format!("http://localhost:{port}"))]);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_the_diagnostic_route() {
        let doc = openapi_for_port(3000);
        assert!(doc.paths.paths.contains_key("/error"));
    }

    #[test]
    fn server_url_reflects_the_port() {
        let doc = openapi_for_port(4123);
        let servers = doc.servers.unwrap();
        assert_eq!(servers[0].url, "http://localhost:4123");
    }
}
