use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logging_demo::{config, HttpServer, Logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is the common case, not an error.
    let _ = dotenvy::dotenv();

    // Internal diagnostics plane; the product logger is separate.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logging_demo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_from_env();
    tracing::info!(
        port = config.port,
        log_dir = %config.logging.directory.display(),
        "Configuration loaded"
    );

    let logger = Arc::new(Logger::open(&config.logging)?);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    let server = HttpServer::new(&config, logger);
    server.run(listener).await?;

    Ok(())
}
