//! Shared utilities for integration testing.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;

use logging_demo::config::{LogConfig, ServiceConfig};
use logging_demo::{HttpServer, Logger};

/// A running service instance backed by throwaway log files.
///
/// Not every test file reads every field.
#[allow(dead_code)]
pub struct TestService {
    pub base_url: String,
    pub port: u16,
    pub error_log: PathBuf,
    pub combined_log: PathBuf,
    _log_dir: TempDir,
}

/// Spin up the real service on an ephemeral port.
///
/// Waits briefly so the startup announcements land in the log files
/// before the caller issues requests.
pub async fn spawn_service() -> TestService {
    let log_dir = TempDir::new().unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let config = ServiceConfig {
        port,
        logging: LogConfig {
            directory: log_dir.path().to_path_buf(),
            ..LogConfig::default()
        },
    };

    let logger = Arc::new(Logger::open(&config.logging).unwrap());
    let server = HttpServer::new(&config, logger);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    tokio::time::sleep(Duration::from_millis(200)).await;

    TestService {
        base_url: format!("http://127.0.0.1:{port}"),
        port,
        error_log: log_dir.path().join("error.log"),
        combined_log: log_dir.path().join("combined.log"),
        _log_dir: log_dir,
    }
}

/// Count rendered entries carrying the given level tag.
#[allow(dead_code)]
pub fn count_entries(contents: &str, level: &str) -> usize {
    let tag = format!("[{level}]:");
    contents.lines().filter(|line| line.contains(&tag)).count()
}

/// Fresh client that ignores any proxy configured in the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
