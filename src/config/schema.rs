//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::Severity;

/// Port used when `PORT` is unset or malformed.
pub const DEFAULT_PORT: u16 = 3000;

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// TCP port to listen on.
    pub port: u16,

    /// Logging sink configuration.
    pub logging: LogConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            logging: LogConfig::default(),
        }
    }
}

/// Logging sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory holding the log files.
    pub directory: PathBuf,

    /// File receiving error-severity records only.
    pub error_file: String,

    /// File receiving every admitted record.
    pub combined_file: String,

    /// Minimum admitted severity; records below it never reach a sink.
    pub level: Severity,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            error_file: "error.log".to_string(),
            combined_file: "combined.log".to_string(),
            level: Severity::Info,
        }
    }
}
