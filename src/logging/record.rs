//! Log record construction and rendering.

use std::backtrace::Backtrace;
use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp layout shared by every sink.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ordered severity classification.
///
/// Earlier variants are more severe, so
/// `Severity::Error < Severity::Warn < Severity::Info < Severity::Debug`
/// and "at most `threshold`" means "at least as severe as `threshold`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Info,
    Debug,
}

impl Severity {
    /// Lowercase tag used in rendered lines.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input to [`crate::logging::Logger::error`]: an error value carrying a
/// captured stack trace, or a plain message.
#[derive(Debug, Clone)]
pub enum ErrorInput {
    /// An error value. The stack trace takes rendering priority.
    WithTrace { message: String, stack: String },
    /// A bare message with no trace attached.
    PlainMessage(String),
}

impl ErrorInput {
    /// Capture `err` together with a backtrace taken at the call site.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let message = err.to_string();
        let stack = format!("Error: {message}\n{}", Backtrace::force_capture());
        ErrorInput::WithTrace { message, stack }
    }

    /// The text a sink renders for this input.
    pub fn into_body(self) -> String {
        match self {
            ErrorInput::WithTrace { stack, .. } => stack,
            ErrorInput::PlainMessage(message) => message,
        }
    }
}

impl From<String> for ErrorInput {
    fn from(message: String) -> Self {
        ErrorInput::PlainMessage(message)
    }
}

impl From<&str> for ErrorInput {
    fn from(message: &str) -> Self {
        ErrorInput::PlainMessage(message.to_string())
    }
}

/// One observability event. Immutable once constructed; only the rendered
/// text form is persisted.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub timestamp: DateTime<Local>,
    pub body: String,
}

impl LogRecord {
    /// Construct a record stamped with the current local time.
    pub fn new(severity: Severity, body: String) -> Self {
        Self {
            severity,
            timestamp: Local::now(),
            body,
        }
    }

    /// Render the line form `<timestamp> [<level>]: <body>`.
    pub fn render(&self) -> String {
        format!(
            "{} [{}]: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.severity,
            self.body
        )
    }
}
