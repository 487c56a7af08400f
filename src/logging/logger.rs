//! Severity-threshold fan-out over the configured sinks.

use std::io;

use crate::config::LogConfig;

use super::record::{ErrorInput, LogRecord, Severity};
use super::sink::{ConsoleSink, FileSink, LogSink};

/// The product logger: one level threshold, independent sinks.
///
/// Constructed once at startup and shared by reference (`Arc`) with every
/// component that logs. There is no global instance. Each call renders
/// the record and writes it to every admitting sink before returning;
/// none of the logging operations can fail the caller.
pub struct Logger {
    level: Severity,
    sinks: Vec<Box<dyn LogSink>>,
}

impl Logger {
    /// Open the standard sink set: the error-only file, the combined
    /// file, and the colorized console.
    pub fn open(config: &LogConfig) -> io::Result<Self> {
        let error_file = FileSink::open(config.directory.join(&config.error_file), Severity::Error)?;
        let combined_file =
            FileSink::open(config.directory.join(&config.combined_file), Severity::Debug)?;

        let sinks: Vec<Box<dyn LogSink>> = vec![
            Box::new(error_file),
            Box::new(combined_file),
            Box::new(ConsoleSink::new(Severity::Debug)),
        ];
        Ok(Self::with_sinks(config.level, sinks))
    }

    /// Build a logger over an explicit sink set.
    pub fn with_sinks(level: Severity, sinks: Vec<Box<dyn LogSink>>) -> Self {
        Self { level, sinks }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message.into());
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warn, message.into());
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message.into());
    }

    /// Log at error severity. A stack trace, when present, takes
    /// rendering priority over the plain message.
    pub fn error(&self, input: impl Into<ErrorInput>) {
        self.log(Severity::Error, input.into().into_body());
    }

    fn log(&self, severity: Severity, body: String) {
        // Records below the threshold are dropped before reaching any sink.
        if severity > self.level {
            return;
        }
        let record = LogRecord::new(severity, body);
        for sink in &self.sinks {
            sink.write(&record);
        }
    }
}
