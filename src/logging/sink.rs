//! Sink implementations: durable files and the interactive console.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use colored::{Color, ColoredString, Colorize};

use super::record::{LogRecord, Severity};

/// A destination for rendered log records.
///
/// Sinks filter by severity and swallow their own write failures:
/// logging is best-effort and must never fault the caller.
pub trait LogSink: Send + Sync {
    fn write(&self, record: &LogRecord);
}

/// Append-only plain-text file sink.
///
/// The handle is guarded by a mutex so concurrent callers interleave
/// whole lines, never partial ones. No color codes are ever written:
/// the files must stay parseable by external tooling.
pub struct FileSink {
    path: PathBuf,
    threshold: Severity,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating the file and its parent
    /// directory if absent. Records less severe than `threshold` are
    /// skipped.
    pub fn open(path: impl Into<PathBuf>, threshold: Severity) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            threshold,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn write(&self, record: &LogRecord) {
        if record.severity > self.threshold {
            return;
        }
        // A poisoned lock means another write panicked; skip this one.
        let Ok(mut file) = self.file.lock() else {
            return;
        };
        if let Err(err) = writeln!(file, "{}", record.render()) {
            tracing::warn!(path = %self.path.display(), error = %err, "log sink write failed");
        }
    }
}

/// Console sink, colorized by severity over the whole rendered line.
pub struct ConsoleSink {
    threshold: Severity,
}

impl ConsoleSink {
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, record: &LogRecord) {
        if record.severity > self.threshold {
            return;
        }
        let line = colorize(&record.render(), record.severity);
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// Color a rendered line for terminal display.
pub(crate) fn colorize(line: &str, severity: Severity) -> ColoredString {
    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
        Severity::Info => Color::Green,
        Severity::Debug => Color::Blue,
    };
    line.color(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::record::LogRecord;

    #[test]
    fn file_sink_respects_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error.log");
        let sink = FileSink::open(&path, Severity::Error).unwrap();

        sink.write(&LogRecord::new(Severity::Info, "ignored".into()));
        sink.write(&LogRecord::new(Severity::Error, "kept".into()));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("ignored"));
        assert!(contents.contains("[error]: kept"));
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn file_sink_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("combined.log");
        let sink = FileSink::open(&path, Severity::Debug).unwrap();

        sink.write(&LogRecord::new(Severity::Info, "first".into()));
        assert!(sink.path().exists());
    }

    #[test]
    fn colorize_wraps_line_in_ansi_codes() {
        colored::control::set_override(true);
        let painted = colorize("boom", Severity::Error).to_string();
        assert!(painted.starts_with('\u{1b}'));
        assert!(painted.contains("boom"));
        assert_ne!(painted, "boom");
    }
}
