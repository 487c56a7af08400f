//! Product logging pipeline.
//!
//! # Data Flow
//! ```text
//! caller (handler, middleware, startup)
//!     → logger.rs (severity threshold, record construction)
//!     → record.rs (render `<timestamp> [<level>]: <body>`)
//!     → sink.rs fan-out:
//!         logs/error.log   (error severity only, plain text)
//!         logs/combined.log (every admitted severity, plain text)
//!         console           (every admitted severity, ANSI color)
//! ```
//!
//! # Design Decisions
//! - Sinks are independent; one record is rendered and written to every
//!   sink that admits it before the logging call returns
//! - Writes are best-effort: a failed sink write never faults the caller
//! - Stack traces take rendering priority over plain messages
//! - This pipeline is the demo artifact; the crate's own diagnostics go
//!   through `tracing` and never into these sinks

pub mod logger;
pub mod record;
pub mod sink;

pub use logger::Logger;
pub use record::{ErrorInput, LogRecord, Severity};
pub use sink::{ConsoleSink, FileSink, LogSink};
