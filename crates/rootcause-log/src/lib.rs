//! # rootcause-log
//!
//! Keeps the last few WARNING-and-above log lines of the process so an
//! aggregated error can carry recent context for operators.
//!
//! The logging subsystem is modelled as a [`LogRegistry`] collaborator:
//! sinks register once and receive every emitted [`LogEntry`]. [`SinkLayer`]
//! plugs a registry into `tracing`, and [`StatusLogSink`] is the bounded
//! buffer itself.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use rootcause_log::{
//!     LogEntry, LogHistoryConfig, LogRegistry, LogSeverity, SinkRegistry, StatusLogSink,
//! };
//!
//! let registry = SinkRegistry::new();
//! let sink = Arc::new(StatusLogSink::new());
//! sink.enable_with(&registry, || LogHistoryConfig { capacity: 2 });
//!
//! registry.emit(&LogEntry::new(LogSeverity::Warning, "a"));
//! registry.emit(&LogEntry::new(LogSeverity::Error, "b"));
//! registry.emit(&LogEntry::new(LogSeverity::Error, "c"));
//! assert_eq!(sink.messages(), vec!["b", "c"]);
//! ```

mod config;
mod entry;
mod layer;
mod registry;
mod sink;

pub use config::{
    DEFAULT_NUM_FORWARDED_LOG_MESSAGES, LogHistoryConfig, NUM_FORWARDED_LOG_MESSAGES_ENV,
};
pub use entry::{LogEntry, LogSeverity};
pub use layer::SinkLayer;
pub use registry::{LogRegistry, LogSink, SinkRegistry};
pub use sink::{RecentLogs, StatusLogSink};
