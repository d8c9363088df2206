//! # rootcause
//!
//! Error propagation for a concurrent system:
//!
//! - [`Status`]: an OK-or-error value with a canonical [`Code`], a message,
//!   an optional stack trace and keyed binary payloads
//! - [`StatusGroup`]: folds many statuses into one, separating root causes
//!   from derived errors
//! - [`StatusLogSink`]: a bounded, process-wide buffer of recent warning and
//!   error logs attached to summarized errors
//!
//! ## Usage
//!
//! ```rust
//! use rootcause::{Code, Status, StatusGroup};
//!
//! StatusGroup::configure_log_history();
//!
//! let mut group = StatusGroup::new();
//! for step in 0..3 {
//!     let status = if step == 1 {
//!         Status::not_found(format!("input {step} missing"))
//!     } else {
//!         Status::OK
//!     };
//!     group.update(&status);
//! }
//! group.attach_log_messages();
//!
//! let summary = group.as_summary_status();
//! assert_eq!(summary.code(), Code::NotFound);
//! assert!(summary.message().starts_with("input 1 missing"));
//! ```

pub use rootcause_group::{
    DERIVED_MARKER, MAX_AGGREGATED_MESSAGE_CHARS, MAX_ATTACHED_LOG_CHARS, StatusGroup, is_derived,
    make_derived,
};
pub use rootcause_log::{
    DEFAULT_NUM_FORWARDED_LOG_MESSAGES, LogEntry, LogHistoryConfig, LogRegistry, LogSeverity,
    LogSink, NUM_FORWARDED_LOG_MESSAGES_ENV, RecentLogs, SinkLayer, SinkRegistry, StatusLogSink,
};
pub use rootcause_status::{
    Bytes, Code, Result, StackFrame, Status, error_name, hex_escape,
};
