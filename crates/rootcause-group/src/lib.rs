//! # rootcause-group
//!
//! Combines the statuses of many concurrent or sequential sub-operations
//! into one, reporting root causes and leaving out errors that were only
//! raised in reaction to them.
//!
//! ## Usage
//!
//! ```rust
//! use rootcause_group::StatusGroup;
//! use rootcause_status::{Code, Status};
//!
//! let mut group = StatusGroup::new();
//! group.update(&Status::OK);
//! group.update(&Status::internal("kernel crashed"));
//! group.update(&StatusGroup::make_derived(&Status::cancelled("step cancelled")));
//!
//! let summary = group.as_summary_status();
//! assert_eq!(summary.code(), Code::Internal);
//! assert_eq!(summary.message(), "kernel crashed");
//! ```

mod derived;
mod format;
mod group;

pub use derived::{DERIVED_MARKER, is_derived, make_derived};
pub use format::{MAX_AGGREGATED_MESSAGE_CHARS, MAX_ATTACHED_LOG_CHARS};
pub use group::StatusGroup;
