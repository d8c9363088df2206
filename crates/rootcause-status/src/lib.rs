//! # rootcause-status
//!
//! The error vocabulary shared across the system: a [`Status`] is either OK
//! or a canonical [`Code`] with a message, an optional stack trace and keyed
//! binary payloads.
//!
//! ## Usage
//!
//! ```rust
//! use rootcause_status::{Code, Status};
//!
//! fn lookup(key: &str) -> rootcause_status::Result<u64> {
//!     let mut status = Status::not_found(format!("key '{key}' not found"));
//!     status.set_payload("type.rootcause/key", key.to_string());
//!     Err(status)
//! }
//!
//! let err = lookup("alpha").unwrap_err();
//! assert_eq!(err.code(), Code::NotFound);
//! assert!(err.to_string().starts_with("NOT_FOUND: key 'alpha' not found"));
//! ```
//!
//! ## Principles
//!
//! - OK never allocates; non-OK state is shared copy-on-write
//! - The first error wins when folding statuses with [`Status::update`]
//! - Dropping an error on purpose is spelled [`Status::ignore_error`]

mod code;
mod escape;
mod status;

pub use bytes::Bytes;
pub use code::{Code, error_name};
pub use escape::hex_escape;
pub use status::{StackFrame, Status};

/// Result type alias using [`Status`] as the error.
pub type Result<T> = std::result::Result<T, Status>;
