//! The Status value type.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use crate::Code;
use crate::escape::hex_escape;

/// A single frame of the stack trace captured alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrame {
    pub file_name: String,
    pub line_number: u32,
    pub function_name: String,
}

impl StackFrame {
    pub fn new(
        file_name: impl Into<String>,
        line_number: u32,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            line_number,
            function_name: function_name.into(),
        }
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} in {}",
            self.file_name, self.line_number, self.function_name
        )
    }
}

// Never exists for an OK status, so `code` is never `Code::Ok`.
#[derive(Debug, Clone)]
struct StatusState {
    code: Code,
    message: String,
    stack_trace: Vec<StackFrame>,
    payloads: BTreeMap<String, Bytes>,
}

/// Error-or-OK value shared by every layer of the system.
///
/// An OK status carries no allocation. A non-OK status holds its state
/// behind an [`Arc`]: cloning is O(1), and every mutating operation
/// detaches a private copy first when the state is shared, so a change made
/// through one handle is never observed through another.
#[must_use]
#[derive(Clone, Default)]
pub struct Status {
    state: Option<Arc<StatusState>>,
}

impl Status {
    /// The OK status.
    pub const OK: Status = Status { state: None };

    /// Create a non-OK status.
    ///
    /// # Panics
    /// Panics if `code` is [`Code::Ok`]; an OK status is [`Status::OK`].
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self::with_stack_trace(code, message, Vec::new())
    }

    /// Create a non-OK status carrying the stack trace it was raised from.
    ///
    /// # Panics
    /// Panics if `code` is [`Code::Ok`], including a raw
    /// [`Code::Unrecognized`] holding value 0. Raw codes holding a canonical
    /// value are stored as the named code.
    pub fn with_stack_trace(
        code: Code,
        message: impl Into<String>,
        stack_trace: Vec<StackFrame>,
    ) -> Self {
        let code = Code::from(code.value());
        assert_ne!(code, Code::Ok, "a non-OK status cannot use code OK");

        let status = Self {
            state: Some(Arc::new(StatusState {
                code,
                message: message.into(),
                stack_trace,
                payloads: BTreeMap::new(),
            })),
        };
        tracing::trace!(status = %status, "generated non-OK status");
        status
    }

    /// True if this status carries no error.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.state.is_none()
    }

    /// Get the status code, [`Code::Ok`] for OK.
    pub fn code(&self) -> Code {
        self.state.as_ref().map_or(Code::Ok, |state| state.code)
    }

    /// Get the error message, empty for OK.
    pub fn message(&self) -> &str {
        self.state.as_ref().map_or("", |state| state.message.as_str())
    }

    /// Get the stack trace, empty for OK.
    pub fn stack_trace(&self) -> &[StackFrame] {
        self.state
            .as_ref()
            .map_or(&[][..], |state| state.stack_trace.as_slice())
    }

    /// Keep the first error.
    ///
    /// If `self` is OK it becomes a copy of `other` (which may itself be
    /// OK); otherwise the call does nothing. Across a sequence of updates
    /// the first non-OK status wins.
    pub fn update(&mut self, other: &Status) {
        if self.is_ok() {
            *self = other.clone();
        }
    }

    /// Attach `value` under `type_url`, replacing any previous value.
    ///
    /// Does nothing on an OK status.
    pub fn set_payload(&mut self, type_url: impl Into<String>, value: impl Into<Bytes>) {
        if let Some(state) = self.state.as_mut() {
            Arc::make_mut(state)
                .payloads
                .insert(type_url.into(), value.into());
        }
    }

    /// Get the payload stored under `type_url`.
    pub fn payload(&self, type_url: &str) -> Option<Bytes> {
        self.state
            .as_ref()
            .and_then(|state| state.payloads.get(type_url).cloned())
    }

    /// Remove the payload stored under `type_url`.
    ///
    /// Returns true if a payload was present and has been removed.
    pub fn erase_payload(&mut self, type_url: &str) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if !state.payloads.contains_key(type_url) {
            return false;
        }
        Arc::make_mut(state).payloads.remove(type_url).is_some()
    }

    /// Visit every payload in key order.
    pub fn for_each_payload<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, &Bytes),
    {
        if let Some(state) = &self.state {
            for (type_url, value) in &state.payloads {
                visitor(type_url, value);
            }
        }
    }

    /// Explicitly discard this status.
    ///
    /// Does nothing at runtime. Call it where dropping an error is a
    /// deliberate decision, so the intent shows up in review.
    #[inline]
    pub fn ignore_error(&self) {}

    /// Convert into a `Result`, OK mapping to `Ok(())`.
    pub fn into_result(self) -> crate::Result<()> {
        if self.is_ok() { Ok(()) } else { Err(self) }
    }

    /// Message used when [`Status::check_ok`] fails.
    pub fn check_failure_message(&self, context: &str) -> String {
        format!("Non-OK-status: {context} status: {self}")
    }

    /// Assert that this status is OK.
    ///
    /// # Panics
    /// Panics with [`Status::check_failure_message`] if the status is not OK.
    #[track_caller]
    pub fn check_ok(&self, context: &str) {
        if !self.is_ok() {
            panic!("{}", self.check_failure_message(context));
        }
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                Arc::ptr_eq(a, b)
                    || (a.code == b.code && a.message == b.message && a.payloads == b.payloads)
            }
            _ => false,
        }
    }
}

impl Eq for Status {}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(state) = &self.state else {
            return f.write_str("OK");
        };

        write!(f, "{}: {}", state.code, state.message)?;
        for (type_url, value) in &state.payloads {
            write!(f, " [{}='{}']", type_url, hex_escape(value))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(state) = &self.state else {
            return f.write_str("OK");
        };

        writeln!(f, "{}", state.code)?;

        if !state.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", state.message)?;
        }

        if !state.payloads.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Payloads:")?;
            for (type_url, value) in &state.payloads {
                writeln!(f, "        {}: '{}'", type_url, hex_escape(value))?;
            }
        }

        if !state.stack_trace.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Stack trace:")?;
            for frame in &state.stack_trace {
                writeln!(f, "        {}", frame)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for Status {}

impl From<std::io::Error> for Status {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => Code::NotFound,
            std::io::ErrorKind::PermissionDenied => Code::PermissionDenied,
            std::io::ErrorKind::AlreadyExists => Code::AlreadyExists,
            std::io::ErrorKind::TimedOut => Code::DeadlineExceeded,
            std::io::ErrorKind::InvalidInput => Code::InvalidArgument,
            _ => Code::Unknown,
        };
        Status::new(code, err.to_string())
    }
}

impl Status {
    /// Create a CANCELLED status.
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(Code::Cancelled, message)
    }

    /// Create an UNKNOWN status.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Code::Unknown, message)
    }

    /// Create an INVALID_ARGUMENT status.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    /// Create a DEADLINE_EXCEEDED status.
    pub fn deadline_exceeded(message: impl Into<String>) -> Self {
        Self::new(Code::DeadlineExceeded, message)
    }

    /// Create a NOT_FOUND status.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Code::NotFound, message)
    }

    /// Create an ALREADY_EXISTS status.
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(Code::AlreadyExists, message)
    }

    /// Create a PERMISSION_DENIED status.
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(Code::PermissionDenied, message)
    }

    /// Create an UNAUTHENTICATED status.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(Code::Unauthenticated, message)
    }

    /// Create a RESOURCE_EXHAUSTED status.
    pub fn resource_exhausted(message: impl Into<String>) -> Self {
        Self::new(Code::ResourceExhausted, message)
    }

    /// Create a FAILED_PRECONDITION status.
    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::new(Code::FailedPrecondition, message)
    }

    /// Create an ABORTED status.
    pub fn aborted(message: impl Into<String>) -> Self {
        Self::new(Code::Aborted, message)
    }

    /// Create an OUT_OF_RANGE status.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(Code::OutOfRange, message)
    }

    /// Create an UNIMPLEMENTED status.
    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(Code::Unimplemented, message)
    }

    /// Create an INTERNAL status.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Code::Internal, message)
    }

    /// Create an UNAVAILABLE status.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(Code::Unavailable, message)
    }

    /// Create a DATA_LOSS status.
    pub fn data_loss(message: impl Into<String>) -> Self {
        Self::new(Code::DataLoss, message)
    }
}
