//! Canonical status codes.

use std::borrow::Cow;
use std::fmt;

use strum_macros::{EnumString, IntoStaticStr};

/// The canonical error code carried by a [`crate::Status`].
///
/// The named variants and their integer values are a stability contract:
/// consumers match on the uppercase names produced by [`error_name`]. Any
/// integer outside the canonical set is kept verbatim in
/// [`Code::Unrecognized`] so formatting never fails on codes introduced by a
/// newer peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    // =========================================================================
    // Success
    // =========================================================================
    /// Not an error.
    #[default]
    Ok,

    // =========================================================================
    // Canonical error codes
    // =========================================================================
    /// The operation was cancelled, typically by the caller.
    Cancelled,

    /// Unknown error, also used when converting foreign errors.
    Unknown,

    /// The caller specified an invalid argument.
    InvalidArgument,

    /// The deadline expired before the operation could complete.
    DeadlineExceeded,

    /// Some requested entity was not found.
    NotFound,

    /// The entity a caller attempted to create already exists.
    AlreadyExists,

    /// The caller lacks permission for the operation.
    PermissionDenied,

    /// Some resource has been exhausted.
    ResourceExhausted,

    /// The system is not in a state required for the operation.
    FailedPrecondition,

    /// The operation was aborted, typically due to a concurrency issue.
    Aborted,

    /// The operation was attempted past the valid range.
    OutOfRange,

    /// The operation is not implemented or supported.
    Unimplemented,

    /// An internal invariant was broken.
    Internal,

    /// The service is currently unavailable.
    Unavailable,

    /// Unrecoverable data loss or corruption.
    DataLoss,

    /// The request does not have valid authentication credentials.
    Unauthenticated,

    // =========================================================================
    // Fallback
    // =========================================================================
    /// An integer code outside the canonical set.
    #[strum(disabled)]
    Unrecognized(i32),
}

impl Code {
    /// Every canonical code, in integer order.
    pub const CANONICAL: [Code; 17] = [
        Code::Ok,
        Code::Cancelled,
        Code::Unknown,
        Code::InvalidArgument,
        Code::DeadlineExceeded,
        Code::NotFound,
        Code::AlreadyExists,
        Code::PermissionDenied,
        Code::ResourceExhausted,
        Code::FailedPrecondition,
        Code::Aborted,
        Code::OutOfRange,
        Code::Unimplemented,
        Code::Internal,
        Code::Unavailable,
        Code::DataLoss,
        Code::Unauthenticated,
    ];

    /// The integer value of this code.
    pub const fn value(self) -> i32 {
        match self {
            Code::Ok => 0,
            Code::Cancelled => 1,
            Code::Unknown => 2,
            Code::InvalidArgument => 3,
            Code::DeadlineExceeded => 4,
            Code::NotFound => 5,
            Code::AlreadyExists => 6,
            Code::PermissionDenied => 7,
            Code::ResourceExhausted => 8,
            Code::FailedPrecondition => 9,
            Code::Aborted => 10,
            Code::OutOfRange => 11,
            Code::Unimplemented => 12,
            Code::Internal => 13,
            Code::Unavailable => 14,
            Code::DataLoss => 15,
            Code::Unauthenticated => 16,
            Code::Unrecognized(raw) => raw,
        }
    }

    /// True only for [`Code::Ok`].
    pub const fn is_ok(self) -> bool {
        matches!(self, Code::Ok)
    }

    /// Uppercase name of the code, `UNKNOWN_CODE(<n>)` outside the canonical set.
    pub fn name(self) -> Cow<'static, str> {
        match self {
            Code::Unrecognized(raw) => Cow::Owned(format!("UNKNOWN_CODE({raw})")),
            known => Cow::Borrowed(known.into()),
        }
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        usize::try_from(value)
            .ok()
            .and_then(|index| Code::CANONICAL.get(index).copied())
            .unwrap_or(Code::Unrecognized(value))
    }
}

impl From<Code> for i32 {
    fn from(code: Code) -> Self {
        code.value()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Uppercase name for `code`.
pub fn error_name(code: Code) -> Cow<'static, str> {
    code.name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_error_name() {
        assert_eq!(error_name(Code::Ok), "OK");
        assert_eq!(error_name(Code::NotFound), "NOT_FOUND");
        assert_eq!(error_name(Code::InvalidArgument), "INVALID_ARGUMENT");
        assert_eq!(error_name(Code::DataLoss), "DATA_LOSS");
        assert_eq!(error_name(Code::Unauthenticated), "UNAUTHENTICATED");
    }

    #[test]
    fn test_unrecognized_name() {
        assert_eq!(error_name(Code::from(42)), "UNKNOWN_CODE(42)");
        assert_eq!(error_name(Code::from(-1)), "UNKNOWN_CODE(-1)");
        assert_eq!(Code::Unrecognized(99).to_string(), "UNKNOWN_CODE(99)");
    }

    #[test]
    fn test_integer_values() {
        for (index, code) in Code::CANONICAL.iter().enumerate() {
            assert_eq!(code.value(), index as i32);
            assert_eq!(Code::from(index as i32), *code);
        }
        assert_eq!(Code::from(17), Code::Unrecognized(17));
        assert_eq!(i32::from(Code::Unrecognized(17)), 17);
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(Code::from_str("CANCELLED").unwrap(), Code::Cancelled);
        assert_eq!(
            Code::from_str("DEADLINE_EXCEEDED").unwrap(),
            Code::DeadlineExceeded
        );
        assert!(Code::from_str("cancelled").is_err());
        assert!(Code::from_str("UNRECOGNIZED").is_err());
    }
}
