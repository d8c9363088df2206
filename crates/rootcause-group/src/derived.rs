//! Marking of derived errors.
//!
//! A derived error is one raised in reaction to another error, such as the
//! cancellation of sibling work after a failure. Derived errors are left out
//! of root-cause reporting. The mark is a sentinel embedded in the message.

use rootcause_status::Status;

/// Sentinel placed at the front of a derived error's message.
pub const DERIVED_MARKER: &str = "[_Derived_]";

/// Return `status` marked as derived.
///
/// A status that is already derived, or OK, is returned unchanged. Otherwise
/// the result keeps the code and carries the marker in front of the
/// message; payloads and stack trace are not carried over.
pub fn make_derived(status: &Status) -> Status {
    if status.is_ok() || is_derived(status) {
        return status.clone();
    }
    Status::new(
        status.code(),
        format!("{}{}", DERIVED_MARKER, status.message()),
    )
}

/// True if the message of `status` contains the derived marker.
pub fn is_derived(status: &Status) -> bool {
    status.message().contains(DERIVED_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootcause_status::Code;

    #[test]
    fn test_make_derived() {
        let root = Status::cancelled("step cancelled");
        assert!(!is_derived(&root));

        let derived = make_derived(&root);
        assert!(is_derived(&derived));
        assert_eq!(derived.code(), Code::Cancelled);
        assert_eq!(derived.message(), "[_Derived_]step cancelled");
    }

    #[test]
    fn test_make_derived_is_idempotent() {
        for status in [
            Status::internal("a"),
            Status::not_found(""),
            Status::new(Code::from(77), "future"),
        ] {
            let once = make_derived(&status);
            let twice = make_derived(&once);
            assert!(is_derived(&once));
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_marker_anywhere_counts() {
        let status = Status::aborted("wrapped: [_Derived_]inner");
        assert!(is_derived(&status));
        assert_eq!(make_derived(&status), status);
    }

    #[test]
    fn test_ok_is_never_derived() {
        assert!(!is_derived(&Status::OK));
        assert!(make_derived(&Status::OK).is_ok());
    }
}
