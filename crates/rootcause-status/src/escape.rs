//! C-style hex escaping for payload rendering.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Escape `bytes` the way a C string literal would spell them, using `\xHH`
/// for anything that is not printable ASCII.
///
/// A hex digit that directly follows a `\xHH` escape is escaped as well, so
/// the result reads back unambiguously.
pub fn hex_escape(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut last_hex_escape = false;

    for &byte in bytes {
        let mut is_hex_escape = false;
        match byte {
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b'"' => out.push_str("\\\""),
            b'\'' => out.push_str("\\'"),
            b'\\' => out.push_str("\\\\"),
            _ if !is_printable(byte) || (last_hex_escape && byte.is_ascii_hexdigit()) => {
                out.push_str("\\x");
                out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
                out.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
                is_hex_escape = true;
            }
            _ => out.push(byte as char),
        }
        last_hex_escape = is_hex_escape;
    }

    out
}

fn is_printable(byte: u8) -> bool {
    (0x20..0x7f).contains(&byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii() {
        assert_eq!(hex_escape(b"hello world"), "hello world");
    }

    #[test]
    fn test_named_escapes() {
        assert_eq!(hex_escape(b"a\nb\tc\r"), "a\\nb\\tc\\r");
        assert_eq!(hex_escape(b"'q' \"d\" \\"), "\\'q\\' \\\"d\\\" \\\\");
    }

    #[test]
    fn test_non_printable() {
        assert_eq!(hex_escape(&[0x00, 0x7f, 0xff]), "\\x00\\x7f\\xff");
    }

    #[test]
    fn test_hex_digit_after_escape() {
        assert_eq!(hex_escape(&[0x01, b'a', b'z']), "\\x01\\x61z");
        assert_eq!(hex_escape(&[0x01, b'g']), "\\x01g");
    }
}
