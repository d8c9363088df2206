//! Size-bounded message formatting.

/// Upper bound on the message of an aggregated status, in characters.
pub const MAX_AGGREGATED_MESSAGE_CHARS: usize = 8 * 1024;

/// Upper bound on each attached log line, in characters.
pub const MAX_ATTACHED_LOG_CHARS: usize = 512;

/// Cut `text` down to at most `max_chars` characters.
pub fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
    }
}

/// Render `logs` as the block appended to summarized messages, or an empty
/// string when there is nothing to attach.
pub fn recent_logs_block(logs: &[String]) -> String {
    if logs.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(logs.len() + 1);
    lines.push("\nRecent warning and error logs:".to_string());
    for log in logs {
        let mut line = format!("  {log}");
        truncate_chars(&mut line, MAX_ATTACHED_LOG_CHARS + 2);
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_chars() {
        let mut short = "abc".to_string();
        truncate_chars(&mut short, 5);
        assert_eq!(short, "abc");

        let mut exact = "abcde".to_string();
        truncate_chars(&mut exact, 5);
        assert_eq!(exact, "abcde");

        let mut long = "abcdefgh".to_string();
        truncate_chars(&mut long, 5);
        assert_eq!(long, "abcde");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let mut text = "ééééé".to_string();
        truncate_chars(&mut text, 3);
        assert_eq!(text, "ééé");
    }

    #[test]
    fn test_recent_logs_block() {
        assert_eq!(recent_logs_block(&[]), "");

        let logs = vec!["first".to_string(), "second".to_string()];
        assert_eq!(
            recent_logs_block(&logs),
            "\nRecent warning and error logs:\n  first\n  second"
        );
    }

    #[test]
    fn test_recent_logs_block_truncates_lines() {
        let logs = vec!["x".repeat(600)];
        let block = recent_logs_block(&logs);
        let line = block.lines().last().unwrap();
        assert_eq!(line, format!("  {}", "x".repeat(MAX_ATTACHED_LOG_CHARS)));
    }
}
