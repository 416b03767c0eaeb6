/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Truncate text to at most `max_length` characters, appending [`ELLIPSIS`]
/// when anything was cut.
///
/// Length is counted in `char`s, so multibyte text is never split inside a
/// character. The marker is always appended in full, even when it is longer
/// than `max_length` itself.
pub fn truncate_string(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + ELLIPSIS.len());
            truncated.push_str(&text[..cut]);
            truncated.push_str(ELLIPSIS);
            truncated
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(
            truncate_string("A-tisket a-tasket A green and yellow basket", 8),
            "A-tisket..."
        );
    }

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_exact_length_unchanged() {
        assert_eq!(truncate_string("Peter Piper", 11), "Peter Piper");
        assert_eq!(truncate_string("", 0), "");
    }

    #[test]
    fn test_marker_longer_than_limit() {
        assert_eq!(truncate_string("A-", 1), "A...");
        assert_eq!(truncate_string("abc", 0), "...");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(truncate_string("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_string("日本語", 3), "日本語");
        assert_eq!(truncate_string("日本語", 2), "日本...");
    }
}
