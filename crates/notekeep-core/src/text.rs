//! Line-ending and length helpers shared by the converter and the store

/// Convert CRLF (and lone CR) line endings to LF
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Convert any line endings to CRLF, the on-disk form of note files
pub fn to_crlf(text: &str) -> String {
    normalize_newlines(text).replace('\n', "\r\n")
}

/// Keep at most `max` characters (not bytes)
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_crlf_does_not_double_existing_crlf() {
        assert_eq!(to_crlf("a\nb"), "a\r\nb");
        assert_eq!(to_crlf("a\r\nb"), "a\r\nb");
        assert_eq!(to_crlf("a\rb\n"), "a\r\nb\r\n");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_truncate_chars_counts_chars() {
        assert_eq!(truncate_chars("가나다라", 2), "가나");
        assert_eq!(truncate_chars("ab", 10), "ab");
    }
}
