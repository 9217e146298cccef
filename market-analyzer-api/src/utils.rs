//! Log helpers.

/// Maximum number of bytes to include in truncated log output.
///
/// A generated report is routinely hundreds of kilobytes; debug logs keep
/// only the head of the body.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging.
///
/// Strings within the limit pass through unchanged; longer ones keep their
/// first [`TRUNCATE_LIMIT`] bytes (backed up to a char boundary, the
/// bodies are Portuguese text) plus a suffix with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_within_limit_passes_through() {
        assert_eq!(truncate_for_log("ok"), "ok");
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_keeps_head_and_total_length() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&s[..TRUNCATE_LIMIT]));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn never_splits_a_multibyte_char() {
        let s = "análise ".repeat(100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }
}
