//! String utility functions for common string operations.

/// Characters treated as blank at every trim step of block extraction.
pub const BLANK_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

/// Trim blank characters (space, tab, line breaks) from both ends.
///
/// # Example
///
/// ```
/// use spinal::string_utils::trim_blank;
///
/// assert_eq!(trim_blank("\n\t js \r\n"), "js");
/// assert_eq!(trim_blank("   "), "");
/// ```
pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(BLANK_CHARS)
}

/// Split off the leading run of non-blank characters.
///
/// Returns `(token, rest)`. The token is empty when `s` starts with a blank
/// character or is empty.
///
/// # Example
///
/// ```
/// use spinal::string_utils::split_leading_token;
///
/// assert_eq!(split_leading_token("js\nconsole.log(1)"), ("js", "\nconsole.log(1)"));
/// assert_eq!(split_leading_token("py"), ("py", ""));
/// assert_eq!(split_leading_token(" py"), ("", " py"));
/// ```
pub fn split_leading_token(s: &str) -> (&str, &str) {
    let end = s.find(BLANK_CHARS).unwrap_or(s.len());
    s.split_at(end)
}
