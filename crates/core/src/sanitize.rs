//! Free-text input sanitization for community submissions.

/// Strip angle brackets from user input, then trim surrounding whitespace.
///
/// This is a deliberately naive markup strip, not an HTML sanitizer: encoded
/// or nested payloads pass through untouched. Submissions are only ever
/// rendered inside a reviewed pull request and a JSON data file, so the
/// stripped form is what gets persisted.
///
/// # Examples
///
/// ```
/// use suiteprompt_core::sanitize::sanitize_input;
/// assert_eq!(sanitize_input(" <b>Hi</b> "), "bHi/b");
/// ```
pub fn sanitize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect::<String>()
        .trim()
        .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_angle_brackets_then_trims() {
        assert_eq!(sanitize_input(" <b>Hi</b> "), "bHi/b");
    }

    #[test]
    fn plain_text_only_trimmed() {
        assert_eq!(sanitize_input("  hello world  "), "hello world");
    }

    #[test]
    fn script_tag_reduced_to_inner_text() {
        assert_eq!(
            sanitize_input("<script>alert(1)</script>"),
            "scriptalert(1)/script"
        );
    }

    #[test]
    fn encoded_payloads_pass_through() {
        // Not a general sanitizer: entities survive.
        assert_eq!(sanitize_input("&lt;b&gt;"), "&lt;b&gt;");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(sanitize_input("   "), "");
    }
}
