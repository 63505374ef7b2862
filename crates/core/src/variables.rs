//! Input-variable extraction from prompt content.
//!
//! Prompts reference placeholders in two shapes: `[CUSTOMER]` (upper-case
//! bracket tokens) and `${amount}` (dollar-brace tokens). When a submission
//! does not declare its variables explicitly, they are derived from the
//! content with [`extract_variables`]. The derivation is part of the data
//! contract and must stay deterministic: bracket tokens first, then dollar
//! tokens, each in first-occurrence order, duplicates removed.

use std::sync::LazyLock;

use regex::Regex;

/// Regex matching `[VARIABLE]` bracket tokens.
pub const BRACKET_PATTERN: &str = r"\[([A-Z_]+)\]";

/// Regex matching `${variable}` dollar-brace tokens.
pub const DOLLAR_PATTERN: &str = r"\$\{([A-Za-z_]+)\}";

static BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BRACKET_PATTERN).expect("valid regex"));

static DOLLAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOLLAR_PATTERN).expect("valid regex"));

/// Extract placeholder variable names from prompt content.
///
/// # Examples
///
/// ```
/// use suiteprompt_core::variables::extract_variables;
/// assert_eq!(
///     extract_variables("Find [CUSTOMER] with ${amount}"),
///     vec!["CUSTOMER", "amount"]
/// );
/// ```
pub fn extract_variables(content: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut variables = Vec::new();

    let bracket_names = BRACKET_RE
        .captures_iter(content)
        .map(|c| c[1].to_string());
    let dollar_names = DOLLAR_RE.captures_iter(content).map(|c| c[1].to_string());

    for name in bracket_names.chain(dollar_names) {
        if seen.insert(name.clone()) {
            variables.push(name);
        }
    }

    variables
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
