//! Canonicalization of user-entered category input.

use super::serializer::PATH_SEPARATOR;

/// Normalize raw category input into the canonical `a / b / c` form.
///
/// Accepts either path syntax (`a/b/c`) or a bracketed literal
/// (`[a, 'b', "c"]`); both produce the same canonical string, which
/// round-trips through the serializer's path splitting.
pub fn normalize_category(input: &str) -> String {
    let trimmed = input.trim();

    let segments: Vec<String> = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        trimmed[1..trimmed.len() - 1]
            .split(',')
            .map(|s| strip_quotes(s.trim()).to_string())
            .collect()
    } else {
        input.split('/').map(|s| s.trim().to_string()).collect()
    };

    segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Strip one layer of surrounding quotes. Leading and trailing quotes are
/// removed independently, single or double.
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}
