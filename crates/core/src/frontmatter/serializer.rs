//! Serialization of value lists into Hexo's on-disk conventions.

use super::types::FieldKind;

/// Separator between the levels of a canonical category path.
pub const PATH_SEPARATOR: &str = " / ";

/// Render a value list as the text block for its key.
///
/// Tags use flow style: `tags: []`, `tags: x`, `tags: [x, y]`.
///
/// Categories use a bare scalar for a single flat value and block style
/// otherwise, with nested paths rendered as bracketed sub-lists:
///
/// ```text
/// categories:
///   - a
///   - [b, c]
/// ```
///
/// The exact shapes matter: Hexo distinguishes `[b, c]` (one nested
/// category) from two sibling categories.
pub fn serialize(kind: FieldKind, values: &[String]) -> String {
    let key = kind.key();
    match kind {
        FieldKind::Tags => match values {
            [] => format!("{key}: []"),
            [single] => format!("{key}: {single}"),
            many => format!("{key}: [{}]", many.join(", ")),
        },
        FieldKind::Categories => {
            if values.is_empty() {
                return format!("{key}: []");
            }
            if let [single] = values {
                if !single.contains(PATH_SEPARATOR) {
                    return format!("{key}: {single}");
                }
            }
            let mut out = format!("{key}:");
            for value in values {
                let segments: Vec<&str> = value.split(PATH_SEPARATOR).collect();
                if segments.len() > 1 {
                    out.push_str("\n  - [");
                    out.push_str(&segments.join(", "));
                    out.push(']');
                } else {
                    out.push_str("\n  - ");
                    out.push_str(segments[0]);
                }
            }
            out
        }
    }
}
