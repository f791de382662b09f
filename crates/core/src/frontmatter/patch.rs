//! The patch engine: minimal line-range edits to one front matter key.

use super::locator::{locate_block, locate_key, split_lines};
use super::serializer::serialize;
use super::types::{FieldKind, KeyEdit};

/// Compute the edit that sets `kind` to `values`.
///
/// Returns `None` when the document has no front matter block - there is
/// nothing editable. When the key exists its whole span (including
/// continuation lines) is replaced; otherwise the serialized lines are
/// inserted directly after the opening delimiter.
pub fn compute_edit(lines: &[&str], kind: FieldKind, values: &[String]) -> Option<KeyEdit> {
    let block = locate_block(lines)?;
    let replacement: Vec<String> =
        serialize(kind, values).split('\n').map(ToString::to_string).collect();

    let edit = match locate_key(lines, block, kind.key()) {
        Some(span) => KeyEdit { start: span.start, end: span.end + 1, replacement },
        None => KeyEdit { start: block.open + 1, end: block.open + 1, replacement },
    };
    Some(edit)
}

/// Whole-text variant of [`compute_edit`] for callers that rewrite the
/// document rather than splice a buffer. Every line outside the touched
/// key's span is preserved byte-for-byte; a document without front matter
/// comes back unchanged.
pub fn apply_edit(text: &str, kind: FieldKind, values: &[String]) -> String {
    let lines = split_lines(text);
    let Some(edit) = compute_edit(&lines, kind, values) else {
        return text.to_string();
    };

    let mut out: Vec<&str> =
        Vec::with_capacity(lines.len() + edit.replacement.len() - (edit.end - edit.start));
    out.extend_from_slice(&lines[..edit.start]);
    out.extend(edit.replacement.iter().map(String::as_str));
    out.extend_from_slice(&lines[edit.end..]);
    out.join("\n")
}
