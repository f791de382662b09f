//! Best-effort YAML reads of the front matter block.
//!
//! Reading goes through `serde_yaml`; any parse failure degrades to the empty
//! record. Writes never come back through this module.

use serde_yaml::Value;

use super::locator::{locate_block, split_lines};
use super::types::{FieldKind, PostMetadata};

/// Read the normalized metadata record out of a document.
///
/// Total over any input string: a missing block, an unparsable block, or a
/// non-mapping block all yield `PostMetadata::default()`.
pub fn read(text: &str) -> PostMetadata {
    let lines = split_lines(text);
    let Some(block) = locate_block(&lines) else {
        return PostMetadata::default();
    };

    let yaml = lines[block.open + 1..block.close].join("\n");
    let Ok(doc) = serde_yaml::from_str::<Value>(&yaml) else {
        return PostMetadata::default();
    };
    if !doc.is_mapping() {
        return PostMetadata::default();
    }

    PostMetadata {
        tags: list_values(field(&doc, FieldKind::Tags), FieldKind::Tags),
        categories: list_values(field(&doc, FieldKind::Categories), FieldKind::Categories),
        title: scalar_field(&doc, "title"),
        date: scalar_field(&doc, "date"),
        raw_keys: doc
            .as_mapping()
            .map(|m| {
                m.keys()
                    .filter_map(|k| k.as_str().map(ToString::to_string))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Read accessor for pickers and classify operations: the current value list
/// for one field, empty when the field (or the whole block) is absent.
pub fn current_values(text: &str, kind: FieldKind) -> Vec<String> {
    let meta = read(text);
    match kind {
        FieldKind::Tags => meta.tags,
        FieldKind::Categories => meta.categories,
    }
}

/// Look up a field, falling back to its singular alias. An explicit null is
/// treated as absent so the alias still applies.
fn field(doc: &Value, kind: FieldKind) -> Option<&Value> {
    doc.get(kind.key())
        .filter(|v| !v.is_null())
        .or_else(|| doc.get(kind.singular()))
        .filter(|v| !v.is_null())
}

/// Normalize a field value into a flat string list.
///
/// A scalar becomes a one-element list. List items are stringified; for
/// categories a nested list `[a, b]` is flattened to `"a / b"` - the one
/// place list-of-list structure collapses into the flat model.
fn list_values(value: Option<&Value>, kind: FieldKind) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };

    match value {
        Value::Sequence(seq) => seq
            .iter()
            .filter_map(|item| match item {
                Value::Sequence(inner) if kind == FieldKind::Categories => {
                    let segments: Vec<String> =
                        inner.iter().filter_map(scalar_to_string).collect();
                    (!segments.is_empty()).then(|| segments.join(" / "))
                }
                other => scalar_to_string(other),
            })
            .collect(),
        scalar => scalar_to_string(scalar).map_or_else(Vec::new, |s| vec![s]),
    }
}

fn scalar_field(doc: &Value, key: &str) -> String {
    doc.get(key).and_then(scalar_to_string).unwrap_or_default()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
