//! Bulk mutations over all posts in a classify group.
//!
//! Each operation iterates a group's file list and pushes every change
//! through the front matter patch engine, so only the affected key's lines
//! are rewritten. Files are re-read at edit time; the aggregated records are
//! only used to decide which files belong to the group and what their value
//! lists were.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::frontmatter::{self, FieldKind};

use super::types::{Classification, ClassifyGroup};

#[derive(Debug, Error)]
pub enum ClassifyOpError {
    #[error("no {kind} named '{name}'")]
    GroupNotFound { kind: &'static str, name: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Add `new_name` to every post under the group `group_name`, skipping posts
/// that already carry it. Returns the number of files updated.
pub fn add_value(
    classification: &Classification,
    kind: FieldKind,
    group_name: &str,
    new_name: &str,
) -> Result<usize, ClassifyOpError> {
    let group = find_group(classification, kind, group_name)?;

    let mut updated = 0;
    for record in &group.files {
        let mut values = match kind {
            FieldKind::Tags => record.tags.clone(),
            FieldKind::Categories => record.categories.clone(),
        };
        if values.iter().any(|v| v == new_name) {
            continue;
        }
        values.push(new_name.to_string());
        if update_file(&record.path, kind, &values)? {
            updated += 1;
        }
    }
    Ok(updated)
}

/// Rename `old_name` to `new_name` across its group. When a post already
/// carries `new_name`, the old value is simply dropped so the list stays
/// duplicate-free. Returns the number of files updated.
pub fn rename_value(
    classification: &Classification,
    kind: FieldKind,
    old_name: &str,
    new_name: &str,
) -> Result<usize, ClassifyOpError> {
    let group = find_group(classification, kind, old_name)?;

    let mut updated = 0;
    for record in &group.files {
        let mut values = match kind {
            FieldKind::Tags => record.tags.clone(),
            FieldKind::Categories => record.categories.clone(),
        };
        let Some(index) = values.iter().position(|v| v == old_name) else {
            continue;
        };
        if values.iter().any(|v| v == new_name) {
            values.remove(index);
        } else {
            values[index] = new_name.to_string();
        }
        if update_file(&record.path, kind, &values)? {
            updated += 1;
        }
    }
    Ok(updated)
}

/// Remove `name` from every post in its group. Returns the number of files
/// updated.
pub fn delete_value(
    classification: &Classification,
    kind: FieldKind,
    name: &str,
) -> Result<usize, ClassifyOpError> {
    let group = find_group(classification, kind, name)?;

    let mut updated = 0;
    for record in &group.files {
        let mut values = match kind {
            FieldKind::Tags => record.tags.clone(),
            FieldKind::Categories => record.categories.clone(),
        };
        let Some(index) = values.iter().position(|v| v == name) else {
            continue;
        };
        values.remove(index);
        if update_file(&record.path, kind, &values)? {
            updated += 1;
        }
    }
    Ok(updated)
}

fn find_group<'a>(
    classification: &'a Classification,
    kind: FieldKind,
    name: &str,
) -> Result<&'a ClassifyGroup, ClassifyOpError> {
    classification.group(kind, name).ok_or_else(|| ClassifyOpError::GroupNotFound {
        kind: kind.singular(),
        name: name.to_string(),
    })
}

/// Re-read the file, patch the key, and write back only when the text
/// actually changed. Returns whether a write happened.
fn update_file(path: &Path, kind: FieldKind, values: &[String]) -> Result<bool, ClassifyOpError> {
    let text = fs::read_to_string(path).map_err(|e| ClassifyOpError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let new_text = frontmatter::apply_edit(&text, kind, values);
    if new_text == text {
        return Ok(false);
    }

    fs::write(path, &new_text).map_err(|e| ClassifyOpError::Write {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!("updated {} in {}", kind.key(), path.display());
    Ok(true)
}
