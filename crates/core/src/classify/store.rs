//! Cached metadata reads keyed by file mtime.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local};

use crate::frontmatter;
use crate::site::WalkedPost;

use super::types::{Classification, PostRecord};

struct CachedRecord {
    mtime: SystemTime,
    record: PostRecord,
}

/// Per-process metadata cache.
///
/// Records are recomputed wholesale whenever a file's mtime moves and never
/// mutated in place. A file that cannot be read degrades to a default record
/// (title from the file stem, date from the mtime) instead of failing the
/// whole scan.
#[derive(Default)]
pub struct MetadataStore {
    cache: HashMap<PathBuf, CachedRecord>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one post's metadata, reusing the cached record when the mtime
    /// matches.
    pub fn read_post(&mut self, path: &Path, mtime: SystemTime) -> PostRecord {
        if let Some(hit) = self.cache.get(path) {
            if hit.mtime == mtime {
                return hit.record.clone();
            }
        }

        let record = match fs::read_to_string(path) {
            Ok(text) => {
                let meta = frontmatter::read(&text);
                PostRecord {
                    path: path.to_path_buf(),
                    tags: meta.tags,
                    categories: meta.categories,
                    title: meta.title,
                    date: meta.date,
                    mtime,
                }
            }
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                fallback_record(path, mtime)
            }
        };

        self.cache.insert(path.to_path_buf(), CachedRecord { mtime, record: record.clone() });
        record
    }

    /// Read every walked post and return the records in walk order.
    pub fn scan(&mut self, posts: &[WalkedPost]) -> Vec<PostRecord> {
        posts
            .iter()
            .map(|p| self.read_post(&p.absolute_path, p.modified))
            .collect()
    }

    /// Scan and group in one step.
    pub fn classify(&mut self, posts: &[WalkedPost]) -> Classification {
        Classification::build(self.scan(posts))
    }

    /// Drop one cached entry, e.g. after writing the file.
    pub fn invalidate(&mut self, path: &Path) {
        self.cache.remove(path);
    }
}

fn fallback_record(path: &Path, mtime: SystemTime) -> PostRecord {
    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .to_string();
    let date = if mtime == UNIX_EPOCH {
        String::new()
    } else {
        DateTime::<Local>::from(mtime).format("%Y-%m-%d %H:%M:%S").to_string()
    };
    PostRecord {
        path: path.to_path_buf(),
        tags: Vec::new(),
        categories: Vec::new(),
        title,
        date,
        mtime,
    }
}
