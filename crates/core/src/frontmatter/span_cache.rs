//! Memoized block-span lookups for repeatedly-queried documents.

use std::collections::HashMap;

use super::locator::{locate_block, split_lines};
use super::types::BlockSpan;

struct CachedSpan {
    version: u64,
    span: Option<BlockSpan>,
}

/// Cache of [`locate_block`] results keyed by document identity and a change
/// counter supplied by the caller (editor version, revision count).
///
/// Pure memoization: overwrite-on-miss, no eviction, no behavioral effect.
/// Stale entries are replaced the first time the document is queried with a
/// newer version.
#[derive(Default)]
pub struct SpanCache {
    entries: HashMap<String, CachedSpan>,
}

impl SpanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the block span for `text`, reusing the cached result when
    /// `version` matches the last call for this `identity`.
    pub fn block_span(&mut self, identity: &str, version: u64, text: &str) -> Option<BlockSpan> {
        if let Some(hit) = self.entries.get(identity) {
            if hit.version == version {
                return hit.span;
            }
        }

        let lines = split_lines(text);
        let span = locate_block(&lines);
        self.entries.insert(identity.to_string(), CachedSpan { version, span });
        span
    }
}
