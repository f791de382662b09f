//! Front matter location, reading, serialization, and patching.
//!
//! This module provides functionality to:
//! - Locate the YAML front matter block and individual keys inside it
//! - Read tags, categories, title and date out of the block
//! - Serialize tag/category lists back into Hexo's on-disk conventions
//! - Patch a single key in place, leaving the rest of the document untouched
//!
//! Writes never round-trip through a YAML serializer. Reformatting the whole
//! block would destroy user formatting, so edits are computed as line-range
//! replacements over the original text.

pub mod locator;
pub mod normalize;
pub mod patch;
pub mod reader;
pub mod serializer;
pub mod span_cache;
pub mod types;

pub use locator::{DELIMITER, locate_block, locate_key, split_lines};
pub use normalize::normalize_category;
pub use patch::{apply_edit, compute_edit};
pub use reader::{current_values, read};
pub use serializer::serialize;
pub use span_cache::SpanCache;
pub use types::{BlockSpan, FieldKind, KeyEdit, KeySpan, PostMetadata};
