//! Front matter types and data structures.

/// The two front matter fields hexokit edits.
///
/// Hexo serializes them differently: tags as a flow sequence, categories as a
/// block sequence whose items may themselves be bracketed sub-lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Tags,
    Categories,
}

impl FieldKind {
    /// The YAML key this field is written under.
    pub fn key(self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::Categories => "categories",
        }
    }

    /// Singular alias accepted when reading (`tag:`, `category:`).
    pub fn singular(self) -> &'static str {
        match self {
            Self::Tags => "tag",
            Self::Categories => "category",
        }
    }

    /// Parse from a user-facing name (case-insensitive, singular accepted).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tags" | "tag" => Some(Self::Tags),
            "categories" | "category" => Some(Self::Categories),
            _ => None,
        }
    }
}

/// Line span of the front matter block delimiters.
///
/// `open` and `close` index the two `---` lines; the YAML content lives
/// strictly between them. Invariant: `open < close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub open: usize,
    pub close: usize,
}

/// Inclusive line range owned by one key inside the block: the key's own line
/// plus any continuation lines (list items, indented lines, blanks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpan {
    pub start: usize,
    pub end: usize,
}

/// A line-range replacement computed by the patch engine.
///
/// Replaces lines `start..end` (half-open) with `replacement`. An empty range
/// (`start == end`) is an insertion before `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEdit {
    pub start: usize,
    pub end: usize,
    pub replacement: Vec<String>,
}

/// Normalized metadata read from one post.
///
/// Categories are flattened: a nested source value `[a, b]` becomes the
/// single string `"a / b"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMetadata {
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub title: String,
    pub date: String,
    /// Top-level keys present in the block, for enumeration only.
    pub raw_keys: Vec<String>,
}
