//! Line-level location of the front matter block and keys within it.

use super::types::{BlockSpan, KeySpan};

/// A front matter delimiter line contains exactly this after trimming.
pub const DELIMITER: &str = "---";

/// Split a document into lines without consuming any bytes.
///
/// Splits on `\n` only; a `\r` before the newline stays attached to its line.
/// Rejoining with `\n` reproduces the input byte-for-byte, which is what lets
/// the patch engine leave untouched lines untouched.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Find the front matter block: the first delimiter line opens it, the next
/// one closes it. Documents with fewer than two delimiter lines have no
/// front matter.
pub fn locate_block(lines: &[&str]) -> Option<BlockSpan> {
    let mut open = None;
    for (i, line) in lines.iter().enumerate() {
        if line.trim() == DELIMITER {
            match open {
                None => open = Some(i),
                Some(open) => return Some(BlockSpan { open, close: i }),
            }
        }
    }
    None
}

/// Find the line range owned by `key` inside `block`.
///
/// The first line starting with `<key>:` (case-sensitive) starts the span.
/// The span then extends over continuation lines: list items (`-` prefix),
/// indented lines, and blanks, stopping at the first other line or at the
/// closing delimiter.
pub fn locate_key(lines: &[&str], block: BlockSpan, key: &str) -> Option<KeySpan> {
    for i in block.open + 1..block.close {
        let is_key = lines[i]
            .strip_prefix(key)
            .is_some_and(|rest| rest.starts_with(':'));
        if !is_key {
            continue;
        }

        let mut end = i;
        while end + 1 < block.close && is_continuation(lines[end + 1]) {
            end += 1;
        }
        return Some(KeySpan { start: i, end });
    }
    None
}

fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t', '-']) || line.trim().is_empty()
}
