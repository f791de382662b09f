//! Classification data types.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::frontmatter::FieldKind;

/// One post's metadata as seen by the aggregation layer.
#[derive(Debug, Clone)]
pub struct PostRecord {
    /// Absolute path to the post file.
    pub path: PathBuf,
    pub tags: Vec<String>,
    /// Canonical category paths (`"Tech / Programming"`).
    pub categories: Vec<String>,
    pub title: String,
    pub date: String,
    /// Modification time at read; the cache key.
    pub mtime: SystemTime,
}

/// All posts sharing one tag or category value.
#[derive(Debug, Clone)]
pub struct ClassifyGroup {
    pub name: String,
    /// Posts in walk order.
    pub files: Vec<PostRecord>,
}

/// The full tag and category grouping of a post collection.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Groups ordered by first appearance.
    pub tags: Vec<ClassifyGroup>,
    pub categories: Vec<ClassifyGroup>,
}

impl Classification {
    /// Group a set of post records by their tag and category values.
    pub fn build(records: Vec<PostRecord>) -> Self {
        let mut classification = Self::default();
        for record in records {
            for tag in &record.tags {
                push_group(&mut classification.tags, tag, &record);
            }
            for category in &record.categories {
                push_group(&mut classification.categories, category, &record);
            }
        }
        classification
    }

    /// Find one group by kind and name.
    pub fn group(&self, kind: FieldKind, name: &str) -> Option<&ClassifyGroup> {
        let groups = match kind {
            FieldKind::Tags => &self.tags,
            FieldKind::Categories => &self.categories,
        };
        groups.iter().find(|g| g.name == name)
    }
}

fn push_group(groups: &mut Vec<ClassifyGroup>, name: &str, record: &PostRecord) {
    match groups.iter_mut().find(|g| g.name == name) {
        Some(group) => group.files.push(record.clone()),
        None => groups.push(ClassifyGroup {
            name: name.to_string(),
            files: vec![record.clone()],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    fn record(path: &str, tags: &[&str], categories: &[&str]) -> PostRecord {
        PostRecord {
            path: PathBuf::from(path),
            tags: tags.iter().map(ToString::to_string).collect(),
            categories: categories.iter().map(ToString::to_string).collect(),
            title: String::new(),
            date: String::new(),
            mtime: UNIX_EPOCH,
        }
    }

    #[test]
    fn groups_by_first_appearance() {
        let classification = Classification::build(vec![
            record("a.md", &["rust", "cli"], &["Tech"]),
            record("b.md", &["cli"], &["Tech / Programming"]),
        ]);

        let names: Vec<_> = classification.tags.iter().map(|g| g.name.clone()).collect();
        assert_eq!(names, vec!["rust", "cli"]);

        let cli = classification.group(FieldKind::Tags, "cli").unwrap();
        assert_eq!(cli.files.len(), 2);

        let cats: Vec<_> =
            classification.categories.iter().map(|g| g.name.clone()).collect();
        assert_eq!(cats, vec!["Tech", "Tech / Programming"]);
    }

    #[test]
    fn group_lookup_misses() {
        let classification = Classification::build(vec![record("a.md", &["rust"], &[])]);
        assert!(classification.group(FieldKind::Tags, "nope").is_none());
        assert!(classification.group(FieldKind::Categories, "rust").is_none());
    }
}
