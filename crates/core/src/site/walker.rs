//! Recursive discovery of markdown posts under a source directory.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum PostWalkerError {
    #[error("posts directory does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk posts directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("failed to read file metadata {0}: {1}")]
    MetadataError(String, #[source] std::io::Error),
}

/// A discovered markdown post.
#[derive(Debug, Clone)]
pub struct WalkedPost {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the walked root.
    pub relative_path: PathBuf,
    /// File modification time, used as the metadata cache key.
    pub modified: SystemTime,
}

/// Walker for discovering posts under one source directory
/// (typically `source/_posts` or `source/_drafts`).
#[derive(Debug)]
pub struct PostWalker {
    root: PathBuf,
    /// Folders to skip (relative paths from the walked root).
    excluded_folders: Vec<PathBuf>,
}

impl PostWalker {
    /// Create a new walker for the given directory.
    pub fn new(root: &Path) -> Result<Self, PostWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a new walker with folder exclusions, given either relative to
    /// the root or absolute.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, PostWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| PostWalkerError::MissingRoot(root.display().to_string()))?;

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Walk the directory and return all markdown posts, sorted by relative
    /// path. Hidden directories and build output are skipped.
    pub fn walk(&self) -> Result<Vec<WalkedPost>, PostWalkerError> {
        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                PostWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let metadata = path.metadata().map_err(|e| {
                PostWalkerError::MetadataError(path.display().to_string(), e)
            })?;

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            posts.push(WalkedPost {
                absolute_path: path.to_path_buf(),
                relative_path,
                modified: metadata.modified().unwrap_or(std::time::UNIX_EPOCH),
            });
        }

        posts.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(posts)
    }

    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        // Skip hidden files and directories
        if name.starts_with('.') {
            return true;
        }

        // Skip generated output and dependency directories
        if matches!(name.as_ref(), "node_modules" | "public") {
            return true;
        }

        if !self.excluded_folders.is_empty() {
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                for excluded in &self.excluded_folders {
                    if relative.starts_with(excluded) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// The canonicalized root being walked.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_posts() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("hello-world.md"), "---\ntitle: Hello\n---\n").unwrap();
        fs::write(root.join("second.md"), "---\ntitle: Second\n---\n").unwrap();

        fs::create_dir(root.join("2024")).unwrap();
        fs::write(root.join("2024/retro.md"), "---\ntitle: Retro\n---\n").unwrap();

        fs::create_dir(root.join(".deploy_git")).unwrap();
        fs::write(root.join(".deploy_git/old.md"), "stale").unwrap();

        fs::write(root.join("image.png"), [0u8; 4]).unwrap();

        dir
    }

    #[test]
    fn walk_finds_markdown_posts() {
        let site = create_test_posts();
        let walker = PostWalker::new(site.path()).unwrap();
        let posts = walker.walk().unwrap();

        let paths: Vec<_> = posts.iter().map(|p| p.relative_path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("2024/retro.md"),
                PathBuf::from("hello-world.md"),
                PathBuf::from("second.md"),
            ]
        );
    }

    #[test]
    fn walk_skips_hidden_and_non_markdown() {
        let site = create_test_posts();
        let walker = PostWalker::new(site.path()).unwrap();
        let posts = walker.walk().unwrap();

        let paths: Vec<_> =
            posts.iter().map(|p| p.relative_path.to_string_lossy().to_string()).collect();
        assert!(!paths.iter().any(|p| p.contains(".deploy_git")));
        assert!(!paths.iter().any(|p| p.contains("image.png")));
    }

    #[test]
    fn walk_with_exclusions() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("keep.md"), "# keep").unwrap();
        fs::create_dir_all(root.join("archive")).unwrap();
        fs::write(root.join("archive/old.md"), "# old").unwrap();

        let walker =
            PostWalker::with_exclusions(root, vec![PathBuf::from("archive")]).unwrap();
        let posts = walker.walk().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].relative_path, PathBuf::from("keep.md"));
    }

    #[test]
    fn missing_root_fails() {
        let result = PostWalker::new(Path::new("/nonexistent/posts"));
        assert!(matches!(result.unwrap_err(), PostWalkerError::MissingRoot(_)));
    }
}
