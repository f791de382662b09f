//! Subcommand implementations and shared plumbing.

pub mod add;
pub mod delete;
pub mod deploy;
pub mod doctor;
pub mod list;
pub mod rename;
pub mod set;
pub mod show;

use std::path::Path;

use hexokit_core::classify::{Classification, MetadataStore};
use hexokit_core::config::{ConfigLoader, ResolvedConfig};
use hexokit_core::site::{PostWalker, WalkedPost};

/// Load configuration and initialize logging, exiting on failure.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc);
            rc
        }
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    }
}

/// Walk posts and drafts. A missing drafts directory is tolerated; a missing
/// posts directory is fatal.
pub fn walk_site(rc: &ResolvedConfig) -> Vec<WalkedPost> {
    let mut posts = walk_dir_or_exit(&rc.posts_dir, &rc.excluded_folders);

    if rc.drafts_dir.is_dir() {
        match PostWalker::with_exclusions(&rc.drafts_dir, rc.excluded_folders.clone())
            .and_then(|w| w.walk())
        {
            Ok(mut drafts) => posts.append(&mut drafts),
            Err(e) => tracing::warn!("skipping drafts: {e}"),
        }
    }

    posts
}

fn walk_dir_or_exit(dir: &Path, excluded: &[std::path::PathBuf]) -> Vec<WalkedPost> {
    let walked = PostWalker::with_exclusions(dir, excluded.to_vec()).and_then(|w| w.walk());
    match walked {
        Ok(posts) => posts,
        Err(e) => {
            eprintln!("Error scanning posts: {e}");
            std::process::exit(1);
        }
    }
}

/// Scan the whole site and group posts by tag and category.
pub fn classify_site(rc: &ResolvedConfig) -> Classification {
    let posts = walk_site(rc);
    MetadataStore::new().classify(&posts)
}
