//! Post discovery for a Hexo site.

pub mod walker;

pub use walker::{PostWalker, PostWalkerError, WalkedPost};
