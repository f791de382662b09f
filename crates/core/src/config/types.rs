use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Root of the Hexo site (the directory holding `_config.yml`).
    pub hexo_root: String,
    /// Published posts. Defaults to Hexo's `source/_posts`.
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,
    /// Drafts. Defaults to Hexo's `source/_drafts`; ignored when absent on disk.
    #[serde(default = "default_drafts_dir")]
    pub drafts_dir: String,
    /// Shell command run by `hexokit deploy`.
    #[serde(default = "default_deploy_command")]
    pub deploy_command: String,
    /// Folders to exclude from scanning (relative to the posts/drafts dirs).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

fn default_posts_dir() -> String {
    "{{hexo_root}}/source/_posts".to_string()
}

fn default_drafts_dir() -> String {
    "{{hexo_root}}/source/_drafts".to_string()
}

fn default_deploy_command() -> String {
    "hexo deploy".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub hexo_root: PathBuf,
    pub posts_dir: PathBuf,
    pub drafts_dir: PathBuf,
    pub deploy_command: String,
    pub excluded_folders: Vec<PathBuf>,
    pub logging: LoggingConfig,
}
