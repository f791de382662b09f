use hexokit_core::config::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
hexo_root = "/tmp/blog"

[logging]
level = "debug"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.hexo_root.display().to_string(), "/tmp/blog");
    assert!(rc.posts_dir.ends_with("source/_posts"));
    assert!(rc.drafts_dir.ends_with("source/_drafts"));
    assert_eq!(rc.deploy_command, "hexo deploy");
    assert_eq!(rc.logging.level, "debug");
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("hexokit/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
hexo_root = "/tmp/def"

[profiles.work]
hexo_root = "/tmp/work"
posts_dir = "{{hexo_root}}/content/posts"
deploy_command = "npx hexo deploy"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.hexo_root.display().to_string(), "/tmp/work");
    assert_eq!(rc.posts_dir.display().to_string(), "/tmp/work/content/posts");
    assert_eq!(rc.deploy_command, "npx hexo deploy");
}
