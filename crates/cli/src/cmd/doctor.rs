use hexokit_core::config::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   hexokit doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("hexo_root: {}", rc.hexo_root.display());
            println!("posts_dir: {}", rc.posts_dir.display());
            println!("drafts_dir: {}", rc.drafts_dir.display());
            println!("deploy_command: {}", rc.deploy_command);
        }
        Err(e) => {
            println!("FAIL hexokit doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
