use std::path::Path;

use hexokit_core::deploy::run_deploy;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = super::load_config(config, profile);

    println!("deploying with '{}' in {}", rc.deploy_command, rc.hexo_root.display());
    match run_deploy(&rc) {
        Ok(()) => println!("OK   hexokit deploy"),
        Err(e) => {
            eprintln!("FAIL hexokit deploy");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
