use std::path::Path;

use hexokit_core::classify;
use hexokit_core::frontmatter::{FieldKind, normalize_category};

use crate::{Kind, RenameArgs};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &RenameArgs) {
    let rc = super::load_config(config, profile);
    let kind = FieldKind::from(args.kind);

    let new_name = match args.kind {
        Kind::Tags => args.new.clone(),
        Kind::Categories => normalize_category(&args.new),
    };
    if new_name.is_empty() || new_name == args.old {
        println!("nothing to rename");
        return;
    }

    let classification = super::classify_site(&rc);
    match classify::rename_value(&classification, kind, &args.old, &new_name) {
        Ok(updated) => {
            println!(
                "renamed {} \"{}\" to \"{new_name}\" in {updated} post(s)",
                kind.singular(),
                args.old
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
