use std::path::Path;

use hexokit_core::classify;
use hexokit_core::frontmatter::{FieldKind, normalize_category};

use crate::{AddArgs, Kind};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &AddArgs) {
    let rc = super::load_config(config, profile);
    let kind = FieldKind::from(args.kind);

    let value = match args.kind {
        Kind::Tags => args.value.clone(),
        Kind::Categories => normalize_category(&args.value),
    };
    if value.is_empty() {
        eprintln!("Error: empty {} value", kind.singular());
        std::process::exit(2);
    }

    let classification = super::classify_site(&rc);
    match classify::add_value(&classification, kind, &args.group, &value) {
        Ok(0) => {
            println!(
                "all posts under \"{}\" already have {} \"{value}\"",
                args.group,
                kind.singular()
            );
        }
        Ok(updated) => {
            println!("added {} \"{value}\" to {updated} post(s)", kind.singular());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
