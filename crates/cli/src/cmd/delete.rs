use std::path::Path;

use dialoguer::Confirm;
use hexokit_core::classify;
use hexokit_core::frontmatter::FieldKind;

use crate::DeleteArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &DeleteArgs) {
    let rc = super::load_config(config, profile);
    let kind = FieldKind::from(args.kind);

    if !args.yes {
        let prompt = format!(
            "Delete {} \"{}\" from all posts?",
            kind.singular(),
            args.name
        );
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("aborted");
            return;
        }
    }

    let classification = super::classify_site(&rc);
    match classify::delete_value(&classification, kind, &args.name) {
        Ok(updated) => {
            println!(
                "deleted {} \"{}\" from {updated} post(s)",
                kind.singular(),
                args.name
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
