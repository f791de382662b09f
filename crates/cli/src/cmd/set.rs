use std::fs;

use hexokit_core::frontmatter::{
    self, FieldKind, locate_block, normalize_category, split_lines,
};

use crate::{Kind, SetArgs};

pub fn run(args: &SetArgs) {
    let kind = FieldKind::from(args.kind);

    let values: Vec<String> = match args.kind {
        Kind::Tags => args.values.clone(),
        Kind::Categories => args
            .values
            .iter()
            .map(|v| normalize_category(v))
            .filter(|v| !v.is_empty())
            .collect(),
    };

    let text = match fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {e}", args.file.display());
            std::process::exit(1);
        }
    };

    if locate_block(&split_lines(&text)).is_none() {
        println!("skipped: {} has no front matter block", args.file.display());
        return;
    }

    let new_text = frontmatter::apply_edit(&text, kind, &values);
    if new_text == text {
        println!("OK   hexokit set (no change)");
        return;
    }

    if let Err(e) = fs::write(&args.file, &new_text) {
        eprintln!("Error writing {}: {e}", args.file.display());
        std::process::exit(1);
    }

    println!("OK   hexokit set");
    println!("file: {}", args.file.display());
    if values.is_empty() {
        println!("{}: []", kind.key());
    } else {
        println!("{}: {}", kind.key(), values.join(", "));
    }
}
