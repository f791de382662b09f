use std::fs;

use hexokit_core::frontmatter;

use crate::ShowArgs;

pub fn run(args: &ShowArgs) {
    let text = match fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {e}", args.file.display());
            std::process::exit(1);
        }
    };

    let meta = frontmatter::read(&text);
    println!("title: {}", meta.title);
    println!("date: {}", meta.date);
    println!("tags: {}", meta.tags.join(", "));
    println!("categories: {}", meta.categories.join(", "));
    println!("keys: {}", meta.raw_keys.join(", "));
}
