//! List command implementation.

use std::path::Path;

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::{Kind, ListArgs};

#[derive(Tabled, Serialize)]
struct ClassifyRow {
    name: String,
    posts: usize,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ListArgs) {
    let rc = super::load_config(config, profile);
    let classification = super::classify_site(&rc);

    let groups = match args.kind {
        Kind::Tags => &classification.tags,
        Kind::Categories => &classification.categories,
    };

    let rows: Vec<ClassifyRow> = groups
        .iter()
        .map(|g| ClassifyRow { name: g.name.clone(), posts: g.files.len() })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows).unwrap_or_default());
    } else if rows.is_empty() {
        let what = match args.kind {
            Kind::Tags => "tags",
            Kind::Categories => "categories",
        };
        println!("no {what} found");
    } else {
        println!("{}", Table::new(rows));
    }
}
