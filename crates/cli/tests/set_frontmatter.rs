use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn write(dir: &std::path::Path, rel: &str, content: impl AsRef<str>) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content.as_ref()).unwrap();
}

fn hexokit() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("hexokit"))
}

#[test]
fn set_tags_rewrites_only_the_tags_line() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(root, "post.md", "---\ntitle: Hello\ntags: foo\ndate: 2024-01-01\n---\nbody\n");

    let mut cmd = hexokit();
    cmd.arg("set").arg("tags").arg(root.join("post.md")).arg("foo").arg("bar");
    cmd.assert().success().stdout(predicate::str::contains("OK   hexokit set"));

    let content = fs::read_to_string(root.join("post.md")).unwrap();
    assert_eq!(content, "---\ntitle: Hello\ntags: [foo, bar]\ndate: 2024-01-01\n---\nbody\n");
}

#[test]
fn set_categories_normalizes_path_input() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(root, "post.md", "---\ntitle: Hello\n---\nbody\n");

    let mut cmd = hexokit();
    cmd.arg("set").arg("categories").arg(root.join("post.md")).arg("Tech/Programming");
    cmd.assert().success();

    let content = fs::read_to_string(root.join("post.md")).unwrap();
    assert_eq!(
        content,
        "---\ncategories:\n  - [Tech, Programming]\ntitle: Hello\n---\nbody\n"
    );
}

#[test]
fn set_without_values_clears_the_field() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(root, "post.md", "---\ntags: [a, b]\n---\n");

    let mut cmd = hexokit();
    cmd.arg("set").arg("tags").arg(root.join("post.md"));
    cmd.assert().success();

    let content = fs::read_to_string(root.join("post.md")).unwrap();
    assert_eq!(content, "---\ntags: []\n---\n");
}

#[test]
fn set_skips_files_without_front_matter() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    let original = "# Plain document\n\nNo metadata here.\n";
    write(root, "plain.md", original);

    let mut cmd = hexokit();
    cmd.arg("set").arg("tags").arg(root.join("plain.md")).arg("x");
    cmd.assert().success().stdout(predicate::str::contains("no front matter"));

    let content = fs::read_to_string(root.join("plain.md")).unwrap();
    assert_eq!(content, original, "file must be untouched");
}

#[test]
fn show_prints_parsed_metadata() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(
        root,
        "post.md",
        "---\ntitle: Hello\ndate: 2024-01-01\ntags: [a, b]\ncategories:\n  - [Tech, Rust]\n---\n",
    );

    let mut cmd = hexokit();
    cmd.arg("show").arg(root.join("post.md"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("title: Hello"))
        .stdout(predicate::str::contains("tags: a, b"))
        .stdout(predicate::str::contains("categories: Tech / Rust"));
}
