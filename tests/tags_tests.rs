//! Integration tests for the tags command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::mdtidy_cmd;

#[test]
fn test_tags_converts_bracket_list_to_block_list() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("note.md"),
        "---\ntitle: note\ntags: [rust, cli]\n---\nbody\n",
    )
    .unwrap();

    mdtidy_cmd()
        .arg("tags")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 file(s)."));

    let content = fs::read_to_string(temp.path().join("note.md")).unwrap();
    assert_eq!(
        content,
        "---\ntitle: note\ntags:\n  - rust\n  - cli\n---\nbody\n"
    );
}

#[test]
fn test_tags_keeps_empty_list_inline() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("empty.md"),
        "---\ntags: [ , , ]\n---\nbody\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("already.md"),
        "---\ntags: []\n---\nbody\n",
    )
    .unwrap();

    mdtidy_cmd()
        .arg("tags")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 file(s)."));

    let empty = fs::read_to_string(temp.path().join("empty.md")).unwrap();
    let already = fs::read_to_string(temp.path().join("already.md")).unwrap();
    assert_eq!(empty, "---\ntags: []\n---\nbody\n");
    assert_eq!(already, "---\ntags: []\n---\nbody\n");
}

#[test]
fn test_tags_ignores_documents_without_front_matter() {
    let temp = TempDir::new().unwrap();
    let original = "intro line\n---\ntags: [a, b]\n---\n";
    fs::write(temp.path().join("no_fm.md"), original).unwrap();

    mdtidy_cmd()
        .arg("tags")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 0 file(s)."));

    let content = fs::read_to_string(temp.path().join("no_fm.md")).unwrap();
    assert_eq!(content, original);
}

#[test]
fn test_tags_second_run_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("note.md"),
        "---\ntags: [a, b]\n---\nbody\n",
    )
    .unwrap();

    mdtidy_cmd()
        .arg("tags")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 file(s)."));

    mdtidy_cmd()
        .arg("tags")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 0 file(s)."));
}

#[test]
fn test_tags_accepts_single_file_target() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("note.md");
    fs::write(&path, "---\ntags: [solo]\n---\n").unwrap();

    mdtidy_cmd()
        .arg("tags")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("updated: "))
        .stdout(predicate::str::contains("Updated 1 file(s)."));

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "---\ntags:\n  - solo\n---\n");
}
