//! Integration tests for the indent command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::mdtidy_cmd;

#[test]
fn test_indent_normalizes_list_items_to_two_spaces() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("note.md"),
        "---\ntags:\n- a\n   - b\n\t- c\n    - d\n---\nbody\n",
    )
    .unwrap();

    mdtidy_cmd()
        .arg("indent")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 file(s)."));

    let content = fs::read_to_string(temp.path().join("note.md")).unwrap();
    assert_eq!(
        content,
        "---\ntags:\n  - a\n  - b\n  - c\n  - d\n---\nbody\n"
    );
}

#[test]
fn test_indent_leaves_non_list_lines_alone() {
    let temp = TempDir::new().unwrap();
    let original = "---\ntitle: a - b\nkey: value\n---\n- body list stays\n";
    fs::write(temp.path().join("note.md"), original).unwrap();

    mdtidy_cmd()
        .arg("indent")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 0 file(s)."));

    let content = fs::read_to_string(temp.path().join("note.md")).unwrap();
    assert_eq!(content, original);
}

#[test]
fn test_indent_second_run_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("note.md"),
        "---\ntags:\n- a\n---\n",
    )
    .unwrap();

    mdtidy_cmd()
        .arg("indent")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 file(s)."));

    mdtidy_cmd()
        .arg("indent")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 0 file(s)."));
}

#[test]
fn test_indent_only_touches_the_front_matter_region() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("note.md"),
        "---\nitems:\n- a\n---\n- body item\n   - another\n",
    )
    .unwrap();

    mdtidy_cmd()
        .arg("indent")
        .arg(temp.path())
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("note.md")).unwrap();
    assert_eq!(
        content,
        "---\nitems:\n  - a\n---\n- body item\n   - another\n"
    );
}
