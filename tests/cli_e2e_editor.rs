//! End-to-end tests for the `editor` command.
//!
//! These tests invoke the actual CLI binary and validate eslint
//! working-directory registration in `.vscode/settings.json`.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn test_editor_add_normalizes_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child(".vscode/settings.json");
    settings
        .write_str(r#"{"eslint.workingDirectories": []}"#)
        .unwrap();

    let mut cmd = cargo_bin_cmd!("workspace-gen");
    cmd.current_dir(temp.path())
        .args(["editor", "add", "shared"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added './shared' to settings.json"));

    settings.assert(predicate::str::contains("./shared"));
}

#[test]
fn test_editor_add_twice_registers_once() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child(".vscode/settings.json");
    settings
        .write_str(r#"{"eslint.workingDirectories": []}"#)
        .unwrap();

    for arg in ["shared", "./shared"] {
        let mut cmd = cargo_bin_cmd!("workspace-gen");
        cmd.current_dir(temp.path())
            .args(["editor", "add", arg])
            .assert()
            .success();
    }

    let content = std::fs::read_to_string(settings.path()).unwrap();
    assert_eq!(content.matches("./shared").count(), 1);
}

#[test]
fn test_editor_remove_accepts_either_spelling() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child(".vscode/settings.json");
    settings
        .write_str(r#"{"eslint.workingDirectories": ["./shared"]}"#)
        .unwrap();

    let mut cmd = cargo_bin_cmd!("workspace-gen");
    cmd.current_dir(temp.path())
        .args(["editor", "remove", "shared"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted './shared' from settings.json",
        ));

    settings.assert(predicate::str::contains("./shared").not());
}

#[test]
fn test_editor_preserves_other_settings() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child(".vscode/settings.json");
    settings
        .write_str(r#"{"editor.formatOnSave": true, "eslint.workingDirectories": []}"#)
        .unwrap();

    let mut cmd = cargo_bin_cmd!("workspace-gen");
    cmd.current_dir(temp.path())
        .args(["editor", "add", "pkg/a"])
        .assert()
        .success();

    settings.assert(predicate::str::contains("editor.formatOnSave"));
    settings.assert(predicate::str::contains("./pkg/a"));
}

#[test]
fn test_editor_add_fails_cleanly_without_settings_file() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("workspace-gen");
    cmd.current_dir(temp.path())
        .args(["editor", "add", "shared"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error modifying settings.json"));
}
