//! Integration tests for the registration actions against real files.
//!
//! These exercise the full Load → Mutate → Write pipeline on a temporary
//! monorepo root: pnpm workspace registration in YAML and editor
//! working-directory registration in JSON, including the optional style
//! pass discovered from `.prettierrc`.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use workspace_gen::actions::{self, editor, workspace, ActionConfig, Context};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_yaml(root: &Path, rel: &str) -> Value {
    let content = fs::read_to_string(root.join(rel)).unwrap();
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
    serde_json::to_value(yaml).unwrap()
}

fn read_json(root: &Path, rel: &str) -> Value {
    serde_json::from_str(&fs::read_to_string(root.join(rel)).unwrap()).unwrap()
}

#[test]
fn test_workspace_add_extends_package_set() {
    // Scenario: {packages: ["pkg/a"]}, add "pkg/b".
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pnpm-workspace.yaml", "packages:\n  - pkg/a\n");
    let ctx = Context::new(dir.path());

    let outcome = workspace::add(&ctx, "pkg/b");
    assert!(outcome.success, "{}", outcome.message);

    let packages = read_yaml(dir.path(), "pnpm-workspace.yaml");
    let packages = packages["packages"].as_array().unwrap();
    // Set membership, not literal order.
    assert_eq!(packages.len(), 2);
    assert!(packages.contains(&json!("pkg/a")));
    assert!(packages.contains(&json!("pkg/b")));
}

#[test]
fn test_workspace_add_survives_repeated_runs() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pnpm-workspace.yaml", "packages: []\n");
    let ctx = Context::new(dir.path());

    workspace::add(&ctx, "pkg/a");
    let first = fs::read_to_string(dir.path().join("pnpm-workspace.yaml")).unwrap();
    workspace::add(&ctx, "pkg/a");
    let second = fs::read_to_string(dir.path().join("pnpm-workspace.yaml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_workspace_delete_then_add_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "pnpm-workspace.yaml",
        "packages:\n  - pkg/a\n  - pkg/b\n",
    );
    let ctx = Context::new(dir.path());

    workspace::delete(&ctx, "pkg/a");
    let packages = read_yaml(dir.path(), "pnpm-workspace.yaml");
    assert_eq!(packages["packages"], json!(["pkg/b"]));
}

#[test]
fn test_editor_add_normalizes_to_dotted_form() {
    // Scenario: {"eslint.workingDirectories": []}, add "shared".
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        ".vscode/settings.json",
        r#"{"eslint.workingDirectories": []}"#,
    );
    let ctx = Context::new(dir.path());

    let outcome = editor::add(&ctx, "shared");
    assert!(outcome.success, "{}", outcome.message);

    let settings = read_json(dir.path(), ".vscode/settings.json");
    assert_eq!(settings["eslint.workingDirectories"], json!(["./shared"]));
}

#[test]
fn test_style_configuration_reindents_settings_json() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), ".prettierrc", r#"{"tabWidth": 4}"#);
    write(
        dir.path(),
        ".vscode/settings.json",
        r#"{"eslint.workingDirectories": []}"#,
    );
    let ctx = Context::new(dir.path());

    editor::add(&ctx, "shared");

    let written = fs::read_to_string(dir.path().join(".vscode/settings.json")).unwrap();
    assert!(written.contains("    \"eslint.workingDirectories\""));
    assert!(written.ends_with('\n'));
}

#[test]
fn test_missing_style_configuration_falls_back_to_two_spaces() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        ".vscode/settings.json",
        r#"{"eslint.workingDirectories": []}"#,
    );
    let ctx = Context::new(dir.path());

    editor::add(&ctx, "shared");

    let written = fs::read_to_string(dir.path().join(".vscode/settings.json")).unwrap();
    assert!(written.contains("  \"eslint.workingDirectories\""));
    assert!(!written.contains("    \"eslint.workingDirectories\""));
}

#[test]
fn test_operations_on_different_manifests_compose() {
    // One generator run registering the same workspace in both manifests.
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pnpm-workspace.yaml", "packages: []\n");
    write(
        dir.path(),
        ".vscode/settings.json",
        r#"{"eslint.workingDirectories": []}"#,
    );
    let ctx = Context::new(dir.path());
    let config = ActionConfig {
        workspace: Some("pkg/widgets".to_string()),
        ..Default::default()
    };

    let first = actions::run(actions::ADD_PNPM_WORKSPACE, &ctx, &config, None);
    let second = actions::run(actions::ADD_ESLINT_WORKING_DIRECTORY, &ctx, &config, None);
    assert!(first.success);
    assert!(second.success);

    let packages = read_yaml(dir.path(), "pnpm-workspace.yaml");
    assert_eq!(packages["packages"], json!(["pkg/widgets"]));
    let settings = read_json(dir.path(), ".vscode/settings.json");
    assert_eq!(
        settings["eslint.workingDirectories"],
        json!(["./pkg/widgets"]),
    );
}

#[test]
fn test_failed_operation_does_not_undo_earlier_write() {
    // pnpm registration succeeds; editor registration fails (no settings
    // file). The earlier write must survive.
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pnpm-workspace.yaml", "packages: []\n");
    let ctx = Context::new(dir.path());
    let config = ActionConfig {
        workspace: Some("pkg/widgets".to_string()),
        ..Default::default()
    };

    let first = actions::run(actions::ADD_PNPM_WORKSPACE, &ctx, &config, None);
    let second = actions::run(actions::ADD_ESLINT_WORKING_DIRECTORY, &ctx, &config, None);
    assert!(first.success);
    assert!(!second.success);

    let packages = read_yaml(dir.path(), "pnpm-workspace.yaml");
    assert_eq!(packages["packages"], json!(["pkg/widgets"]));
}
