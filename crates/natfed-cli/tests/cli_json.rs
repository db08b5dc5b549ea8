//! Integration tests for `natfed --json` output.

#![cfg(unix)]

use std::process::{Command, Output};
use tempfile::TempDir;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "-q", "-p", "natfed-cli", "--bin", "natfed", "--"]);
    cmd
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("stdout should be valid JSON ({e}): {stdout}"))
}

/// Create a project with a tsconfig and a small node_modules tree.
fn create_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    std::fs::write(
        root.join("tsconfig.json"),
        r#"{
  // shared libs
  "compilerOptions": {
    "paths": {
      "shared-lib": ["libs/shared-lib/src/index.ts"],
      "other-lib": ["../outside/src/index.ts"],
    }
  }
}"#,
    )
    .unwrap();

    let pkg_dir = root.join("node_modules/esm-pkg");
    std::fs::create_dir_all(&pkg_dir).unwrap();
    std::fs::write(
        pkg_dir.join("package.json"),
        serde_json::to_string_pretty(&serde_json::json!({
            "name": "esm-pkg",
            "version": "3.1.4",
            "module": "./esm/index.js",
            "exports": {
                ".": { "default": "./fesm/esm-pkg.mjs" }
            }
        }))
        .unwrap(),
    )
    .unwrap();

    dir
}

#[test]
fn test_paths_json_share_all() {
    let project = create_project();
    let output = cargo_bin()
        .args(["--json", "paths"])
        .arg(project.path().join("tsconfig.json"))
        .output()
        .expect("Failed to run paths command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["ok"], true);

    let mapped = json["mapped_paths"].as_array().unwrap();
    assert_eq!(mapped.len(), 2);
    assert_eq!(mapped[0]["key"], "shared-lib");
    assert_eq!(
        mapped[0]["path"].as_str().unwrap(),
        project
            .path()
            .join("libs/shared-lib/src/index.ts")
            .to_str()
            .unwrap()
    );
    assert_eq!(
        mapped[1]["path"].as_str().unwrap(),
        project
            .path()
            .parent()
            .unwrap()
            .join("outside/src/index.ts")
            .to_str()
            .unwrap()
    );
}

#[test]
fn test_paths_json_share_only_relative_to_cwd() {
    let project = create_project();
    let output = cargo_bin()
        .arg("--cwd")
        .arg(project.path())
        .args(["--json", "paths", "tsconfig.json", "--share", "other-lib"])
        .output()
        .expect("Failed to run paths command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    let mapped = json["mapped_paths"].as_array().unwrap();
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped[0]["key"], "other-lib");
}

#[test]
fn test_paths_json_parse_error() {
    let project = create_project();
    std::fs::write(project.path().join("broken.json"), "{ \"compilerOptions\": ").unwrap();

    let output = cargo_bin()
        .args(["--json", "paths"])
        .arg(project.path().join("broken.json"))
        .output()
        .expect("Failed to run paths command");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "CONFIG_PARSE_FAILED");
}

#[test]
fn test_pkg_json_partial_resolution() {
    let project = create_project();
    let output = cargo_bin()
        .args(["--json", "pkg", "esm-pkg", "not-installed", "--project-root"])
        .arg(project.path())
        .output()
        .expect("Failed to run pkg command");

    // Missing packages are warnings, not failures.
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["ok"], true);

    let packages = json["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 2);

    assert_eq!(packages[0]["specifier"], "esm-pkg");
    assert_eq!(packages[0]["version"], "3.1.4");
    assert_eq!(packages[0]["source"], "exports");
    assert_eq!(
        packages[0]["entry_point"].as_str().unwrap(),
        project
            .path()
            .join("node_modules/esm-pkg/fesm/esm-pkg.mjs")
            .to_str()
            .unwrap()
    );

    assert_eq!(packages[1]["specifier"], "not-installed");
    assert_eq!(packages[1]["error"]["code"], "PACKAGE_NOT_FOUND");
}

#[test]
fn test_pkg_all() {
    let project = create_project();
    let output = cargo_bin()
        .arg("--cwd")
        .arg(project.path())
        .args(["--json", "pkg", "--all"])
        .output()
        .expect("Failed to run pkg command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    let packages = json["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0]["specifier"], "esm-pkg");
}

#[test]
fn test_pkg_without_specifiers_is_usage_error() {
    let project = create_project();
    let output = cargo_bin()
        .arg("--cwd")
        .arg(project.path())
        .arg("pkg")
        .output()
        .expect("Failed to run pkg command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_version() {
    let output = cargo_bin()
        .arg("version")
        .output()
        .expect("Failed to run version command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("natfed "));
}
