//! Integration tests for CLI infrastructure

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use cardsmith_testkit::{SAMPLE_HTML, temp_dir_in_workspace, write_project};
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn cardsmith() -> Command {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version_flag() {
    cardsmith()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cardsmith"));
}

#[test]
fn test_cli_help_flag() {
    cardsmith()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("sync"));
}

#[test]
fn test_cli_requires_project_root() {
    let temp = temp_dir_in_workspace();

    cardsmith()
        .arg("fields")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("PROJECT_NOT_FOUND"));
}

#[test]
fn test_cli_finds_project_root_from_subdir() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);
    let subdir = root.join("assets").join("fonts");
    fs::create_dir_all(&subdir).unwrap();

    cardsmith()
        .arg("fields")
        .current_dir(&subdir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No fields stored for 'wedding'"));
}

#[test]
fn test_cli_reports_invalid_config() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("cardsmith.toml"), "[template]\nid = \"x\"\n").unwrap();

    cardsmith()
        .arg("sync")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_PARSE_ERROR"));
}

#[test]
fn test_infer_json() {
    let output = cardsmith()
        .args(["infer", "guest_email", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["field_id"], "guest_email");
    assert_eq!(json["label"], "Guest Email");
    assert_eq!(json["type"], "email");
    assert_eq!(json["required"], true);
    assert_eq!(json["placeholder"], "example@email.com");
}

#[test]
fn test_infer_human_output() {
    cardsmith()
        .args(["infer", "venue_address"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type:        textarea"))
        .stdout(predicate::str::contains("Placeholder: Enter venue address"));
}

#[test]
fn test_infer_warns_on_invalid_id() {
    cardsmith()
        .args(["infer", "guest name"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a valid placeholder id"));
}

#[test]
fn test_render_flags_conflict() {
    cardsmith()
        .args(["render", "--values", "v.json", "--output", "a.html", "--download"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
