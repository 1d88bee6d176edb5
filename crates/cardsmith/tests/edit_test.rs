//! Integration tests for `cardsmith edit`

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use cardsmith_testkit::{SAMPLE_HTML, temp_dir_in_workspace, write_project, write_values};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

fn cardsmith() -> Command {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn synced_project(root: &Path) -> PathBuf {
    let root = write_project(root, "wedding", "Wedding Classic", SAMPLE_HTML);
    cardsmith().arg("sync").current_dir(&root).assert().success();
    root
}

#[test]
fn test_edit_field_to_select_with_options() {
    let temp = temp_dir_in_workspace();
    let root = synced_project(temp.path());
    write_values(&root, "choices.txt", "Garden\n\n  Ballroom \n");

    let output = cardsmith()
        .args([
            "edit",
            "venue_address",
            "--type",
            "select",
            "--options-file",
            "choices.txt",
            "--label",
            "Venue",
            "--optional",
            "--order",
            "-1",
            "--json",
        ])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let field: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(field["type"], "select");
    assert_eq!(field["label"], "Venue");
    assert_eq!(field["required"], false);
    assert_eq!(field["order_index"], -1);
    assert_eq!(field["options"], serde_json::json!(["Garden", "Ballroom"]));

    cardsmith()
        .args(["fields", "--verbose"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("options: Garden, Ballroom"));
}

#[test]
fn test_edit_rejects_options_on_text_field() {
    let temp = temp_dir_in_workspace();
    let root = synced_project(temp.path());
    write_values(&root, "choices.txt", "Cleo\nDan\n");

    cardsmith()
        .args(["edit", "guest_name", "--options-file", "choices.txt"])
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "FIELD_INVALID_EDIT: guest_name: text fields take no options",
        ));
}

#[test]
fn test_edit_unknown_field() {
    let temp = temp_dir_in_workspace();
    let root = synced_project(temp.path());

    cardsmith()
        .args(["edit", "dress_code", "--label", "Dress code"])
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "FIELD_NOT_FOUND: template 'wedding' has no field 'dress_code'",
        ));
}

#[test]
fn test_edit_requires_a_change() {
    let temp = temp_dir_in_workspace();
    let root = synced_project(temp.path());

    cardsmith()
        .args(["edit", "guest_name"])
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change for 'guest_name'"));
}

#[test]
fn test_edit_rejects_unknown_type() {
    let temp = temp_dir_in_workspace();
    let root = synced_project(temp.path());

    cardsmith()
        .args(["edit", "guest_name", "--type", "radio"])
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field type 'radio'"));
}

#[test]
fn test_default_satisfies_required_in_validate() {
    let temp = temp_dir_in_workspace();
    let root = synced_project(temp.path());
    write_values(
        &root,
        "values.json",
        r#"{"couple_names": "Ana & Ben", "event_date": "2025-06-01",
            "guest_name": "Cleo", "rsvp_email": "rsvp@example.com"}"#,
    );

    cardsmith()
        .args(["validate", "--values", "values.json"])
        .current_dir(&root)
        .assert()
        .failure()
        .stdout(predicate::str::contains("venue_address"));

    cardsmith()
        .args(["edit", "venue_address", "--default", "1 Garden Lane"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated field 'venue_address'"))
        .stdout(predicate::str::contains("default: 1 Garden Lane"));

    cardsmith()
        .args(["validate", "--values", "values.json"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 field(s) valid"));
}
