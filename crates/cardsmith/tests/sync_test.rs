//! Integration tests for `cardsmith sync` and `cardsmith fields`

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
fn test_sync_creates_fields() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);

    cardsmith()
        .arg("sync")
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("+ rsvp_email (email)"))
        .stdout(predicate::str::contains(
            "Synced template 'wedding': 5 created, 0 removed (version 2)",
        ))
        .stderr(predicate::str::contains("{{ note }} is not a placeholder"));

    assert!(root.join(".cardsmith/fields.json").exists());

    cardsmith()
        .arg("sync")
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fields already in sync (version 2)"));
}

#[test]
fn test_sync_dry_run_leaves_store_untouched() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);

    cardsmith()
        .args(["sync", "--dry-run"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Would sync template 'wedding' (version 1 → 2)",
        ))
        .stdout(predicate::str::contains("+ event_date (date)"));

    assert!(!root.join(".cardsmith/fields.json").exists());
}

#[test]
fn test_sync_removes_deleted_placeholders() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);
    cardsmith().arg("sync").current_dir(&root).assert().success();

    fs::write(
        root.join("template.html"),
        "<h1>{{couple_names}}</h1><p>{{event_date}} · {{dress_code}}</p>",
    )
    .unwrap();

    let output = cardsmith()
        .args(["sync", "--json"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["version"], 3);
    assert_eq!(report["created"][0]["field_id"], "dress_code");

    let mut removed: Vec<&str> = report["removed"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field_id"].as_str().unwrap())
        .collect();
    removed.sort();
    assert_eq!(removed, vec!["guest_name", "rsvp_email", "venue_address"]);
}

#[test]
fn test_sync_rejects_empty_template() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "blank", "Blank", "  \n");

    cardsmith()
        .arg("sync")
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "TEMPLATE_EMPTY: template 'blank' has no HTML content",
        ));
}

#[test]
fn test_sync_reports_missing_html() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding", SAMPLE_HTML);
    fs::remove_file(root.join("template.html")).unwrap();

    cardsmith()
        .arg("sync")
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("PROJECT_HTML_NOT_FOUND"));
}

#[test]
fn test_fields_json_in_display_order() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);
    cardsmith().arg("sync").current_dir(&root).assert().success();

    let output = cardsmith()
        .args(["fields", "--json"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let fields: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = fields
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["couple_names", "event_date", "guest_name", "rsvp_email", "venue_address"]
    );
    assert!(fields[0]["id"].is_string());
    assert_eq!(fields[0]["template_id"], "wedding");
}

#[test]
fn test_verbose_logs_workflow_to_stderr() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);

    cardsmith()
        .args(["sync", "--verbose"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Store: "))
        .stderr(predicate::str::contains("bumped template version"));
}
