//! Integration tests for `cardsmith render`

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use cardsmith_testkit::{SAMPLE_HTML, temp_dir_in_workspace, write_project, write_values};
use predicates::prelude::*;
use std::fs;
use std::process::Command;

const FULL_VALUES: &str = r#"{"couple_names": "Ana & Ben", "event_date": "June 1",
    "venue_address": "1 Garden Lane", "guest_name": "Cleo",
    "rsvp_email": "rsvp@example.com"}"#;

const RENDERED: &str = "<h1>Ana & Ben</h1>
<p>Join us on June 1 at 1 Garden Lane.</p>
<p>Dear Cleo, please reply to rsvp@example.com.</p>
<footer>Ana & Ben · {{ note }}</footer>
";

fn cardsmith() -> Command {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_render_to_stdout() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);
    write_values(&root, "values.json", FULL_VALUES);

    cardsmith()
        .args(["render", "--values", "values.json"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(RENDERED)
        .stderr(predicate::str::contains("unfilled").not());
}

#[test]
fn test_render_leaves_missing_placeholders_literal() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);
    write_values(&root, "values.json", r#"{"couple_names": "Ana & Ben"}"#);

    cardsmith()
        .args(["render", "--values", "values.json"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Ana & Ben</h1>"))
        .stdout(predicate::str::contains("Dear {{guest_name}}"))
        .stderr(predicate::str::contains(
            "4 placeholder(s) left unfilled: event_date, venue_address, guest_name, rsvp_email",
        ));
}

#[test]
fn test_render_to_output_file() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);
    write_values(&root, "values.json", FULL_VALUES);

    cardsmith()
        .args(["render", "--values", "values.json", "-o", "out.html"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    assert_eq!(fs::read_to_string(root.join("out.html")).unwrap(), RENDERED);
}

#[test]
fn test_render_download_uses_template_name() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding   Classic", SAMPLE_HTML);
    write_values(&root, "values.json", FULL_VALUES);

    cardsmith()
        .args(["render", "--values", "values.json", "--download"])
        .current_dir(&root)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(root.join("Wedding_Classic.html")).unwrap(),
        RENDERED
    );
}

#[test]
fn test_render_check_blocks_invalid_values() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);
    cardsmith().arg("sync").current_dir(&root).assert().success();
    write_values(&root, "values.json", r#"{"couple_names": "Ana & Ben"}"#);

    cardsmith()
        .args(["render", "--values", "values.json", "--check", "-o", "out.html"])
        .current_dir(&root)
        .assert()
        .failure()
        .stdout(predicate::str::contains("guest_name: Guest Name is required"))
        .stderr(predicate::str::contains("nothing rendered"));

    assert!(!root.join("out.html").exists());
}

#[test]
fn test_render_fills_omitted_fields_with_stored_defaults() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);
    cardsmith().arg("sync").current_dir(&root).assert().success();
    cardsmith()
        .args(["edit", "venue_address", "--default", "1 Garden Lane"])
        .current_dir(&root)
        .assert()
        .success();
    write_values(
        &root,
        "values.json",
        r#"{"couple_names": "Ana & Ben", "event_date": "June 1",
            "guest_name": "Cleo", "rsvp_email": "rsvp@example.com"}"#,
    );

    cardsmith()
        .args(["render", "--values", "values.json", "--check"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(RENDERED)
        .stderr(predicate::str::contains("unfilled").not());
}

#[test]
fn test_render_submitted_value_overrides_default() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "wedding", "Wedding Classic", SAMPLE_HTML);
    cardsmith().arg("sync").current_dir(&root).assert().success();
    cardsmith()
        .args(["edit", "venue_address", "--default", "Town Hall"])
        .current_dir(&root)
        .assert()
        .success();
    write_values(&root, "values.json", FULL_VALUES);

    cardsmith()
        .args(["render", "--values", "values.json"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(RENDERED);
}

#[test]
fn test_render_joins_lists_with_configured_separator() {
    let temp = temp_dir_in_workspace();
    let root = write_project(temp.path(), "menu", "Menu", "<p>{{dishes}} / {{count}}</p>");
    let config = fs::read_to_string(root.join("cardsmith.toml")).unwrap();
    fs::write(
        root.join("cardsmith.toml"),
        format!("{config}\n[render]\nlist_separator = \"; \"\n"),
    )
    .unwrap();
    write_values(&root, "values.json", r#"{"dishes": ["Soup", "Fish"], "count": 2}"#);

    cardsmith()
        .args(["render", "--values", "values.json"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout("<p>Soup; Fish / 2</p>");
}
