//! Cross-process writes to the JSON field store

use cardsmith_core::store::{FieldStore, JsonFieldStore};
use cardsmith_testkit::{example_bin, temp_dir_in_workspace};
use std::collections::HashSet;
use std::process::Command;

#[test]
fn test_concurrent_writers_lose_no_fields() {
    let temp = temp_dir_in_workspace();
    let store_path = temp.path().join(".cardsmith/fields.json");

    const WRITERS: usize = 4;
    const FIELDS_PER_WRITER: usize = 10;

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store_path = store_path.clone();
            std::thread::spawn(move || {
                let status = Command::new(example_bin("store_writer"))
                    .arg(&store_path)
                    .arg("party")
                    .arg(format!("writer{w}"))
                    .arg(FIELDS_PER_WRITER.to_string())
                    .status()
                    .expect("Failed to execute store_writer");
                assert!(status.success(), "store_writer should exit successfully");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let store = JsonFieldStore::new(&store_path);
    let fields = store.load_fields("party").unwrap();
    assert_eq!(fields.len(), WRITERS * FIELDS_PER_WRITER, "lost field inserts");

    let ids: HashSet<_> = fields.iter().map(|f| f.id.clone().unwrap()).collect();
    assert_eq!(ids.len(), fields.len(), "identities must be unique");

    let version = store.template_version("party").unwrap();
    assert_eq!(version, 1 + (WRITERS * FIELDS_PER_WRITER) as u64, "lost version bumps");
}

#[test]
fn test_concurrent_syncs_create_each_field_once() {
    let temp = temp_dir_in_workspace();
    let store_path = temp.path().join(".cardsmith/fields.json");
    let html_path = temp.path().join("template.html");
    std::fs::write(
        &html_path,
        "<h1>{{couple_names}}</h1><p>{{event_date}} at {{venue_address}}</p>",
    )
    .unwrap();

    const SYNCERS: usize = 4;

    let handles: Vec<_> = (0..SYNCERS)
        .map(|_| {
            let store_path = store_path.clone();
            let html_path = html_path.clone();
            std::thread::spawn(move || {
                let status = Command::new(example_bin("template_syncer"))
                    .arg(&store_path)
                    .arg("wedding")
                    .arg(&html_path)
                    .arg("3")
                    .status()
                    .expect("Failed to execute template_syncer");
                assert!(status.success(), "template_syncer should exit successfully");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let store = JsonFieldStore::new(&store_path);
    let fields = store.load_fields("wedding").unwrap();
    let field_ids: HashSet<_> = fields.iter().map(|f| f.field_id.clone()).collect();
    assert_eq!(fields.len(), 3, "each placeholder stored once");
    assert_eq!(field_ids.len(), 3);
    assert_eq!(store.template_version("wedding").unwrap(), 2, "only the first sync bumps");
}
