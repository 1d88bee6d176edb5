//! Template project fixtures

use std::fs;
use std::path::{Path, PathBuf};

/// Small invitation template used across tests
pub const SAMPLE_HTML: &str = "<h1>{{couple_names}}</h1>
<p>Join us on {{event_date}} at {{venue_address}}.</p>
<p>Dear {{guest_name}}, please reply to {{rsvp_email}}.</p>
<footer>{{couple_names}} · {{ note }}</footer>
";

/// Write `cardsmith.toml` and `template.html` into `root`
///
/// Returns the project root.
pub fn write_project(root: &Path, id: &str, name: &str, html: &str) -> PathBuf {
    let config = format!("[template]\nid = \"{id}\"\nname = \"{name}\"\n");
    fs::create_dir_all(root).expect("Failed to create project dir");
    fs::write(root.join("cardsmith.toml"), config).expect("Failed to write cardsmith.toml");
    fs::write(root.join("template.html"), html).expect("Failed to write template.html");
    root.to_path_buf()
}

/// Write a JSON value map next to the project, returning its path
pub fn write_values(root: &Path, file_name: &str, json: &str) -> PathBuf {
    let path = root.join(file_name);
    fs::write(&path, json).expect("Failed to write values file");
    path
}
