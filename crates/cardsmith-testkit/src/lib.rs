//! Test utilities for cardsmith
//!
//! Shared helpers used by the tests of every crate in the workspace.

pub mod fixtures;

pub use fixtures::{write_project, write_values, SAMPLE_HTML};

use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Keeps test files in one gitignored place. The directory is removed when
/// the returned `TempDir` drops.
///
/// # Panics
///
/// Panics if the current directory is unavailable or `.tmp/` cannot be created.
///
/// ```rust
/// use cardsmith_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// std::fs::write(temp.path().join("template.html"), "<p>{{name}}</p>").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Path to a compiled cargo example of the crate under test
///
/// Integration test binaries live in `target/<profile>/deps/`; examples are
/// built next to them in `target/<profile>/examples/`.
pub fn example_bin(name: &str) -> PathBuf {
    let mut path = std::env::current_exe().expect("Failed to get current executable path");
    path.pop();
    path.pop();
    path.push("examples");
    path.push(name);

    if cfg!(target_os = "windows") {
        path.set_extension("exe");
    }

    path
}
