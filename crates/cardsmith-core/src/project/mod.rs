//! Template project detection
//!
//! A project is a directory holding `cardsmith.toml`, the template HTML it
//! names, and the field store.

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CardsmithError, Result};
use crate::store::JsonFieldStore;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Load the project rooted at `root`
    pub fn load(root: PathBuf) -> Result<Self> {
        let config = Config::from_file(root.join(CONFIG_FILE_NAME))?;
        Ok(Self { root, config })
    }

    /// Search `start` and its ancestors for `cardsmith.toml`
    ///
    /// Returns `Ok(None)` when no ancestor has one.
    pub fn find_root(start: &Path) -> Result<Option<Self>> {
        for dir in start.ancestors() {
            if dir.join(CONFIG_FILE_NAME).is_file() {
                return Self::load(dir.to_path_buf()).map(Some);
            }
        }
        Ok(None)
    }

    /// Like [`Project::find_root`], failing with `ProjectNotFound`
    pub fn discover(start: &Path) -> Result<Self> {
        Self::find_root(start)?.ok_or(CardsmithError::ProjectNotFound)
    }

    pub fn template_id(&self) -> &str {
        &self.config.template.id
    }

    pub fn html_path(&self) -> PathBuf {
        self.root.join(&self.config.template.html)
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(&self.config.store.path)
    }

    pub fn store(&self) -> JsonFieldStore {
        JsonFieldStore::new(self.store_path())
    }

    pub fn read_html(&self) -> Result<String> {
        let path = self.html_path();
        if !path.is_file() {
            return Err(CardsmithError::ProjectHtmlNotFound { path });
        }
        Ok(std::fs::read_to_string(&path)?)
    }

    /// Name for a downloaded render of this template
    pub fn download_file_name(&self) -> String {
        download_file_name(&self.config.template.name)
    }
}

/// `"Wedding  Classic"` → `"Wedding_Classic.html"`
pub fn download_file_name(template_name: &str) -> String {
    let mut name = String::with_capacity(template_name.len() + 5);
    let mut in_space = false;
    for c in template_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str(".html");
    name
}
