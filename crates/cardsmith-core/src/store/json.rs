//! File-backed field store (`fields.json`)
//!
//! One JSON document holds every template's fields:
//!
//! ```json
//! {
//!   "schema_version": "1.0",
//!   "templates": {
//!     "wedding-classic": { "version": 3, "updated_at": "...", "fields": [ ... ] }
//!   }
//! }
//! ```
//!
//! Writes take an exclusive lock on the sibling `.lock` file, then replace the
//! document atomically (temp file, fsync, persist). Reads take a shared lock.

use super::{field_not_found, AppliedSync, FieldStore, TemplateRecord};
use crate::error::{CardsmithError, Result};
use crate::fields::{FieldDef, FieldEdit};
use crate::lock::{self, LockGuard};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SCHEMA_VERSION: &str = "1.0";

const WRITE_LOCK_TIMEOUT: Duration = Duration::from_secs(30);
const READ_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Top-level `fields.json` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldsDocument {
    pub schema_version: String,
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateRecord>,
}

impl Default for FieldsDocument {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            templates: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonFieldStore {
    path: PathBuf,
}

impl JsonFieldStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Read the whole document; a missing file reads as empty
    pub fn load_document(&self) -> Result<FieldsDocument> {
        if !self.path.exists() {
            return Ok(FieldsDocument::default());
        }
        let _guard = self.lock_shared()?;
        self.read_unlocked()
    }

    fn read_unlocked(&self) -> Result<FieldsDocument> {
        if !self.path.exists() {
            return Ok(FieldsDocument::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| CardsmithError::StoreReadError(format!("Failed to read: {}", e)))?;
        let document: FieldsDocument = serde_json::from_str(&content)
            .map_err(|e| CardsmithError::StoreReadError(format!("Failed to parse: {}", e)))?;

        match document.schema_version.as_str() {
            SCHEMA_VERSION => Ok(document),
            version => Err(CardsmithError::StoreInvalidSchema(version.to_string())),
        }
    }

    /// Read-modify-write under the exclusive lock; nothing is written when
    /// `apply` fails
    fn update<T>(&self, apply: impl FnOnce(&mut FieldsDocument) -> Result<T>) -> Result<T> {
        let parent = self.ensure_parent_dir()?;
        let _guard = lock::acquire_lock(&self.lock_path(), WRITE_LOCK_TIMEOUT, "field store update")
            .map_err(|e| {
                CardsmithError::StoreWriteError(format!("Failed to acquire lock: {}", e))
            })?;

        let mut document = self.read_unlocked()?;
        let out = apply(&mut document)?;

        let content = serde_json::to_string_pretty(&document).map_err(|e| {
            CardsmithError::StoreWriteError(format!("Failed to serialize: {}", e))
        })?;
        atomic_write_json(&content, &self.path, &parent)?;
        Ok(out)
    }

    fn lock_shared(&self) -> Result<LockGuard> {
        lock::acquire_shared_lock(&self.lock_path(), READ_LOCK_TIMEOUT, "field store read")
            .map_err(|e| {
                CardsmithError::StoreReadError(format!("Failed to acquire shared lock: {}", e))
            })
    }

    fn ensure_parent_dir(&self) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| {
            CardsmithError::StoreWriteError(format!("Failed to create parent dir: {}", e))
        })?;
        Ok(parent)
    }
}

impl FieldStore for JsonFieldStore {
    fn load_fields(&self, template_id: &str) -> Result<Vec<FieldDef>> {
        let document = self.load_document()?;
        Ok(document
            .templates
            .get(template_id)
            .map(TemplateRecord::sorted_fields)
            .unwrap_or_default())
    }

    fn remove_fields(&mut self, template_id: &str, ids: &[String]) -> Result<usize> {
        self.update(|doc| {
            Ok(doc
                .templates
                .get_mut(template_id)
                .map_or(0, |record| record.remove(ids)))
        })
    }

    fn insert_fields(
        &mut self,
        template_id: &str,
        fields: Vec<FieldDef>,
    ) -> Result<Vec<FieldDef>> {
        self.update(|doc| {
            Ok(doc
                .templates
                .entry(template_id.to_string())
                .or_default()
                .insert(template_id, fields))
        })
    }

    fn bump_version(&mut self, template_id: &str) -> Result<u64> {
        self.update(|doc| Ok(doc.templates.entry(template_id.to_string()).or_default().bump()))
    }

    fn template_version(&self, template_id: &str) -> Result<u64> {
        let document = self.load_document()?;
        Ok(document
            .templates
            .get(template_id)
            .map_or(TemplateRecord::default().version, |r| r.version))
    }

    fn apply_sync(&mut self, template_id: &str, extracted_ids: &[String]) -> Result<AppliedSync> {
        self.update(|doc| {
            let mut record = doc.templates.get(template_id).cloned().unwrap_or_default();
            let applied = record.apply_sync(template_id, extracted_ids);
            if applied.changed() {
                doc.templates.insert(template_id.to_string(), record);
            }
            Ok(applied)
        })
    }

    fn edit_field(
        &mut self,
        template_id: &str,
        field_id: &str,
        edit: &FieldEdit,
    ) -> Result<FieldDef> {
        self.update(|doc| {
            doc.templates
                .get_mut(template_id)
                .and_then(|record| record.edit(field_id, edit))
                .unwrap_or_else(|| Err(field_not_found(template_id, field_id)))
        })
    }
}

/// Replace `path` with `content` via NamedTempFile + persist
fn atomic_write_json(content: &str, path: &Path, parent: &Path) -> Result<()> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let write_err =
        |what: &str, e: std::io::Error| CardsmithError::StoreWriteError(format!("{}: {}", what, e));

    let mut temp_file =
        NamedTempFile::new_in(parent).map_err(|e| write_err("Failed to create temp file", e))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| write_err("Failed to write temp file", e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| write_err("Failed to sync temp file", e))?;
    temp_file
        .persist(path)
        .map_err(|e| write_err("Failed to persist temp file", e.error))?;

    #[cfg(unix)]
    {
        let dir = std::fs::File::open(parent).map_err(|e| write_err("Failed to open parent dir", e))?;
        dir.sync_all()
            .map_err(|e| write_err("Failed to sync parent dir", e))?;
    }

    Ok(())
}
