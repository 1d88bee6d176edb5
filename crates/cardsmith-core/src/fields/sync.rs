//! Field set reconciliation against placeholders found in HTML

use super::FieldDef;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A stored field as seen by [`diff_fields`]
pub trait SyncedField {
    /// Persisted identity, if the field has been stored
    fn identity(&self) -> Option<&str>;
    fn field_id(&self) -> &str;
}

impl SyncedField for FieldDef {
    fn identity(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn field_id(&self) -> &str {
        &self.field_id
    }
}

/// Minimal (identity, field id) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    pub id: String,
    pub field_id: String,
}

impl FieldRef {
    pub fn new(id: impl Into<String>, field_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_id: field_id.into(),
        }
    }
}

impl SyncedField for FieldRef {
    fn identity(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn field_id(&self) -> &str {
        &self.field_id
    }
}

/// Result of [`diff_fields`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldChangeset {
    /// Placeholder ids with no stored field, in extraction order
    pub to_create: Vec<String>,
    /// Identities of stored fields whose placeholder is gone
    pub to_remove: Vec<String>,
}

impl FieldChangeset {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute which fields to create and which to remove
///
/// Creation follows the order of `extracted`, skipping repeats. Removal
/// follows the order of `existing`. Stored fields without an identity are
/// never scheduled for removal.
pub fn diff_fields<F, S>(existing: &[F], extracted: &[S]) -> FieldChangeset
where
    F: SyncedField,
    S: AsRef<str>,
{
    let existing_ids: HashSet<&str> = existing.iter().map(|f| f.field_id()).collect();
    let extracted_ids: HashSet<&str> = extracted.iter().map(|s| s.as_ref()).collect();

    let mut scheduled = HashSet::new();
    let to_create = extracted
        .iter()
        .map(|s| s.as_ref())
        .filter(|id| !existing_ids.contains(id) && scheduled.insert(*id))
        .map(str::to_string)
        .collect();

    let to_remove = existing
        .iter()
        .filter(|f| !extracted_ids.contains(f.field_id()))
        .filter_map(|f| f.identity().map(str::to_string))
        .collect();

    FieldChangeset {
        to_create,
        to_remove,
    }
}
