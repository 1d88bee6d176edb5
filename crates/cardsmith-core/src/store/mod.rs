//! Field persistence and the synchronization workflow
//!
//! [`FieldStore`] is the boundary to wherever field definitions live.
//! Two implementations ship with the crate: [`MemoryFieldStore`] and the
//! file-backed [`JsonFieldStore`]. [`sync_template_fields`] drives a store
//! from a template's HTML.

pub mod json;
pub mod memory;
mod sync;

pub use json::JsonFieldStore;
pub use memory::MemoryFieldStore;
pub use sync::{plan_sync, sync_template_fields, SyncPlan, SyncReport};

use crate::error::{CardsmithError, Result};
use crate::fields::{diff_fields, infer_default_field_def, sort_for_display, FieldDef, FieldEdit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage for per-template field definitions
pub trait FieldStore {
    /// Fields of `template_id` in display order; empty for unknown templates
    fn load_fields(&self, template_id: &str) -> Result<Vec<FieldDef>>;

    /// Delete fields by identity, returning how many were removed
    fn remove_fields(&mut self, template_id: &str, ids: &[String]) -> Result<usize>;

    /// Persist new fields, assigning identities to those without one
    ///
    /// Fields whose `field_id` is already stored for the template are
    /// skipped; the returned list holds only what was inserted.
    fn insert_fields(&mut self, template_id: &str, fields: Vec<FieldDef>)
        -> Result<Vec<FieldDef>>;

    /// Increment the template version, returning the new value
    fn bump_version(&mut self, template_id: &str) -> Result<u64>;

    fn template_version(&self, template_id: &str) -> Result<u64>;

    /// Reconcile the stored fields with `extracted_ids` as one transaction
    ///
    /// The diff is computed against the state the store holds at the time of
    /// the write, so a stale snapshot never produces duplicate fields.
    fn apply_sync(&mut self, template_id: &str, extracted_ids: &[String]) -> Result<AppliedSync>;

    /// Change the metadata of the field with `field_id`, returning it updated
    ///
    /// Fails with `FieldNotFound` when the template has no such field. A
    /// rejected edit leaves the store unchanged.
    fn edit_field(&mut self, template_id: &str, field_id: &str, edit: &FieldEdit)
        -> Result<FieldDef>;
}

/// Changes made by [`FieldStore::apply_sync`]
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedSync {
    pub created: Vec<FieldDef>,
    pub removed: Vec<FieldDef>,
    /// Template version after the sync
    pub version: u64,
}

impl AppliedSync {
    pub fn changed(&self) -> bool {
        !self.created.is_empty() || !self.removed.is_empty()
    }
}

/// Stored state of one template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl Default for TemplateRecord {
    fn default() -> Self {
        Self {
            version: 1,
            updated_at: None,
            fields: Vec::new(),
        }
    }
}

impl TemplateRecord {
    pub(crate) fn sorted_fields(&self) -> Vec<FieldDef> {
        let mut fields = self.fields.clone();
        sort_for_display(&mut fields);
        fields
    }

    pub(crate) fn remove(&mut self, ids: &[String]) -> usize {
        let before = self.fields.len();
        self.fields
            .retain(|f| f.id.as_ref().is_none_or(|id| !ids.contains(id)));
        before - self.fields.len()
    }

    pub(crate) fn insert(&mut self, template_id: &str, fields: Vec<FieldDef>) -> Vec<FieldDef> {
        let mut inserted = Vec::new();
        for mut field in fields {
            if self.fields.iter().any(|f| f.field_id == field.field_id) {
                tracing::debug!(
                    template_id,
                    field_id = %field.field_id,
                    "skipped insert of already stored field"
                );
                continue;
            }
            field.template_id = template_id.to_string();
            if field.id.is_none() {
                field.id = Some(uuid::Uuid::new_v4().to_string());
            }
            self.fields.push(field.clone());
            inserted.push(field);
        }
        inserted
    }

    /// Remove stale fields, create defaults for new placeholders, bump on change
    pub(crate) fn apply_sync(&mut self, template_id: &str, extracted_ids: &[String]) -> AppliedSync {
        let changes = diff_fields(&self.fields, extracted_ids);

        let (mut removed, kept): (Vec<FieldDef>, Vec<FieldDef>) = std::mem::take(&mut self.fields)
            .into_iter()
            .partition(|f| {
                f.id
                    .as_ref()
                    .is_some_and(|id| changes.to_remove.contains(id))
            });
        self.fields = kept;
        sort_for_display(&mut removed);

        let new_fields = changes
            .to_create
            .iter()
            .map(|field_id| infer_default_field_def(field_id).into_field_def(template_id, 0))
            .collect();
        let created = self.insert(template_id, new_fields);

        let version = if created.is_empty() && removed.is_empty() {
            self.version
        } else {
            self.bump()
        };

        AppliedSync {
            created,
            removed,
            version,
        }
    }

    pub(crate) fn edit(&mut self, field_id: &str, edit: &FieldEdit) -> Option<Result<FieldDef>> {
        let field = self.fields.iter_mut().find(|f| f.field_id == field_id)?;
        if let Err(e) = edit.apply(field) {
            return Some(Err(e));
        }
        let updated = field.clone();
        self.updated_at = Some(Utc::now());
        Some(Ok(updated))
    }

    pub(crate) fn bump(&mut self) -> u64 {
        self.version += 1;
        self.updated_at = Some(Utc::now());
        self.version
    }
}

pub(crate) fn field_not_found(template_id: &str, field_id: &str) -> CardsmithError {
    CardsmithError::FieldNotFound {
        template_id: template_id.to_string(),
        field_id: field_id.to_string(),
    }
}
