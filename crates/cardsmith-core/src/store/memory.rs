//! In-process field store

use super::{field_not_found, AppliedSync, FieldStore, TemplateRecord};
use crate::error::Result;
use crate::fields::{FieldDef, FieldEdit};
use std::collections::HashMap;

/// Field store backed by a `HashMap`, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryFieldStore {
    templates: HashMap<String, TemplateRecord>,
}

impl MemoryFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a template with already-persisted fields
    pub fn with_fields(mut self, template_id: &str, fields: Vec<FieldDef>) -> Self {
        self.templates
            .entry(template_id.to_string())
            .or_default()
            .insert(template_id, fields);
        self
    }

    fn record_mut(&mut self, template_id: &str) -> &mut TemplateRecord {
        self.templates.entry(template_id.to_string()).or_default()
    }
}

impl FieldStore for MemoryFieldStore {
    fn load_fields(&self, template_id: &str) -> Result<Vec<FieldDef>> {
        Ok(self
            .templates
            .get(template_id)
            .map(TemplateRecord::sorted_fields)
            .unwrap_or_default())
    }

    fn remove_fields(&mut self, template_id: &str, ids: &[String]) -> Result<usize> {
        Ok(self
            .templates
            .get_mut(template_id)
            .map_or(0, |record| record.remove(ids)))
    }

    fn insert_fields(
        &mut self,
        template_id: &str,
        fields: Vec<FieldDef>,
    ) -> Result<Vec<FieldDef>> {
        Ok(self.record_mut(template_id).insert(template_id, fields))
    }

    fn bump_version(&mut self, template_id: &str) -> Result<u64> {
        Ok(self.record_mut(template_id).bump())
    }

    fn template_version(&self, template_id: &str) -> Result<u64> {
        Ok(self
            .templates
            .get(template_id)
            .map_or(TemplateRecord::default().version, |r| r.version))
    }

    fn apply_sync(&mut self, template_id: &str, extracted_ids: &[String]) -> Result<AppliedSync> {
        Ok(self.record_mut(template_id).apply_sync(template_id, extracted_ids))
    }

    fn edit_field(
        &mut self,
        template_id: &str,
        field_id: &str,
        edit: &FieldEdit,
    ) -> Result<FieldDef> {
        self.templates
            .get_mut(template_id)
            .and_then(|record| record.edit(field_id, edit))
            .unwrap_or_else(|| Err(field_not_found(template_id, field_id)))
    }
}
