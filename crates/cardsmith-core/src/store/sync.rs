use super::FieldStore;
use crate::error::{CardsmithError, Result};
use crate::fields::{diff_fields, infer_default_field_def, FieldDef, NewFieldDef};
use crate::template::{extract_placeholders, find_rejected_placeholders, RejectedPlaceholder};
use serde::Serialize;

/// Changes a sync would make, computed without touching the store
#[derive(Debug, Clone, Serialize)]
pub struct SyncPlan {
    pub template_id: String,
    /// Placeholders in first-occurrence order
    pub extracted_ids: Vec<String>,
    /// `{{...}}` pairs that were not valid placeholders
    pub rejected: Vec<RejectedPlaceholder>,
    pub to_create: Vec<NewFieldDef>,
    pub to_remove: Vec<FieldDef>,
    pub current_version: u64,
}

impl SyncPlan {
    pub fn is_noop(&self) -> bool {
        self.to_create.is_empty() && self.to_remove.is_empty()
    }

    /// Version the template would have after applying the plan
    pub fn next_version(&self) -> u64 {
        if self.is_noop() {
            self.current_version
        } else {
            self.current_version + 1
        }
    }
}

/// Outcome of [`sync_template_fields`]
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub template_id: String,
    pub extracted_ids: Vec<String>,
    pub rejected: Vec<RejectedPlaceholder>,
    pub created: Vec<FieldDef>,
    pub removed: Vec<FieldDef>,
    pub version: u64,
    /// Field set after the sync, in display order
    pub fields: Vec<FieldDef>,
}

impl SyncReport {
    pub fn changed(&self) -> bool {
        !self.created.is_empty() || !self.removed.is_empty()
    }
}

/// Work out what [`sync_template_fields`] would do
///
/// Fails with `TemplateEmpty` when `html` is empty or only whitespace.
pub fn plan_sync<S: FieldStore + ?Sized>(
    store: &S,
    template_id: &str,
    html: &str,
) -> Result<SyncPlan> {
    if html.trim().is_empty() {
        return Err(CardsmithError::TemplateEmpty {
            template_id: template_id.to_string(),
        });
    }

    let extracted_ids = extract_placeholders(html);
    let rejected = find_rejected_placeholders(html);
    tracing::debug!(
        template_id,
        placeholders = extracted_ids.len(),
        "extracted placeholders"
    );

    let existing = store.load_fields(template_id)?;
    let changes = diff_fields(&existing, &extracted_ids);

    let to_remove = existing
        .into_iter()
        .filter(|f| {
            f.id
                .as_ref()
                .is_some_and(|id| changes.to_remove.contains(id))
        })
        .collect();
    let to_create = changes
        .to_create
        .iter()
        .map(|field_id| infer_default_field_def(field_id))
        .collect();

    Ok(SyncPlan {
        template_id: template_id.to_string(),
        extracted_ids,
        rejected,
        to_create,
        to_remove,
        current_version: store.template_version(template_id)?,
    })
}

/// Bring the stored fields of `template_id` in line with `html`
///
/// Removes fields whose placeholder is gone, creates inferred defaults for
/// new placeholders (at `order_index` 0), and bumps the template version
/// only when something changed. The store applies the whole change in one
/// transaction against its current state.
pub fn sync_template_fields<S: FieldStore + ?Sized>(
    store: &mut S,
    template_id: &str,
    html: &str,
) -> Result<SyncReport> {
    if html.trim().is_empty() {
        return Err(CardsmithError::TemplateEmpty {
            template_id: template_id.to_string(),
        });
    }

    let extracted_ids = extract_placeholders(html);
    let rejected = find_rejected_placeholders(html);
    tracing::debug!(
        template_id,
        placeholders = extracted_ids.len(),
        "extracted placeholders"
    );

    for rejected in &rejected {
        tracing::warn!(
            template_id,
            line = rejected.line,
            "ignored {}: not a valid placeholder{}",
            rejected.raw,
            rejected
                .suggestion
                .as_deref()
                .map(|s| format!(" (did you mean {s}?)"))
                .unwrap_or_default()
        );
    }

    let applied = store.apply_sync(template_id, &extracted_ids)?;
    if !applied.removed.is_empty() {
        tracing::debug!(template_id, count = applied.removed.len(), "removed stale fields");
    }
    if !applied.created.is_empty() {
        tracing::debug!(template_id, count = applied.created.len(), "created fields");
    }
    if applied.changed() {
        tracing::debug!(template_id, version = applied.version, "bumped template version");
    }

    Ok(SyncReport {
        template_id: template_id.to_string(),
        extracted_ids,
        rejected,
        created: applied.created,
        removed: applied.removed,
        version: applied.version,
        fields: store.load_fields(template_id)?,
    })
}
