// Core modules
pub mod config;
pub mod error;
pub mod fields;
pub mod lock;
pub mod project;
pub mod store;
pub mod template;

// Re-export commonly used types
pub use error::{CardsmithError, Result};
pub use fields::{diff_fields, infer_default_field_def, FieldChangeset, FieldDef, FieldType};
pub use project::Project;
pub use store::{sync_template_fields, FieldStore};
pub use template::{extract_placeholders, render, FieldValue, ValueMap};
