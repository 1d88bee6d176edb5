use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardsmithError {
    // Project errors
    #[error("PROJECT_NOT_FOUND: cardsmith.toml not found in current or parent directories")]
    ProjectNotFound,

    #[error("PROJECT_HTML_NOT_FOUND: template HTML '{path}' does not exist")]
    ProjectHtmlNotFound { path: PathBuf },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Template errors
    #[error("TEMPLATE_EMPTY: template '{template_id}' has no HTML content")]
    TemplateEmpty { template_id: String },

    // Field errors
    #[error("FIELD_NOT_FOUND: template '{template_id}' has no field '{field_id}'")]
    FieldNotFound {
        template_id: String,
        field_id: String,
    },

    #[error("FIELD_INVALID_EDIT: {field_id}: {reason}")]
    FieldInvalidEdit { field_id: String, reason: String },

    // Store errors
    #[error("STORE_READ_ERROR: failed to read field store: {0}")]
    StoreReadError(String),

    #[error("STORE_WRITE_ERROR: failed to write field store: {0}")]
    StoreWriteError(String),

    #[error("STORE_INVALID_SCHEMA: unknown schema version '{0}'")]
    StoreInvalidSchema(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CardsmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_code_prefix() {
        let err = CardsmithError::TemplateEmpty {
            template_id: "wedding".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "TEMPLATE_EMPTY: template 'wedding' has no HTML content"
        );

        let err = CardsmithError::StoreInvalidSchema("9.9".to_string());
        assert!(err.to_string().starts_with("STORE_INVALID_SCHEMA:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CardsmithError = io.into();
        assert!(matches!(err, CardsmithError::IoError(_)));
        assert!(err.to_string().starts_with("IO_ERROR:"));
    }
}
