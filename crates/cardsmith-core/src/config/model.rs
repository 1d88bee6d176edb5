use crate::error::{CardsmithError, Result};
use crate::template::{RenderOptions, DEFAULT_LIST_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "cardsmith.toml";

/// cardsmith.toml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub template: TemplateConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub id: String,
    pub name: String,
    /// HTML file, relative to the project root
    #[serde(default = "default_html")]
    pub html: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Joins multi-value (checkbox) answers
    #[serde(default = "default_list_separator")]
    pub list_separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            list_separator: default_list_separator(),
        }
    }
}

impl RenderConfig {
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            list_separator: self.list_separator.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// fields.json location, relative to the project root
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_html() -> PathBuf {
    PathBuf::from("template.html")
}

fn default_list_separator() -> String {
    DEFAULT_LIST_SEPARATOR.to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".cardsmith/fields.json")
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CardsmithError::ConfigParseError(e.to_string()))?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CardsmithError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.template.id.trim().is_empty() {
            return Err(CardsmithError::ConfigInvalidValue {
                field: "template.id".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.template.html.as_os_str().is_empty() {
            return Err(CardsmithError::ConfigInvalidValue {
                field: "template.html".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
