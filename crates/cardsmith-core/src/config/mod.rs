//! `cardsmith.toml` project configuration

mod model;

pub use model::{Config, RenderConfig, StoreConfig, TemplateConfig, CONFIG_FILE_NAME};
