//! Global context for CLI commands

use anyhow::Result;
use cardsmith_core::project::Project;
use cardsmith_core::store::JsonFieldStore;
use cardsmith_core::template::TemplateEngine;
use std::env;

/// The project the command runs in
pub struct Context {
    pub project: Project,
    pub verbose: bool,
}

impl Context {
    /// Find the project from the current directory and load its config
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No cardsmith.toml exists here or in any parent
    /// - cardsmith.toml cannot be read or parsed
    pub fn new(verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let project = Project::discover(&current_dir)?;

        tracing::debug!(root = %project.root.display(), "using project");

        Ok(Self { project, verbose })
    }

    pub fn template_id(&self) -> &str {
        self.project.template_id()
    }

    pub fn store(&self) -> JsonFieldStore {
        self.project.store()
    }

    /// Engine configured from `[render]`
    pub fn engine(&self) -> TemplateEngine {
        TemplateEngine::with_options(self.project.config.render.to_options())
    }
}
