//! Pattern rendering for the subtheme application.
//! Destination patterns and token replacement values are small MiniJinja
//! templates evaluated against the scaffold context.

use crate::error::{Error, Result};
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a pattern string with the given context.
    ///
    /// # Arguments
    /// * `pattern` - Pattern string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered string
    fn render(&self, pattern: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let env = Environment::new();
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a pattern string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::Render` if the pattern fails to parse or render
    fn render(&self, pattern: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("pattern", pattern).map_err(Error::Render)?;

        let tmpl = env.get_template("pattern").map_err(Error::Render)?;

        tmpl.render(context).map_err(Error::Render)
    }
}
