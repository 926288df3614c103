use std::collections::BTreeMap;

use crate::domain::AppError;

/// Variables available to a prompt template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    /// Variable name to value mapping.
    pub variables: BTreeMap<String, String>,
}

impl PromptContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }
}

/// Trait for rendering templates.
///
/// Keeps the template engine (minijinja) out of the domain layer.
pub trait TemplateRenderer: Send + Sync {
    /// Render a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - The template string to render.
    /// * `context` - The context variables to use for rendering.
    /// * `template_name` - A name for the template (for error reporting).
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, AppError>;
}
