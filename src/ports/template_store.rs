//! Prompt template store port definition.

use crate::domain::AppError;

/// Port for reading prompt templates by name.
pub trait TemplateStore: Send + Sync {
    /// Read a template's raw content.
    ///
    /// Fails with [`AppError::TemplateLoad`] when the template is missing or unreadable.
    fn read_template(&self, name: &str) -> Result<String, AppError>;
}
