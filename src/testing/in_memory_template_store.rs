use std::collections::HashMap;

use crate::adapters::EmbeddedTemplateStore;
use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Embedded templates with per-test overrides.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateStore {
    overrides: HashMap<String, String>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.overrides.insert(name.into(), content.into());
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn read_template(&self, name: &str) -> Result<String, AppError> {
        match self.overrides.get(name) {
            Some(content) => Ok(content.clone()),
            None => EmbeddedTemplateStore::new().read_template(name),
        }
    }
}
