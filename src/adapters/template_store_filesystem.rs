use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::adapters::EmbeddedTemplateStore;
use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Prompt templates read from a directory, falling back to the embedded
/// catalog for names the directory does not provide.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    root: PathBuf,
    fallback: EmbeddedTemplateStore,
}

impl FilesystemTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), fallback: EmbeddedTemplateStore::new() }
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || escapes {
            return Err(AppError::template_load(
                name,
                "template names must stay inside the directory",
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn read_template(&self, name: &str) -> Result<String, AppError> {
        let path = self.resolve(name)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(template = name, path = %path.display(), "Loaded template");
                Ok(content)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => self.fallback.read_template(name),
            Err(err) => Err(AppError::template_load(name, err)),
        }
    }
}
