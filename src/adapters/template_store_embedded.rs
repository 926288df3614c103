use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::TemplateStore;

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Prompt templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Names of all embedded templates, sorted.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = PROMPTS_DIR
            .files()
            .map(|file| file.path().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn read_template(&self, name: &str) -> Result<String, AppError> {
        let file = PROMPTS_DIR
            .get_file(name)
            .ok_or_else(|| AppError::template_load(name, "no embedded template with this name"))?;

        file.contents_utf8()
            .map(str::to_string)
            .ok_or_else(|| AppError::template_load(name, "embedded template is not valid UTF-8"))
    }
}
