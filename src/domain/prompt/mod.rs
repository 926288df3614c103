pub mod template;

pub use template::{PromptContext, TemplateRenderer};
