use std::io;

use thiserror::Error;

use crate::domain::posts::PostParseError;

/// Library-wide error type for campaign-genie operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A brief field was rejected before any request was made.
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidInput { field: String, value: String, reason: String },

    /// Prompt template is missing or corrupt.
    #[error("Failed to load template '{template}': {reason}")]
    TemplateLoad { template: String, reason: String },

    /// Prompt template could not be rendered with the supplied context.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Chat response could not be turned into posts.
    #[error("Couldn't parse the generated posts: {0}")]
    Parse(#[from] PostParseError),

    /// External API failure (non-2xx, timeout, undecodable body).
    #[error("{service} request failed: {details}")]
    Upstream { service: String, details: String },

    /// Secret is absent from the secret store.
    #[error("Secret '{secret_id}' not found in project '{project_id}'")]
    SecretNotFound { project_id: String, secret_id: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The caller aborted the request.
    #[error("Request cancelled")]
    Cancelled,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AppError::InvalidInput { field: field.into(), value: value.into(), reason: reason.into() }
    }

    pub(crate) fn template_load(template: impl Into<String>, reason: impl ToString) -> Self {
        AppError::TemplateLoad { template: template.into(), reason: reason.to_string() }
    }

    pub(crate) fn upstream(service: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::Upstream { service: service.into(), details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit states.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidInput { .. }
            | AppError::TemplateRender { .. }
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateLoad { .. } | AppError::Parse(_) => io::ErrorKind::InvalidData,
            AppError::SecretNotFound { .. } => io::ErrorKind::NotFound,
            AppError::Upstream { .. } => io::ErrorKind::Other,
            AppError::Cancelled => io::ErrorKind::Interrupted,
        }
    }
}
