//! Secret store port definition.

use crate::domain::{AppError, SecretValue};

/// Port for secret retrieval.
pub trait SecretStore: Send + Sync {
    /// Fetch the latest version of a secret.
    ///
    /// Fails with [`AppError::SecretNotFound`] when the secret does not exist.
    fn get_secret(&self, project_id: &str, secret_id: &str) -> Result<SecretValue, AppError>;
}
