//! Secret store backed by a local TOML file.
//!
//! Each top-level key is a secret id. String values are returned as-is and
//! tables are returned as JSON, so a file like
//!
//! ```toml
//! team-secrets-project = "brand-team"
//!
//! [openai]
//! api_key = "sk-..."
//! ```
//!
//! serves both plain and credentials secrets.

use std::path::PathBuf;

use crate::domain::{AppError, SecretValue};
use crate::ports::SecretStore;

#[derive(Debug, Clone)]
pub struct FileSecretStore {
    path: PathBuf,
}

impl FileSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<toml::Table, AppError> {
        let content = std::fs::read_to_string(&self.path).map_err(|err| {
            AppError::Configuration(format!(
                "Failed to read secrets file {}: {}",
                self.path.display(),
                err
            ))
        })?;
        Ok(toml::from_str(&content)?)
    }
}

impl SecretStore for FileSecretStore {
    fn get_secret(&self, project_id: &str, secret_id: &str) -> Result<SecretValue, AppError> {
        tracing::debug!(secret_id, path = %self.path.display(), "Reading secret from file");
        let table = self.load()?;

        let value = table.get(secret_id).ok_or_else(|| AppError::SecretNotFound {
            project_id: project_id.to_string(),
            secret_id: secret_id.to_string(),
        })?;

        match value {
            toml::Value::String(text) => Ok(SecretValue::new(text.clone())),
            toml::Value::Table(_) => {
                let json = serde_json::to_string(value).map_err(|err| {
                    AppError::Configuration(format!(
                        "Secret '{}' could not be encoded: {}",
                        secret_id, err
                    ))
                })?;
                Ok(SecretValue::new(json))
            }
            other => Err(AppError::Configuration(format!(
                "Secret '{}' must be a string or a table, found {}",
                secret_id,
                other.type_str()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_with(content: &str) -> (TempDir, FileSecretStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, content).unwrap();
        (dir, FileSecretStore::new(path))
    }

    #[test]
    fn table_secret_is_returned_as_credentials_json() {
        let (_dir, store) = store_with("[openai]\napi_key = \"sk-1\"\napi_type = \"azure\"\n");

        let secret = store.get_secret("campaign-genie", "openai").unwrap();
        assert_eq!(secret.credentials("openai").unwrap().api_key, "sk-1");
    }

    #[test]
    fn string_secret_is_returned_verbatim() {
        let (_dir, store) = store_with("team-secrets-project = \"brand-team\"\n");

        let secret = store.get_secret("campaign-genie", "team-secrets-project").unwrap();
        assert_eq!(secret.as_str(), "brand-team");
    }

    #[test]
    fn missing_secret_is_not_found() {
        let (_dir, store) = store_with("[openai]\napi_key = \"sk-1\"\n");

        let err = store.get_secret("campaign-genie", "segmind").unwrap_err();
        assert!(matches!(err, AppError::SecretNotFound { ref secret_id, .. } if secret_id == "segmind"));
    }

    #[test]
    fn unsupported_value_type_is_rejected() {
        let (_dir, store) = store_with("seed = 42\n");
        let err = store.get_secret("campaign-genie", "seed").unwrap_err();
        assert!(err.to_string().contains("integer"));
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let store = FileSecretStore::new("/nonexistent/secrets.toml");
        let err = store.get_secret("campaign-genie", "openai").unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("secrets file")));
    }
}
