//! Secret values and the typed credentials contract.

use serde::Deserialize;

use crate::domain::AppError;

/// Raw secret payload as returned by a secret store.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue(String);

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretValue([REDACTED])")
    }
}

impl SecretValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Plain-text view, for secrets that hold a single value such as a project id.
    pub fn as_str(&self) -> &str {
        self.0.trim()
    }

    /// Decode the secret as API credentials.
    pub fn credentials(&self, secret_id: &str) -> Result<ApiCredentials, AppError> {
        let credentials: ApiCredentials = serde_json::from_str(&self.0).map_err(|err| {
            AppError::Configuration(format!(
                "Secret '{}' is not valid credentials JSON: {}",
                secret_id, err
            ))
        })?;
        if credentials.api_key.trim().is_empty() {
            return Err(AppError::Configuration(format!(
                "Secret '{}' has an empty api_key",
                secret_id
            )));
        }
        Ok(credentials)
    }
}

/// Credentials for one hosted API.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ApiCredentials {
    /// API key or access token.
    #[serde(alias = "token")]
    pub api_key: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials").field("api_key", &"[REDACTED]").finish()
    }
}
