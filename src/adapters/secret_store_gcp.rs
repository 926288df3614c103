//! GCP Secret Manager client using the REST API.

use std::process::Command;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, SecretValue, SecretsConfig};
use crate::ports::SecretStore;

const SERVICE: &str = "secret-manager";

/// Where the OAuth access token for Secret Manager comes from.
#[derive(Clone)]
pub enum TokenSource {
    /// Fixed token, e.g. from `GENIE_GCP_ACCESS_TOKEN`.
    Static(String),
    /// `gcloud auth print-access-token` for the active user account.
    Gcloud,
}

impl std::fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Static(_) => f.write_str("Static([REDACTED])"),
            TokenSource::Gcloud => f.write_str("Gcloud"),
        }
    }
}

impl TokenSource {
    fn access_token(&self) -> Result<String, AppError> {
        match self {
            TokenSource::Static(token) => Ok(token.clone()),
            TokenSource::Gcloud => {
                let output = Command::new("gcloud")
                    .args(["auth", "print-access-token"])
                    .output()
                    .map_err(|e| {
                        AppError::Configuration(format!("Failed to run gcloud: {}", e))
                    })?;

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                    return Err(AppError::Configuration(format!(
                        "gcloud auth print-access-token failed: {}",
                        if stderr.is_empty() { "Unknown error".to_string() } else { stderr }
                    )));
                }

                let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if token.is_empty() {
                    return Err(AppError::config_error("gcloud returned an empty access token"));
                }
                Ok(token)
            }
        }
    }
}

/// Secret store reading the latest secret versions from GCP Secret Manager.
#[derive(Debug, Clone)]
pub struct GcpSecretStore {
    api_url: Url,
    tokens: TokenSource,
    client: Client,
}

impl GcpSecretStore {
    pub fn new(config: &SecretsConfig, tokens: TokenSource) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), tokens, client })
    }

    fn access_url(&self, project_id: &str, secret_id: &str) -> Result<Url, AppError> {
        self.api_url
            .join(&format!("projects/{}/secrets/{}/versions/latest:access", project_id, secret_id))
            .map_err(|e| AppError::Configuration(format!("Invalid Secret Manager URL: {}", e)))
    }
}

#[derive(Debug, Deserialize)]
struct AccessResponse {
    payload: Payload,
}

#[derive(Debug, Deserialize)]
struct Payload {
    data: String,
}

impl SecretStore for GcpSecretStore {
    fn get_secret(&self, project_id: &str, secret_id: &str) -> Result<SecretValue, AppError> {
        tracing::info!("Getting secret {} from GCP project {}", secret_id, project_id);

        let url = self.access_url(project_id, secret_id)?;
        let token = self.tokens.access_token()?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .map_err(|e| AppError::upstream(SERVICE, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::SecretNotFound {
                project_id: project_id.to_string(),
                secret_id: secret_id.to_string(),
            });
        }
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::upstream(
                SERVICE,
                format!("API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        let body: AccessResponse = response
            .json()
            .map_err(|e| AppError::upstream(SERVICE, format!("Failed to parse response: {}", e)))?;

        let bytes = STANDARD.decode(body.payload.data.as_bytes()).map_err(|e| {
            AppError::upstream(SERVICE, format!("Secret payload is not base64: {}", e))
        })?;
        let text = String::from_utf8(bytes).map_err(|e| {
            AppError::upstream(SERVICE, format!("Secret payload is not UTF-8: {}", e))
        })?;

        Ok(SecretValue::new(text))
    }
}
