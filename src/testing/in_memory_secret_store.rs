use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, SecretValue};
use crate::ports::SecretStore;

/// Secret store keyed by `(project_id, secret_id)` that records every lookup.
#[derive(Clone, Default)]
pub struct InMemorySecretStore {
    secrets: HashMap<(String, String), String>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(
        mut self,
        project_id: impl Into<String>,
        secret_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.secrets.insert((project_id.into(), secret_id.into()), value.into());
        self
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl SecretStore for InMemorySecretStore {
    fn get_secret(&self, project_id: &str, secret_id: &str) -> Result<SecretValue, AppError> {
        self.requests.lock().unwrap().push((project_id.to_string(), secret_id.to_string()));
        self.secrets
            .get(&(project_id.to_string(), secret_id.to_string()))
            .map(|value| SecretValue::new(value.clone()))
            .ok_or_else(|| AppError::SecretNotFound {
                project_id: project_id.to_string(),
                secret_id: secret_id.to_string(),
            })
    }
}
