//! Credential lookup with the optional team-project indirection.

use crate::domain::{ApiCredentials, AppError, SecretsConfig};
use crate::ports::SecretStore;

/// Project holding the API credentials.
///
/// With `team_project_secret_id` set, the configured project only stores a
/// pointer secret whose value is the real project id.
pub fn resolve_project_id(
    store: &dyn SecretStore,
    config: &SecretsConfig,
) -> Result<String, AppError> {
    let Some(pointer) = config.team_project_secret_id.as_deref() else {
        return Ok(config.project_id.clone());
    };

    tracing::info!("Resolving team secrets project from {}", config.project_id);
    let secret = store.get_secret(&config.project_id, pointer)?;
    let project_id = secret.as_str();
    if project_id.is_empty() {
        return Err(AppError::Configuration(format!(
            "Secret '{}' in project '{}' does not name a project",
            pointer, config.project_id
        )));
    }
    Ok(project_id.to_string())
}

/// Fetch and decode the credentials stored under `secret_id`.
pub fn load_credentials(
    store: &dyn SecretStore,
    project_id: &str,
    secret_id: &str,
) -> Result<ApiCredentials, AppError> {
    tracing::info!("Getting {} credentials from the secret store", secret_id);
    store.get_secret(project_id, secret_id)?.credentials(secret_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemorySecretStore;

    #[test]
    fn project_id_is_used_directly_without_pointer() {
        let store = InMemorySecretStore::new();
        let config = SecretsConfig { project_id: "brand-dev".into(), ..Default::default() };

        assert_eq!(resolve_project_id(&store, &config).unwrap(), "brand-dev");
        assert!(store.requests().is_empty());
    }

    #[test]
    fn pointer_secret_names_the_team_project() {
        let store = InMemorySecretStore::new()
            .with_secret("brand-dev", "team-secrets-project", " brand-team\n")
            .with_secret("brand-team", "openai", r#"{"api_key": "sk-1"}"#);
        let config = SecretsConfig {
            project_id: "brand-dev".into(),
            team_project_secret_id: Some("team-secrets-project".into()),
            ..Default::default()
        };

        let project = resolve_project_id(&store, &config).unwrap();
        assert_eq!(project, "brand-team");

        let credentials = load_credentials(&store, &project, "openai").unwrap();
        assert_eq!(credentials.api_key, "sk-1");
    }

    #[test]
    fn blank_pointer_value_is_rejected() {
        let store = InMemorySecretStore::new().with_secret("brand-dev", "team", "  ");
        let config = SecretsConfig {
            project_id: "brand-dev".into(),
            team_project_secret_id: Some("team".into()),
            ..Default::default()
        };

        let err = resolve_project_id(&store, &config).unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("does not name")));
    }

    #[test]
    fn missing_credentials_propagate_not_found() {
        let store = InMemorySecretStore::new();
        let err = load_credentials(&store, "brand-team", "segmind").unwrap_err();
        assert!(matches!(err, AppError::SecretNotFound { .. }));
    }
}
