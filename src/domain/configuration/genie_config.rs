//! Configuration models loaded from `genie.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration for one campaign request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenieConfig {
    /// Secret store configuration.
    #[serde(default)]
    pub secrets: SecretsConfig,
    /// Chat-completion API configuration.
    #[serde(default)]
    pub chat: ChatApiConfig,
    /// Events search API configuration.
    #[serde(default)]
    pub events: EventsApiConfig,
    /// Image generation API configuration.
    #[serde(default)]
    pub images: ImageApiConfig,
    /// Prompt template location.
    #[serde(default)]
    pub templates: TemplatesConfig,
}

impl GenieConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.secrets.validate()?;
        self.chat.validate()?;
        self.events.validate()?;
        self.images.validate()?;
        Ok(())
    }
}

/// Which secret store backs credential lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretProvider {
    /// Local TOML secrets file.
    #[default]
    File,
    /// GCP Secret Manager.
    Gcp,
}

/// Secret store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsConfig {
    #[serde(default)]
    pub provider: SecretProvider,
    /// Secrets file used by the `file` provider.
    #[serde(default = "default_secrets_file")]
    pub file: PathBuf,
    /// Project holding the secrets (or the team project pointer).
    #[serde(default = "default_project_id")]
    pub project_id: String,
    /// Secret in `project_id` whose value names the project that holds the
    /// API credentials.
    #[serde(default)]
    pub team_project_secret_id: Option<String>,
    /// Secret Manager REST base URL.
    #[serde(default = "default_secret_manager_url")]
    pub api_url: Url,
    #[serde(default = "default_short_timeout")]
    pub timeout_secs: u64,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            provider: SecretProvider::default(),
            file: default_secrets_file(),
            project_id: default_project_id(),
            team_project_secret_id: None,
            api_url: default_secret_manager_url(),
            timeout_secs: default_short_timeout(),
        }
    }
}

impl SecretsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.project_id.trim().is_empty() {
            return Err(AppError::config_error("secrets.project_id must not be empty"));
        }
        if self.team_project_secret_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            return Err(AppError::config_error(
                "secrets.team_project_secret_id must not be empty when set",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("secrets.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

/// How the chat API expects the key to be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChatAuthScheme {
    /// `Authorization: Bearer <key>` (OpenAI).
    #[default]
    Bearer,
    /// `api-key: <key>` (Azure OpenAI).
    ApiKey,
}

/// Chat-completion API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatApiConfig {
    /// Full chat-completions endpoint URL.
    #[serde(default = "default_chat_url")]
    pub api_url: Url,
    #[serde(default)]
    pub auth: ChatAuthScheme,
    #[serde(default = "default_long_timeout")]
    pub timeout_secs: u64,
    /// Secret holding the chat credentials.
    #[serde(default = "default_chat_secret")]
    pub secret_id: String,
    /// Model and sampling parameters sent with every completion.
    #[serde(default)]
    pub model: ChatModelConfig,
}

impl Default for ChatApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_chat_url(),
            auth: ChatAuthScheme::default(),
            timeout_secs: default_long_timeout(),
            secret_id: default_chat_secret(),
            model: ChatModelConfig::default(),
        }
    }
}

impl ChatApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("chat.timeout_secs must be greater than 0"));
        }
        if self.secret_id.trim().is_empty() {
            return Err(AppError::config_error("chat.secret_id must not be empty"));
        }
        self.model.validate()
    }
}

/// Model and sampling parameters for a completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatModelConfig {
    /// Model (or Azure deployment) name.
    #[serde(default = "default_model")]
    pub name: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default)]
    pub frequency_penalty: f32,
    #[serde(default)]
    pub presence_penalty: f32,
}

impl Default for ChatModelConfig {
    fn default() -> Self {
        Self {
            name: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

impl ChatModelConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::config_error("chat.model.name must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error("chat.model.temperature must be between 0 and 2"));
        }
        if !(0.0..=1.0).contains(&self.top_p) || self.top_p == 0.0 {
            return Err(AppError::config_error("chat.model.top_p must be in (0, 1]"));
        }
        if self.max_tokens == 0 {
            return Err(AppError::config_error("chat.model.max_tokens must be greater than 0"));
        }
        if !(-2.0..=2.0).contains(&self.frequency_penalty)
            || !(-2.0..=2.0).contains(&self.presence_penalty)
        {
            return Err(AppError::config_error("chat.model penalties must be between -2 and 2"));
        }
        Ok(())
    }
}

/// Events search API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsApiConfig {
    #[serde(default = "default_events_url")]
    pub api_url: Url,
    /// Maximum events fetched per search.
    #[serde(default = "default_events_limit")]
    pub limit: u32,
    /// Days ahead of today covered by the search.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_short_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_events_secret")]
    pub secret_id: String,
}

impl Default for EventsApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_events_url(),
            limit: default_events_limit(),
            window_days: default_window_days(),
            timeout_secs: default_short_timeout(),
            secret_id: default_events_secret(),
        }
    }
}

impl EventsApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.limit == 0 {
            return Err(AppError::config_error("events.limit must be greater than 0"));
        }
        if self.window_days == 0 {
            return Err(AppError::config_error("events.window_days must be greater than 0"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("events.timeout_secs must be greater than 0"));
        }
        if self.secret_id.trim().is_empty() {
            return Err(AppError::config_error("events.secret_id must not be empty"));
        }
        Ok(())
    }
}

/// Image generation API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageApiConfig {
    #[serde(default = "default_images_url")]
    pub api_url: Url,
    #[serde(default = "default_samples")]
    pub samples: u32,
    #[serde(default = "default_scheduler")]
    pub scheduler: String,
    #[serde(default = "default_inference_steps")]
    pub num_inference_steps: u32,
    #[serde(default = "default_guidance_scale")]
    pub guidance_scale: f32,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_image_side")]
    pub width: u32,
    #[serde(default = "default_image_side")]
    pub height: u32,
    #[serde(default = "default_long_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_images_secret")]
    pub secret_id: String,
}

impl Default for ImageApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_images_url(),
            samples: default_samples(),
            scheduler: default_scheduler(),
            num_inference_steps: default_inference_steps(),
            guidance_scale: default_guidance_scale(),
            seed: default_seed(),
            width: default_image_side(),
            height: default_image_side(),
            timeout_secs: default_long_timeout(),
            secret_id: default_images_secret(),
        }
    }
}

impl ImageApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.samples == 0 {
            return Err(AppError::config_error("images.samples must be greater than 0"));
        }
        if self.num_inference_steps == 0 {
            return Err(AppError::config_error(
                "images.num_inference_steps must be greater than 0",
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(AppError::config_error("images.width and images.height must be non-zero"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("images.timeout_secs must be greater than 0"));
        }
        if self.secret_id.trim().is_empty() {
            return Err(AppError::config_error("images.secret_id must not be empty"));
        }
        Ok(())
    }
}

/// Prompt template location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory overriding the embedded templates.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_secrets_file() -> PathBuf {
    PathBuf::from(".genie/secrets.toml")
}

fn default_project_id() -> String {
    "campaign-genie".to_string()
}

fn default_secret_manager_url() -> Url {
    Url::parse("https://secretmanager.googleapis.com/v1/")
        .expect("Default Secret Manager URL must be valid")
}

fn default_chat_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("Default chat URL must be valid")
}

fn default_events_url() -> Url {
    Url::parse("https://api.predicthq.com/v1/events/").expect("Default events URL must be valid")
}

fn default_images_url() -> Url {
    Url::parse("https://api.segmind.com/v1/sdxl1.0-colossus-lightning")
        .expect("Default images URL must be valid")
}

fn default_short_timeout() -> u64 {
    30
}

fn default_long_timeout() -> u64 {
    120
}

fn default_chat_secret() -> String {
    "openai".to_string()
}

fn default_events_secret() -> String {
    "predict_hq".to_string()
}

fn default_images_secret() -> String {
    "segmind".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f32 {
    0.8
}

fn default_max_tokens() -> u32 {
    1200
}

fn default_top_p() -> f32 {
    0.95
}

fn default_events_limit() -> u32 {
    500
}

fn default_window_days() -> u32 {
    365
}

fn default_samples() -> u32 {
    1
}

fn default_scheduler() -> String {
    "DPM++ SDE".to_string()
}

fn default_inference_steps() -> u32 {
    9
}

fn default_guidance_scale() -> f32 {
    1.0
}

fn default_seed() -> u64 {
    902448
}

fn default_image_side() -> u32 {
    1024
}
