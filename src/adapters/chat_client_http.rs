//! Chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    ApiCredentials, AppError, ChatApiConfig, ChatAuthScheme, ChatModelConfig, Conversation,
    ConversationTurn,
};
use crate::ports::ChatClient;

const SERVICE: &str = "chat";
const AZURE_API_KEY: &str = "api-key";

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct HttpChatClient {
    api_key: String,
    api_url: Url,
    auth: ChatAuthScheme,
    client: Client,
}

impl std::fmt::Debug for HttpChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatClient")
            .field("api_url", &self.api_url)
            .field("auth", &self.auth)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpChatClient {
    /// Create a new HTTP client with the given credentials and configuration.
    pub fn new(credentials: ApiCredentials, config: &ChatApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: credentials.api_key,
            api_url: config.api_url.clone(),
            auth: config.auth,
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ConversationTurn],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatClient for HttpChatClient {
    fn complete(
        &self,
        conversation: &Conversation,
        model: &ChatModelConfig,
    ) -> Result<String, AppError> {
        let api_request = ApiRequest {
            model: &model.name,
            messages: conversation.turns(),
            temperature: model.temperature,
            max_tokens: model.max_tokens,
            top_p: model.top_p,
            frequency_penalty: model.frequency_penalty,
            presence_penalty: model.presence_penalty,
        };

        tracing::debug!(
            turns = conversation.len(),
            model = %model.name,
            "Sending chat completion request"
        );

        let request =
            self.client.post(self.api_url.clone()).header(CONTENT_TYPE, "application/json");
        let request = match self.auth {
            ChatAuthScheme::Bearer => {
                request.header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            }
            ChatAuthScheme::ApiKey => request.header(AZURE_API_KEY, &self.api_key),
        };

        let response = request.json(&api_request).send().map_err(|e| {
            tracing::warn!("Chat completion request failed: {}", e);
            AppError::upstream(SERVICE, format!("HTTP request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Chat completion returned {}", status.as_u16());
            return Err(AppError::upstream(
                SERVICE,
                format!("API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::upstream(SERVICE, format!("Failed to parse response: {}", e)))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::upstream(SERVICE, "No message content in response"))
    }
}
