//! Segmind text-to-image client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiCredentials, AppError, ImageApiConfig};
use crate::ports::{GeneratedImage, ImageClient};

const SERVICE: &str = "images";
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the Segmind text-to-image API.
#[derive(Clone)]
pub struct HttpImageClient {
    api_key: String,
    config: ImageApiConfig,
    client: Client,
}

impl std::fmt::Debug for HttpImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageClient")
            .field("api_url", &self.config.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpImageClient {
    pub fn new(credentials: ApiCredentials, config: &ImageApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key: credentials.api_key, config: config.clone(), client })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    prompt: &'a str,
    samples: u32,
    scheduler: &'a str,
    num_inference_steps: u32,
    guidance_scale: f32,
    seed: u64,
    img_width: u32,
    img_height: u32,
    base64: bool,
}

/// JSON body some deployments return instead of raw image bytes.
#[derive(Debug, Deserialize)]
struct HostedImage {
    url: Url,
}

impl ImageClient for HttpImageClient {
    fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, AppError> {
        let api_request = ApiRequest {
            prompt,
            samples: self.config.samples,
            scheduler: &self.config.scheduler,
            num_inference_steps: self.config.num_inference_steps,
            guidance_scale: self.config.guidance_scale,
            seed: self.config.seed,
            img_width: self.config.width,
            img_height: self.config.height,
            base64: false,
        };

        let response = self
            .client
            .post(self.config.api_url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&api_request)
            .send()
            .map_err(|e| {
                tracing::warn!("Image generation request failed: {}", e);
                AppError::upstream(SERVICE, format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::upstream(
                SERVICE,
                format!("API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or(value).trim().to_ascii_lowercase())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = response
            .bytes()
            .map_err(|e| AppError::upstream(SERVICE, format!("Failed to read response: {}", e)))?;

        if content_type == "application/json" {
            let hosted: HostedImage = serde_json::from_slice(&data).map_err(|e| {
                AppError::upstream(SERVICE, format!("Failed to parse response: {}", e))
            })?;
            return Ok(GeneratedImage::Url(hosted.url));
        }

        if data.is_empty() {
            return Err(AppError::upstream(SERVICE, "Empty image body"));
        }

        tracing::debug!(bytes = data.len(), content_type = %content_type, "Received image");
        Ok(GeneratedImage::Bytes { content_type, data: data.to_vec() })
    }
}
