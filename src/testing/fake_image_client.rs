use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{GeneratedImage, ImageClient};

/// Image client returning a tiny PNG payload per prompt.
#[derive(Clone)]
pub struct FakeImageClient {
    failure: Option<String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeImageClient {
    pub fn new() -> Self {
        Self { failure: None, prompts: Arc::new(Mutex::new(vec![])) }
    }

    pub fn failing(details: impl Into<String>) -> Self {
        Self { failure: Some(details.into()), prompts: Arc::new(Mutex::new(vec![])) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ImageClient for FakeImageClient {
    fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.failure {
            Some(details) => Err(AppError::upstream("images", details.clone())),
            None => Ok(GeneratedImage::Bytes {
                content_type: "image/png".to_string(),
                data: vec![0x89, b'P', b'N', b'G'],
            }),
        }
    }
}
