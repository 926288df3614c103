use crate::domain::{AppError, GenieConfig, TemplateRenderer};
use crate::ports::{ChatClient, EventsClient, ImageClient, TemplateStore};

/// Application context holding the collaborators of one request.
///
/// The events and image clients are optional so that a request which needs
/// neither branch does not have to resolve their credentials.
pub struct AppContext {
    config: GenieConfig,
    templates: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    chat: Box<dyn ChatClient>,
    events: Option<Box<dyn EventsClient>>,
    images: Option<Box<dyn ImageClient>>,
}

impl AppContext {
    /// Create a new application context.
    pub fn new(
        config: GenieConfig,
        templates: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        chat: Box<dyn ChatClient>,
    ) -> Self {
        Self { config, templates, renderer, chat, events: None, images: None }
    }

    pub fn with_events(mut self, events: Box<dyn EventsClient>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn with_images(mut self, images: Box<dyn ImageClient>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn config(&self) -> &GenieConfig {
        &self.config
    }

    pub fn templates(&self) -> &dyn TemplateStore {
        self.templates.as_ref()
    }

    pub fn renderer(&self) -> &dyn TemplateRenderer {
        self.renderer.as_ref()
    }

    pub fn chat(&self) -> &dyn ChatClient {
        self.chat.as_ref()
    }

    /// Events client, or a configuration error when the request was built without one.
    pub fn events(&self) -> Result<&dyn EventsClient, AppError> {
        self.events
            .as_deref()
            .ok_or_else(|| AppError::config_error("No events client configured for this request"))
    }

    /// Image client, or a configuration error when the request was built without one.
    pub fn images(&self) -> Result<&dyn ImageClient, AppError> {
        self.images
            .as_deref()
            .ok_or_else(|| AppError::config_error("No image client configured for this request"))
    }
}
