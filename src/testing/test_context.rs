use crate::adapters::MinijinjaTemplateRenderer;
use crate::app::AppContext;
use crate::domain::GenieConfig;

use super::{FakeChatClient, FakeEventsClient, FakeImageClient, InMemoryTemplateStore};

/// Builder for an `AppContext` wired to fakes.
pub struct TestContext {
    pub config: GenieConfig,
    pub templates: InMemoryTemplateStore,
    chat: FakeChatClient,
    events: Option<FakeEventsClient>,
    images: Option<FakeImageClient>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            config: GenieConfig::default(),
            templates: InMemoryTemplateStore::new(),
            chat: FakeChatClient::replying("Brand platform"),
            events: None,
            images: None,
        }
    }

    pub fn with_template(mut self, name: &str, content: &str) -> Self {
        self.templates.insert(name, content);
        self
    }

    pub fn with_chat(mut self, chat: FakeChatClient) -> Self {
        self.chat = chat;
        self
    }

    pub fn with_events(mut self, events: FakeEventsClient) -> Self {
        self.events = Some(events);
        self
    }

    pub fn with_images(mut self, images: FakeImageClient) -> Self {
        self.images = Some(images);
        self
    }

    pub fn build(self) -> AppContext {
        let mut ctx = AppContext::new(
            self.config,
            Box::new(self.templates),
            Box::new(MinijinjaTemplateRenderer::new()),
            Box::new(self.chat),
        );
        if let Some(events) = self.events {
            ctx = ctx.with_events(Box::new(events));
        }
        if let Some(images) = self.images {
            ctx = ctx.with_images(Box::new(images));
        }
        ctx
    }
}
