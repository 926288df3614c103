mod fake_chat_client;
mod fake_events_client;
mod fake_image_client;
mod in_memory_secret_store;
mod in_memory_template_store;
mod test_context;

pub use fake_chat_client::FakeChatClient;
pub use fake_events_client::FakeEventsClient;
pub use fake_image_client::FakeImageClient;
pub use in_memory_secret_store::InMemorySecretStore;
pub use in_memory_template_store::InMemoryTemplateStore;
pub use test_context::TestContext;
