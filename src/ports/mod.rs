mod chat_client;
mod events_client;
mod image_client;
mod secret_store;
mod template_store;

pub use chat_client::ChatClient;
pub use events_client::EventsClient;
pub use image_client::{GeneratedImage, ImageClient};
pub use secret_store::SecretStore;
pub use template_store::TemplateStore;
