pub mod chat_client_http;
pub mod events_client_http;
pub mod image_client_http;
pub mod secret_store_file;
pub mod secret_store_gcp;
pub mod template;
pub mod template_store_embedded;
pub mod template_store_filesystem;

pub use chat_client_http::HttpChatClient;
pub use events_client_http::HttpEventsClient;
pub use image_client_http::HttpImageClient;
pub use secret_store_file::FileSecretStore;
pub use secret_store_gcp::{GcpSecretStore, TokenSource};
pub use template::MinijinjaTemplateRenderer;
pub use template_store_embedded::EmbeddedTemplateStore;
pub use template_store_filesystem::FilesystemTemplateStore;
