pub mod genie_config;
pub mod loader;

pub use genie_config::{
    ChatApiConfig, ChatAuthScheme, ChatModelConfig, EventsApiConfig, GenieConfig,
    ImageApiConfig, SecretProvider, SecretsConfig, TemplatesConfig,
};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
