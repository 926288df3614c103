pub mod brief;
pub mod cancellation;
pub mod configuration;
pub mod conversation;
pub mod credentials;
pub mod error;
pub mod events;
pub mod image_prompt;
pub mod posts;
pub mod prompt;
pub mod recommendation;

pub use brief::{CampaignBrief, build_intent};
pub use cancellation::CancellationToken;
pub use configuration::{
    ChatApiConfig, ChatAuthScheme, ChatModelConfig, DEFAULT_CONFIG_FILE, EventsApiConfig,
    GenieConfig, ImageApiConfig, SecretProvider, SecretsConfig, TemplatesConfig, load_config,
    parse_config_content,
};
pub use conversation::{
    Conversation, ConversationTemplate, ConversationTurn, INSTAGRAM_FOLLOW_UP, Role,
    start_conversation,
};
pub use credentials::{ApiCredentials, SecretValue};
pub use error::AppError;
pub use events::{EventQuery, EventRecord, TOP_EVENTS_LIMIT, rank_events, top_titles};
pub use image_prompt::{IMAGE_STYLE_SUFFIX, augment_image_prompt};
pub use posts::{PostParseError, SocialPost, parse_posts};
pub use prompt::{PromptContext, TemplateRenderer};
pub use recommendation::{
    EventRecommendation, RECOMMENDATION_TEMPLATE, build_recommendation_request,
};
