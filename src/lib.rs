//! campaign-genie: turn a brand brief into a campaign, social posts, and event partnerships.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    AskOptions, CampaignDraft, CampaignOutcome, GCP_TOKEN_ENV, RenderedPost, ask, campaign_prompt,
    connect, open_secret_store, open_template_store, parse_post_text,
};
pub use app::commands::campaign::{CAMPAIGN_TEMPLATE, build_campaign_request};
pub use domain::{
    AppError, CampaignBrief, CancellationToken, Conversation, EventRecommendation, EventRecord,
    GenieConfig, PostParseError, SocialPost, augment_image_prompt, build_intent, load_config,
    parse_posts, rank_events, top_titles,
};
pub use ports::GeneratedImage;
