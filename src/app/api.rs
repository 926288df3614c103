//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::adapters::{
    EmbeddedTemplateStore, FileSecretStore, FilesystemTemplateStore, GcpSecretStore,
    HttpChatClient, HttpEventsClient, HttpImageClient, MinijinjaTemplateRenderer, TokenSource,
};
use crate::app::AppContext;
use crate::app::commands::{ask, campaign, credentials};
use crate::domain::{
    CampaignBrief, CancellationToken, Conversation, GenieConfig, SecretProvider, SecretsConfig,
    SocialPost, TemplatesConfig,
};
use crate::ports::{SecretStore, TemplateStore};

pub use crate::app::commands::ask::{AskOptions, CampaignOutcome};
pub use crate::app::commands::campaign::CampaignDraft;
pub use crate::app::commands::posts::RenderedPost;
pub use crate::domain::AppError;
pub use crate::domain::EventRecommendation;

/// Environment variable holding a Secret Manager access token.
///
/// When unset, the GCP store asks `gcloud` for one.
pub const GCP_TOKEN_ENV: &str = "GENIE_GCP_ACCESS_TOKEN";

/// Open the secret store selected by `[secrets] provider`.
pub fn open_secret_store(config: &SecretsConfig) -> Result<Box<dyn SecretStore>, AppError> {
    match config.provider {
        SecretProvider::File => Ok(Box::new(FileSecretStore::new(config.file.clone()))),
        SecretProvider::Gcp => {
            let tokens = match std::env::var(GCP_TOKEN_ENV) {
                Ok(token) if !token.trim().is_empty() => TokenSource::Static(token.trim().into()),
                _ => TokenSource::Gcloud,
            };
            Ok(Box::new(GcpSecretStore::new(config, tokens)?))
        }
    }
}

/// Open the prompt template store: the override directory when configured,
/// the embedded catalog otherwise.
pub fn open_template_store(config: &TemplatesConfig) -> Box<dyn TemplateStore> {
    match &config.dir {
        Some(dir) => Box::new(FilesystemTemplateStore::new(dir.clone())),
        None => Box::new(EmbeddedTemplateStore::new()),
    }
}

/// Build the request context, resolving credentials only for the clients
/// the request needs.
pub fn connect(
    config: GenieConfig,
    secrets: &dyn SecretStore,
    options: &AskOptions,
    cancel: &CancellationToken,
) -> Result<AppContext, AppError> {
    cancel.check()?;
    let project_id = credentials::resolve_project_id(secrets, &config.secrets)?;

    cancel.check()?;
    let chat_credentials =
        credentials::load_credentials(secrets, &project_id, &config.chat.secret_id)?;
    let chat = HttpChatClient::new(chat_credentials, &config.chat)?;

    let events = if options.wants_events() {
        cancel.check()?;
        let creds = credentials::load_credentials(secrets, &project_id, &config.events.secret_id)?;
        Some(HttpEventsClient::new(creds, &config.events)?)
    } else {
        None
    };

    let images = if options.wants_images() {
        cancel.check()?;
        let creds = credentials::load_credentials(secrets, &project_id, &config.images.secret_id)?;
        Some(HttpImageClient::new(creds, &config.images)?)
    } else {
        None
    };

    let templates = open_template_store(&config.templates);
    let mut ctx = AppContext::new(
        config,
        templates,
        Box::new(MinijinjaTemplateRenderer::new()),
        Box::new(chat),
    );
    if let Some(events) = events {
        ctx = ctx.with_events(Box::new(events));
    }
    if let Some(images) = images {
        ctx = ctx.with_images(Box::new(images));
    }
    Ok(ctx)
}

/// Run a full campaign request against the configured services.
pub fn ask(
    config: GenieConfig,
    options: &AskOptions,
    cancel: &CancellationToken,
) -> Result<CampaignOutcome, AppError> {
    config.validate()?;
    let secrets = open_secret_store(&config.secrets)?;
    let ctx = connect(config, secrets.as_ref(), options, cancel)?;
    ask::execute(&ctx, options, cancel)
}

/// Campaign conversation for a brief, without any network call.
pub fn campaign_prompt(
    config: &GenieConfig,
    brief: &CampaignBrief,
) -> Result<Conversation, AppError> {
    let templates = open_template_store(&config.templates);
    campaign::build_campaign_request(templates.as_ref(), brief)
}

/// Parse a saved chat response into posts.
pub fn parse_post_text(raw_text: &str) -> Result<Vec<SocialPost>, AppError> {
    Ok(crate::domain::parse_posts(raw_text)?)
}
