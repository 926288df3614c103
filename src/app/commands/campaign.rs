//! Brand platform request: template, intent, and the first chat call.

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{
    AppError, CampaignBrief, CancellationToken, Conversation, ConversationTemplate,
    start_conversation,
};
use crate::ports::TemplateStore;

/// Template name of the stored campaign conversation.
pub const CAMPAIGN_TEMPLATE: &str = "campaign.json";

/// Brand platform text and the conversation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignDraft {
    pub brief: CampaignBrief,
    /// Request turns followed by the model's reply.
    pub conversation: Conversation,
    pub text: String,
}

/// Load and validate the stored campaign template.
pub fn load_campaign_template(
    templates: &dyn TemplateStore,
) -> Result<ConversationTemplate, AppError> {
    let raw = templates.read_template(CAMPAIGN_TEMPLATE)?;
    ConversationTemplate::parse(CAMPAIGN_TEMPLATE, &raw)
}

/// Conversation ready to submit to the chat API for a brief.
pub fn build_campaign_request(
    templates: &dyn TemplateStore,
    brief: &CampaignBrief,
) -> Result<Conversation, AppError> {
    let template = load_campaign_template(templates)?;
    let intent = brief.intent();
    tracing::debug!(intent_len = intent.len(), "Built campaign intent");
    Ok(start_conversation(&template, &intent))
}

/// Ask the chat model for a brand platform.
pub fn request_campaign(
    ctx: &AppContext,
    brief: &CampaignBrief,
    cancel: &CancellationToken,
) -> Result<CampaignDraft, AppError> {
    let request = build_campaign_request(ctx.templates(), brief)?;

    cancel.check()?;
    tracing::info!("Getting campaign for {} from the chat model", brief.brand());
    let text = ctx.chat().complete(&request, &ctx.config().chat.model)?;
    cancel.check()?;

    let conversation = request.append_assistant_turn(&text);
    Ok(CampaignDraft { brief: brief.clone(), conversation, text })
}
