//! Event partnership recommendation prompt.

use serde::Serialize;

use crate::domain::prompt::{PromptContext, TemplateRenderer};
use crate::domain::{AppError, Conversation, EventRecord};

/// Template name of the recommendation prompt in the template store.
pub const RECOMMENDATION_TEMPLATE: &str = "event_recommendation.j2";

/// Ranked events for a city and the chat model's partnership advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecommendation {
    pub city: String,
    pub ranked: Vec<EventRecord>,
    pub titles: Vec<String>,
    pub text: String,
}

/// Render the recommendation prompt as a single-turn conversation.
///
/// Titles are injected comma-joined, in rank order.
pub fn build_recommendation_request(
    renderer: &dyn TemplateRenderer,
    template: &str,
    city: &str,
    campaign: &str,
    titles: &[String],
) -> Result<Conversation, AppError> {
    let context = PromptContext::new()
        .with_var("city", city)
        .with_var("campaign", campaign)
        .with_var("events_list", titles.join(","));

    let prompt = renderer.render(template, &context, RECOMMENDATION_TEMPLATE)?;
    Ok(Conversation::default().append_follow_up(prompt.trim()))
}
