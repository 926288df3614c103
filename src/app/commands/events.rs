//! Event partnership recommendations for a campaign location.

use chrono::NaiveDate;

use crate::app::AppContext;
use crate::domain::{
    AppError, CancellationToken, EventQuery, EventRecommendation, RECOMMENDATION_TEMPLATE,
    TOP_EVENTS_LIMIT, build_recommendation_request, rank_events, top_titles,
};

/// Search events in `city`, rank them, and ask the chat model which fit the campaign.
pub fn recommend_events(
    ctx: &AppContext,
    city: &str,
    campaign: &str,
    today: NaiveDate,
    cancel: &CancellationToken,
) -> Result<EventRecommendation, AppError> {
    let settings = &ctx.config().events;
    let query = EventQuery::for_city(city, today, settings.window_days, settings.limit)?;
    let template = ctx.templates().read_template(RECOMMENDATION_TEMPLATE)?;

    cancel.check()?;
    tracing::info!(
        "Finding events in {} between {} and {}",
        query.query,
        query.start_date,
        query.end_date
    );
    let events = ctx.events()?.search_events(&query)?;
    tracing::debug!(fetched = events.len(), "Fetched events");

    let ranked = rank_events(events);
    let titles = top_titles(&ranked, TOP_EVENTS_LIMIT);

    let request =
        build_recommendation_request(ctx.renderer(), &template, &query.query, campaign, &titles)?;

    cancel.check()?;
    tracing::info!("Getting event recommendations for {} from the chat model", city);
    let text = ctx.chat().complete(&request, &ctx.config().chat.model)?;
    cancel.check()?;

    Ok(EventRecommendation { city: query.query, ranked, titles, text })
}
