//! Full campaign request: brand platform, then the posts and events branches.

use std::panic;
use std::thread;

use chrono::NaiveDate;

use crate::app::AppContext;
use crate::app::commands::campaign::{CampaignDraft, request_campaign};
use crate::app::commands::events::recommend_events;
use crate::app::commands::posts::{RenderedPost, generate_posts};
use crate::domain::{AppError, CampaignBrief, CancellationToken, EventRecommendation};

/// Options for one campaign request.
#[derive(Debug, Clone)]
pub struct AskOptions {
    pub brief: CampaignBrief,
    /// Generate social posts for the campaign.
    pub include_posts: bool,
    /// Generate an image for each post.
    pub include_images: bool,
    /// First day of the events search window.
    pub today: NaiveDate,
}

impl AskOptions {
    /// Whether the events branch runs for this request.
    pub fn wants_events(&self) -> bool {
        self.brief.location().is_some()
    }

    pub fn wants_images(&self) -> bool {
        self.include_posts && self.include_images
    }
}

/// Everything produced for one brief.
#[derive(Debug, Clone)]
pub struct CampaignOutcome {
    pub campaign: CampaignDraft,
    pub posts: Option<Vec<RenderedPost>>,
    pub events: Option<EventRecommendation>,
}

/// Execute a campaign request.
///
/// The campaign text is always produced. Posts run when requested, events when
/// the brief has a location, and both run on separate threads when both apply.
/// Any failure fails the whole request.
pub fn execute(
    ctx: &AppContext,
    options: &AskOptions,
    cancel: &CancellationToken,
) -> Result<CampaignOutcome, AppError> {
    let campaign = request_campaign(ctx, &options.brief, cancel)?;

    let (posts, events) = match (options.include_posts, options.brief.location()) {
        (false, None) => (None, None),
        (true, None) => {
            (Some(generate_posts(ctx, &campaign, options.include_images, cancel)?), None)
        }
        (false, Some(city)) => {
            (None, Some(recommend_events(ctx, city, &campaign.text, options.today, cancel)?))
        }
        (true, Some(city)) => {
            let (posts, events) = run_branches(ctx, &campaign, city, options, cancel)?;
            (Some(posts), Some(events))
        }
    };

    cancel.check()?;
    Ok(CampaignOutcome { campaign, posts, events })
}

fn run_branches(
    ctx: &AppContext,
    campaign: &CampaignDraft,
    city: &str,
    options: &AskOptions,
    cancel: &CancellationToken,
) -> Result<(Vec<RenderedPost>, EventRecommendation), AppError> {
    let events_campaign = campaign.text.clone();
    // Cancelled when either branch fails so the sibling stops before its next call.
    let branches = cancel.child_token();
    let events_branch = branches.clone();

    let (posts, events) = thread::scope(|scope| {
        let events = scope.spawn(move || {
            let result =
                recommend_events(ctx, city, &events_campaign, options.today, &events_branch);
            if result.is_err() {
                events_branch.cancel();
            }
            result
        });
        let posts = generate_posts(ctx, campaign, options.include_images, &branches);
        if posts.is_err() {
            branches.cancel();
        }
        let events = events.join().unwrap_or_else(|payload| panic::resume_unwind(payload));
        (posts, events)
    });

    match (posts, events) {
        (Ok(posts), Ok(events)) => Ok((posts, events)),
        (Err(posts), Err(events)) => Err(first_failure(posts, events)),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err),
    }
}

/// The failure that stopped the branches, not the cancellation it caused.
fn first_failure(posts: AppError, events: AppError) -> AppError {
    match (posts, events) {
        (AppError::Cancelled, events) => events,
        (posts, _) => posts,
    }
}
