//! Social posts for a campaign and their generated images.

use crate::app::AppContext;
use crate::app::commands::campaign::CampaignDraft;
use crate::domain::{
    AppError, CancellationToken, INSTAGRAM_FOLLOW_UP, SocialPost, augment_image_prompt,
    parse_posts,
};
use crate::ports::{GeneratedImage, ImageClient};

/// A parsed post with the prompt sent for its image and the image itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPost {
    pub post: SocialPost,
    pub image_prompt: String,
    /// `None` when image generation was switched off.
    pub image: Option<GeneratedImage>,
}

impl RenderedPost {
    fn text_only(post: SocialPost) -> Self {
        let image_prompt = augment_image_prompt(&post.image_description);
        Self { post, image_prompt, image: None }
    }
}

/// Ask the chat model for posts promoting the campaign and parse them.
///
/// A malformed segment fails the whole batch.
pub fn request_posts(
    ctx: &AppContext,
    draft: &CampaignDraft,
    cancel: &CancellationToken,
) -> Result<Vec<SocialPost>, AppError> {
    let conversation = draft.conversation.append_follow_up(INSTAGRAM_FOLLOW_UP);

    cancel.check()?;
    tracing::info!("Adding campaign to get back social posts");
    let raw = ctx.chat().complete(&conversation, &ctx.config().chat.model)?;
    cancel.check()?;

    tracing::info!("Parsing chat response into captions and image descriptions");
    let posts = parse_posts(&raw)?;
    tracing::debug!(count = posts.len(), "Parsed posts");
    Ok(posts)
}

/// Generate one image per post, in post order.
pub fn render_post_images(
    images: &dyn ImageClient,
    posts: Vec<SocialPost>,
    cancel: &CancellationToken,
) -> Result<Vec<RenderedPost>, AppError> {
    let mut rendered = Vec::with_capacity(posts.len());
    for post in posts {
        let mut entry = RenderedPost::text_only(post);
        cancel.check()?;
        tracing::info!("Collecting image for post {}", rendered.len() + 1);
        entry.image = Some(images.generate_image(&entry.image_prompt)?);
        rendered.push(entry);
    }
    Ok(rendered)
}

/// Posts branch of a campaign request.
pub fn generate_posts(
    ctx: &AppContext,
    draft: &CampaignDraft,
    include_images: bool,
    cancel: &CancellationToken,
) -> Result<Vec<RenderedPost>, AppError> {
    let posts = request_posts(ctx, draft, cancel)?;
    if include_images {
        render_post_images(ctx.images()?, posts, cancel)
    } else {
        Ok(posts.into_iter().map(RenderedPost::text_only).collect())
    }
}
