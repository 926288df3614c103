//! Parsing of generated social posts.
//!
//! The chat model answers with a numbered list of `Caption: ...` /
//! `Image Description: ...` pairs. The text is first stripped of the list
//! numbering that follows blank lines, then scanned marker by marker through
//! three states: preamble, caption, description.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const CAPTION_MARKER: &str = "Caption: ";
pub const IMAGE_DESCRIPTION_MARKER: &str = "Image Description: ";

/// One caption and image-description pair destined for social media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialPost {
    pub caption: String,
    pub image_description: String,
}

/// Malformed post text. `index` is the zero-based post position and
/// `segment` the text that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostParseError {
    #[error("post {index} has no image description: {segment:?}")]
    MissingImageDescription { index: usize, segment: String },

    #[error("post {index} has an empty {field}: {segment:?}")]
    EmptyField { index: usize, field: &'static str, segment: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Caption,
    ImageDescription,
}

impl Marker {
    fn literal(self) -> &'static str {
        match self {
            Marker::Caption => CAPTION_MARKER,
            Marker::ImageDescription => IMAGE_DESCRIPTION_MARKER,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ParseState {
    Preamble,
    InCaption { start: usize },
    InDescription { caption_start: usize, caption_end: usize, start: usize },
}

/// Parse the chat model's post list into ordered posts.
///
/// Empty input yields no posts. Any malformed entry aborts the whole batch.
pub fn parse_posts(raw_text: &str) -> Result<Vec<SocialPost>, PostParseError> {
    let text = strip_list_numbering(raw_text);
    let text = text.as_ref();

    let mut posts = Vec::new();
    let mut state = ParseState::Preamble;
    let mut cursor = 0;

    while let Some((position, marker)) = next_marker(text, cursor) {
        let after = position + marker.literal().len();
        state = match (state, marker) {
            // Anything before the first caption is preamble.
            (ParseState::Preamble, Marker::Caption) => ParseState::InCaption { start: after },
            (ParseState::Preamble, Marker::ImageDescription) => ParseState::Preamble,

            (ParseState::InCaption { start }, Marker::ImageDescription) => {
                ParseState::InDescription {
                    caption_start: start,
                    caption_end: position,
                    start: after,
                }
            }
            (ParseState::InCaption { start }, Marker::Caption) => {
                return Err(PostParseError::MissingImageDescription {
                    index: posts.len(),
                    segment: text[start..position].to_string(),
                });
            }

            (ParseState::InDescription { caption_start, caption_end, start }, Marker::Caption) => {
                posts.push(build_post(
                    posts.len(),
                    &text[caption_start..caption_end],
                    &text[start..position],
                    &text[caption_start..position],
                )?);
                ParseState::InCaption { start: after }
            }
            // A repeated description marker is part of the description text.
            (state @ ParseState::InDescription { .. }, Marker::ImageDescription) => state,
        };
        cursor = after;
    }

    match state {
        ParseState::Preamble => {}
        ParseState::InCaption { start } => {
            return Err(PostParseError::MissingImageDescription {
                index: posts.len(),
                segment: text[start..].to_string(),
            });
        }
        ParseState::InDescription { caption_start, caption_end, start } => {
            posts.push(build_post(
                posts.len(),
                &text[caption_start..caption_end],
                &text[start..],
                &text[caption_start..],
            )?);
        }
    }

    Ok(posts)
}

/// Remove `\n\n<digits>. ` list numbering between entries.
pub fn strip_list_numbering(raw_text: &str) -> std::borrow::Cow<'_, str> {
    static NUMBERING: OnceLock<Regex> = OnceLock::new();
    let numbering = NUMBERING
        .get_or_init(|| Regex::new(r"\n\n\d+\.\s").expect("List numbering pattern must be valid"));
    numbering.replace_all(raw_text, "")
}

fn next_marker(text: &str, from: usize) -> Option<(usize, Marker)> {
    let rest = &text[from..];
    let caption = rest.find(CAPTION_MARKER).map(|i| (from + i, Marker::Caption));
    let description =
        rest.find(IMAGE_DESCRIPTION_MARKER).map(|i| (from + i, Marker::ImageDescription));

    match (caption, description) {
        (Some(c), Some(d)) => Some(if c.0 <= d.0 { c } else { d }),
        (found, None) | (None, found) => found,
    }
}

fn build_post(
    index: usize,
    caption: &str,
    description: &str,
    segment: &str,
) -> Result<SocialPost, PostParseError> {
    let caption = caption.trim();
    let description = description.trim();

    if caption.is_empty() {
        return Err(PostParseError::EmptyField {
            index,
            field: "caption",
            segment: segment.to_string(),
        });
    }
    if description.is_empty() {
        return Err(PostParseError::EmptyField {
            index,
            field: "image description",
            segment: segment.to_string(),
        });
    }

    Ok(SocialPost { caption: caption.to_string(), image_description: description.to_string() })
}
