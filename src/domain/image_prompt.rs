/// Style qualifiers appended to every image-generation prompt.
pub const IMAGE_STYLE_SUFFIX: &str =
    ", 8k, soft lighting, highly detailed, digital painting by Android Jones";

/// Append the shared style qualifiers to an image description.
pub fn augment_image_prompt(description: &str) -> String {
    let mut prompt = String::with_capacity(description.len() + IMAGE_STYLE_SUFFIX.len());
    prompt.push_str(description);
    prompt.push_str(IMAGE_STYLE_SUFFIX);
    prompt
}
