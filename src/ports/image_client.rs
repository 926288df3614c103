//! Image generation API port definition.

use url::Url;

use crate::domain::AppError;

/// Image produced by the generation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    /// Encoded image returned inline.
    Bytes { content_type: String, data: Vec<u8> },
    /// Image hosted by the provider.
    Url(Url),
}

impl GeneratedImage {
    /// File extension matching the image encoding.
    pub fn extension(&self) -> &'static str {
        match self {
            GeneratedImage::Bytes { content_type, .. } => match content_type.as_str() {
                "image/png" => "png",
                "image/jpeg" | "image/jpg" => "jpg",
                "image/webp" => "webp",
                _ => "bin",
            },
            GeneratedImage::Url(_) => "url",
        }
    }
}

/// Port for image generation.
pub trait ImageClient: Send + Sync {
    /// Generate one image for an already augmented prompt.
    fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_follows_content_type() {
        let png = GeneratedImage::Bytes { content_type: "image/png".into(), data: vec![] };
        assert_eq!(png.extension(), "png");

        let jpeg = GeneratedImage::Bytes { content_type: "image/jpeg".into(), data: vec![] };
        assert_eq!(jpeg.extension(), "jpg");

        let other = GeneratedImage::Bytes { content_type: "text/plain".into(), data: vec![] };
        assert_eq!(other.extension(), "bin");
    }
}
