//! Campaign brief and the natural-language intent built from it.

use serde::Serialize;

use crate::domain::AppError;

/// User-supplied campaign description. Created once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignBrief {
    brand: String,
    tags: Option<String>,
    location: Option<String>,
}

impl CampaignBrief {
    /// Validate and normalize raw brief fields.
    ///
    /// Surrounding whitespace is trimmed; blank tags and locations are treated as absent.
    pub fn new(
        brand: impl Into<String>,
        tags: Option<String>,
        location: Option<String>,
    ) -> Result<Self, AppError> {
        let brand = brand.into();
        let trimmed = brand.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("brand", brand, "must not be empty"));
        }

        Ok(Self {
            brand: trimmed.to_string(),
            tags: non_blank(tags),
            location: non_blank(location),
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Instruction string asking the chat model for a brand platform.
    pub fn intent(&self) -> String {
        compose_intent(&self.brand, self.tags(), self.location())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Build the user instruction for a brand platform idea.
///
/// With tags the instruction asks for an idea carrying those characteristics,
/// otherwise for a trendy and up-beat one. A location, when given, is appended.
pub fn build_intent(
    brand: &str,
    tags: Option<&str>,
    location: Option<&str>,
) -> Result<String, AppError> {
    let brief =
        CampaignBrief::new(brand, tags.map(str::to_string), location.map(str::to_string))?;
    Ok(brief.intent())
}

fn compose_intent(brand: &str, tags: Option<&str>, location: Option<&str>) -> String {
    match (tags, location) {
        (Some(tags), Some(location)) => format!(
            "Can you come up with a new brand platform idea for {brand}, \
             with these characteristics: {tags}, in {location}?"
        ),
        (Some(tags), None) => format!(
            "Can you come up with a new brand platform idea for {brand}, \
             with these characteristics: {tags}"
        ),
        (None, Some(location)) => format!(
            "Can you come up with a new brand platform idea for {brand} \
             that is trendy and up-beat in {location}?"
        ),
        (None, None) => format!(
            "Can you come up with a new brand platform idea for {brand} \
             that is trendy and up-beat?"
        ),
    }
}
