//! Chat conversation assembly.
//!
//! A [`Conversation`] is never mutated in place: every append returns a new,
//! longer sequence, so a loaded [`ConversationTemplate`] can be shared across
//! requests.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Follow-up instruction that asks for ten posts in the literal
/// `Caption: ... Image Description: ...` format the post parser expects.
pub const INSTAGRAM_FOLLOW_UP: &str = "Amazing! can you generate a numbered list of 10 Instagram \
posts prompting this campaign. I only need an emoji-filled caption and highly detailed and \
specific image description that will be sent to an AI Image Generator as a prompt. I need the \
answer in this format:
1. Caption: 🎉🎬 Celebrating 100 years of Disney magic! Join us on this enchanting journey with \
#ACenturyofDreams 🏰💖
2. Image Description: A colorful image of a retro suitcase adorned with stickers representing \
Disney movies from different decades, set against a background of clouds and stars.
";

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// Stored prompt template: the turns that precede the user's intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTemplate {
    name: String,
    turns: Vec<ConversationTurn>,
}

impl ConversationTemplate {
    /// Parse a JSON array of `{role, content}` turns.
    ///
    /// The turns must be leading system turns followed by user/assistant pairs,
    /// so that a user turn can be appended next.
    pub fn parse(name: &str, content: &str) -> Result<Self, AppError> {
        let turns: Vec<ConversationTurn> =
            serde_json::from_str(content).map_err(|err| AppError::template_load(name, err))?;
        Self::from_turns(name, turns)
    }

    pub fn from_turns(name: &str, turns: Vec<ConversationTurn>) -> Result<Self, AppError> {
        if turns.is_empty() {
            return Err(AppError::template_load(name, "template has no turns"));
        }
        if let Some(position) = first_out_of_order(&turns) {
            return Err(AppError::template_load(
                name,
                format!(
                    "turn {} has role '{}' out of order",
                    position + 1,
                    turns[position].role.as_str()
                ),
            ));
        }
        if turns.last().is_some_and(|turn| turn.role == Role::User) {
            return Err(AppError::template_load(name, "template must not end on a user turn"));
        }

        Ok(Self { name: name.to_string(), turns })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }
}

/// Ordered turn sequence submitted to a chat-completion API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    /// Record the model's reply before a follow-up question.
    pub fn append_assistant_turn(&self, text: &str) -> Conversation {
        self.extended(ConversationTurn::new(Role::Assistant, text))
    }

    /// Append a user follow-up such as [`INSTAGRAM_FOLLOW_UP`].
    pub fn append_follow_up(&self, follow_up: &str) -> Conversation {
        self.extended(ConversationTurn::new(Role::User, follow_up))
    }

    /// Whether the turns follow system-then-alternating user/assistant order.
    pub fn is_well_formed(&self) -> bool {
        first_out_of_order(&self.turns).is_none()
            && self.turns.iter().any(|turn| turn.role == Role::User)
    }

    fn extended(&self, turn: ConversationTurn) -> Conversation {
        let mut turns = Vec::with_capacity(self.turns.len() + 1);
        turns.extend_from_slice(&self.turns);
        turns.push(turn);
        Conversation { turns }
    }
}

/// Begin a conversation from a template and the user's intent.
pub fn start_conversation(template: &ConversationTemplate, user_intent: &str) -> Conversation {
    let conversation = Conversation { turns: template.turns.clone() };
    conversation.append_follow_up(user_intent)
}

/// Index of the first turn that breaks system-then-user/assistant order.
fn first_out_of_order(turns: &[ConversationTurn]) -> Option<usize> {
    let mut expected = None;
    for (index, turn) in turns.iter().enumerate() {
        match (turn.role, expected) {
            (Role::System, None) => {}
            (Role::User, None | Some(Role::User)) => expected = Some(Role::Assistant),
            (Role::Assistant, Some(Role::Assistant)) => expected = Some(Role::User),
            _ => return Some(index),
        }
    }
    None
}
