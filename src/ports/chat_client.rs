//! Chat-completion API port definition.

use crate::domain::{AppError, ChatModelConfig, Conversation};

/// Port for chat-completion calls.
pub trait ChatClient: Send + Sync {
    /// Submit the conversation and return the assistant's reply text.
    ///
    /// Fails with [`AppError::Upstream`] on non-2xx responses or timeouts.
    fn complete(
        &self,
        conversation: &Conversation,
        model: &ChatModelConfig,
    ) -> Result<String, AppError>;
}
