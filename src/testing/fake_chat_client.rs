use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::domain::{AppError, ChatModelConfig, Conversation};
use crate::ports::ChatClient;

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Failure(String),
}

/// Chat client answering by the content of the last turn.
///
/// Rules are matched in insertion order against the last turn; the default
/// reply answers everything else.
#[derive(Clone)]
pub struct FakeChatClient {
    rules: Vec<(String, Reply)>,
    default_reply: Reply,
    delays: Vec<(String, Duration)>,
    pub conversations: Arc<Mutex<Vec<Conversation>>>,
}

impl FakeChatClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            rules: vec![],
            default_reply: Reply::Text(text.into()),
            delays: vec![],
            conversations: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn reply_when(mut self, needle: impl Into<String>, text: impl Into<String>) -> Self {
        self.rules.push((needle.into(), Reply::Text(text.into())));
        self
    }

    pub fn fail_when(mut self, needle: impl Into<String>, details: impl Into<String>) -> Self {
        self.rules.push((needle.into(), Reply::Failure(details.into())));
        self
    }

    /// Hold replies to matching turns, simulating a slow completion.
    pub fn delay_when(mut self, needle: impl Into<String>, delay: Duration) -> Self {
        self.delays.push((needle.into(), delay));
        self
    }

    pub fn conversations(&self) -> Vec<Conversation> {
        self.conversations.lock().unwrap().clone()
    }
}

impl ChatClient for FakeChatClient {
    fn complete(
        &self,
        conversation: &Conversation,
        _model: &ChatModelConfig,
    ) -> Result<String, AppError> {
        self.conversations.lock().unwrap().push(conversation.clone());

        let last = conversation.last().map(|turn| turn.content.as_str()).unwrap_or_default();
        let delay = self.delays.iter().find(|(needle, _)| last.contains(needle.as_str()));
        if let Some((_, delay)) = delay {
            thread::sleep(*delay);
        }

        let reply = self
            .rules
            .iter()
            .find(|(needle, _)| last.contains(needle.as_str()))
            .map(|(_, reply)| reply)
            .unwrap_or(&self.default_reply);

        match reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Failure(details) => Err(AppError::upstream("chat", details.clone())),
        }
    }
}
