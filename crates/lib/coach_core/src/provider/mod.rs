//! Chat-completion provider wire types, errors and the provider trait.
//!
//! # Public API
//!
//! - [`ChatProvider`]: one completion call per invocation, no retries
//! - [`CompletionRequest`]: system + user message, model, token cap
//! - [`Completion`]: decoded response; [`Completion::content`] unwraps
//!   `choices[0].message.content`
//! - [`openai::OpenAiCompatibleProvider`]: reqwest-backed implementation

pub mod openai;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from a single provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider response parse error: {0}")]
    Decode(String),
}

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// A two-message request: system prompt followed by the user's text.
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_message: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: system_prompt.into(),
                },
                ChatMessage {
                    role: Role::User,
                    content: user_message.into(),
                },
            ],
            max_tokens,
        }
    }

    /// Content of the system message, if any.
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }
}

/// Decoded chat-completion response.
///
/// Every level is optional so a partial or empty payload still decodes;
/// [`Completion::content`] decides whether it carried usable text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Completion {
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl Completion {
    /// Text of the first choice; `None` when absent or empty.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .as_deref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
            .filter(|c| !c.is_empty())
    }
}

/// A chat-completion backend.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Issues exactly one completion call.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError>;
}
