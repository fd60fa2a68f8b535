// src/llm/mod.rs
pub mod openai;

pub use openai::{OpenAiChatClient, OpenAiConfig};

use crate::utils::error::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One turn of conversation, in chat-completions wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// The language-model collaborator, reduced to its one operation.
///
/// `generate` sends a system instruction, any prior conversation carried by
/// the caller, and one new user message, and blocks until a single assistant
/// reply comes back. No streaming, no retry, no fallback text; failures
/// propagate to the caller.
#[async_trait]
pub trait ChatModel {
    async fn generate(
        &self,
        system: &str,
        prior: &[ChatMessage],
        user: ChatMessage,
    ) -> Result<ChatMessage, LlmError>;
}
