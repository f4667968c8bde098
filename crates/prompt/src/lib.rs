//! # Prompt
//!
//! Role-tagged chat messages and assembly of the message list sent to a chat completion API.
//!
//! ## Format
//!
//! Each [`ChatMessage`] serializes to one element of the OpenAI-compatible `messages` array:
//! `{"role": "system" | "user" | "assistant", "content": "..."}`.
//!
//! ## Usage
//!
//! The relay keeps per-user history as a list of user/assistant [`ChatMessage`]s and calls
//! [`with_system`] right before each request so the system instruction is never stored in history.

use serde::{Deserialize, Serialize};

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// System instruction for the multilingual relay: English, Hindi and Hinglish, conversational and concise.
pub const MULTILINGUAL_SYSTEM_PROMPT: &str = "You are a friendly and helpful AI assistant.

Supported Languages:
- English
- Hindi (हिंदी)
- Hinglish (Hindi + English mix)

Capabilities:
- Answer questions on any topic
- Help with coding and programming
- Creative writing and content generation
- Explain complex concepts simply
- Have natural conversations

Be conversational, helpful, and concise. Detect the user's language and respond accordingly.";

/// Builds the request message list: one system message followed by `history` in order.
///
/// `history` is expected to hold only user/assistant turns; it is copied, not modified.
pub fn with_system(system_message: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(system_message));
    messages.extend(history.iter().cloned());
    messages
}
