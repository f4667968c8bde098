//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and [`ChatCompletionsClient`], an implementation for
//! OpenAI-compatible `/v1/chat/completions` endpoints (SambaNova, OpenAI, local proxies).
//!
//! Every failure is classified into a [`CompletionError`] at this boundary; callers never see
//! raw transport errors.

use async_trait::async_trait;
use prompt::ChatMessage;

mod chat_completions;
mod error;

pub use chat_completions::{
    ChatCompletionsClient, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT,
};
pub use error::CompletionError;

/// LLM client interface: one non-streaming completion for a list of user/assistant messages.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text. Implementations prepend their system prompt, if any.
    async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<String, CompletionError>;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
