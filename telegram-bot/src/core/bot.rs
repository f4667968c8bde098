//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide.
//! Tests substitute a recording implementation.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, Reply};

/// Abstraction for outbound delivery. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Delivers `reply` (text, format and optional button menu) to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;

    /// Shows a "composing" indicator in the chat until the next message is sent.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;

    /// Sends plain text without a menu.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_reply(chat, &Reply::plain(text)).await
    }
}
