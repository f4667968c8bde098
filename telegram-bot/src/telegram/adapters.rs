//! Conversions from teloxide types into core [`Message`], [`User`] and [`ButtonPress`].

use crate::core::{ButtonPress, Chat, Message, User};

/// Telegram user to core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl TelegramUserWrapper<'_> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn anonymous_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Telegram text message to core message.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl TelegramMessageWrapper<'_> {
    /// `None` for messages without text (stickers, photos, service messages).
    pub fn to_core(&self) -> Option<Message> {
        let text = self.0.text()?;
        Some(Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous_user),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat),
            },
            content: text.to_string(),
            created_at: self.0.date,
        })
    }
}

/// Telegram callback query to core button press.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl TelegramCallbackWrapper<'_> {
    /// `None` when the query carries no data. Replies go to the chat of the message the button
    /// was attached to, or to the user's private chat when that message is unavailable.
    pub fn to_core(&self) -> Option<ButtonPress> {
        let data = self.0.data.clone()?;
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let chat = match self.0.message.as_ref() {
            Some(message) => Chat {
                id: message.chat().id.0,
                chat_type: chat_type(message.chat()),
            },
            None => Chat {
                id: user.id,
                chat_type: "private".to_string(),
            },
        };
        Some(ButtonPress { user, chat, data })
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> String {
    if chat.is_private() {
        "private"
    } else if chat.is_group() || chat.is_supergroup() {
        "group"
    } else {
        "channel"
    }
    .to_string()
}
