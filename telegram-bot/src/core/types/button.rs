//! Inline button press type.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A press on an inline menu button. `data` is the opaque token the menu was built with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonPress {
    pub user: User,
    pub chat: Chat,
    pub data: String,
}
