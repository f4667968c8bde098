//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names). `id` keys the per-user session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name used in greetings: first name, else username, else "there".
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.username.as_deref())
            .unwrap_or("there")
    }
}
