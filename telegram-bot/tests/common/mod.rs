//! Shared test doubles: a recording [`Bot`] and a scripted [`LlmClient`].

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use llm_client::{CompletionError, LlmClient};
use prompt::ChatMessage;
use telegram_relay_bot::{
    Bot, ButtonPress, Chat, Message, RelayError, Reply, Result, Router, SessionStore,
    UsageCounters, User,
};

/// Records every delivery. The first `fail_deliveries` calls to `send_reply` fail.
#[derive(Default)]
pub struct MockBot {
    pub deliveries: Mutex<Vec<(i64, Reply)>>,
    pub typing: AtomicUsize,
    fail_deliveries: AtomicUsize,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(count: usize) -> Arc<Self> {
        let bot = Self::default();
        bot.fail_deliveries.store(count, Ordering::SeqCst);
        Arc::new(bot)
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.deliveries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, reply)| reply.clone())
            .collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.replies().last().map(|reply| reply.text.clone())
    }

    pub fn typing_count(&self) -> usize {
        self.typing.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let remaining = self.fail_deliveries.load(Ordering::SeqCst);
        if remaining > 0 {
            self.fail_deliveries.store(remaining - 1, Ordering::SeqCst);
            return Err(RelayError::Bot("delivery refused".to_string()));
        }
        self.deliveries
            .lock()
            .unwrap()
            .push((chat.id, reply.clone()));
        Ok(())
    }

    async fn send_typing(&self, _chat: &Chat) -> Result<()> {
        self.typing.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Answers from a queue of outcomes, then with `fallback`. Records model and messages per request.
pub struct MockLlm {
    outcomes: Mutex<VecDeque<std::result::Result<String, CompletionError>>>,
    fallback: std::result::Result<String, CompletionError>,
    pub requests: Mutex<Vec<(String, Vec<ChatMessage>)>>,
}

impl MockLlm {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::scripted(Vec::new(), Ok(text.to_string()))
    }

    pub fn failing(error: CompletionError) -> Arc<Self> {
        Self::scripted(Vec::new(), Err(error))
    }

    pub fn scripted(
        outcomes: Vec<std::result::Result<String, CompletionError>>,
        fallback: std::result::Result<String, CompletionError>,
    ) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            fallback,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn models(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(model, _)| model.clone())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> std::result::Result<String, CompletionError> {
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), messages));
        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

pub fn router(bot: Arc<MockBot>, llm: Arc<dyn LlmClient>) -> Router {
    Router::new(
        bot,
        llm,
        SessionStore::new(),
        Arc::new(UsageCounters::new()),
    )
}

pub fn user(id: i64, first_name: &str) -> User {
    User {
        id,
        username: None,
        first_name: Some(first_name.to_string()),
        last_name: None,
    }
}

pub fn text_message(user_id: i64, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: user(user_id, "Asha"),
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

pub fn button(user_id: i64, data: &str) -> ButtonPress {
    ButtonPress {
        user: user(user_id, "Asha"),
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        data: data.to_string(),
    }
}
