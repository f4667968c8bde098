//! Command Router: dispatches inbound messages and button presses to actions.
//!
//! Every handler ends in exactly one delivery through [`Bot`]. Handler errors are caught here,
//! counted and answered with a generic apology so one bad event never stops the dispatcher.

mod action;
mod command;
pub mod replies;

pub use action::{Action, ButtonAction};
pub use command::Command;

use std::sync::Arc;

use llm_client::LlmClient;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::completion::CompletionService;
use crate::core::{
    Bot, ButtonPress, Chat, HandlerError, Message, RelayError, Reply, Result, User,
};
use crate::session::{SessionStore, UserLocks};
use crate::stats::UsageCounters;

/// Characters of inbound text shown in log lines.
const LOG_PREVIEW_CHARS: usize = 50;

/// Routes transport-agnostic events. Shared across dispatcher tasks behind an `Arc`.
pub struct Router {
    bot: Arc<dyn Bot>,
    sessions: SessionStore,
    counters: Arc<UsageCounters>,
    completion: CompletionService,
    locks: UserLocks,
    bot_username: RwLock<Option<String>>,
}

impl Router {
    pub fn new(
        bot: Arc<dyn Bot>,
        llm_client: Arc<dyn LlmClient>,
        sessions: SessionStore,
        counters: Arc<UsageCounters>,
    ) -> Self {
        let completion = CompletionService::new(llm_client, sessions.clone(), counters.clone());
        Self {
            bot,
            sessions,
            counters,
            completion,
            locks: UserLocks::new(),
            bot_username: RwLock::new(None),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn counters(&self) -> &UsageCounters {
        &self.counters
    }

    /// Username used to accept `/command@username`; commands addressed to other bots are ignored.
    pub async fn set_bot_username(&self, username: impl Into<String>) {
        *self.bot_username.write().await = Some(username.into());
    }

    /// Handles a slash-command or free-text message. Never fails.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle_message(&self, message: &Message) {
        let outcome = if message.is_command() {
            self.handle_command(message).await
        } else {
            self.handle_free_text(message).await
        };
        if let Err(e) = outcome {
            self.handle_fault(&message.chat, e).await;
        }
    }

    /// Handles an inline button press. Never fails.
    #[instrument(skip(self, press), fields(user_id = press.user.id, chat_id = press.chat.id))]
    pub async fn handle_button(&self, press: &ButtonPress) {
        let Some(button) = ButtonAction::decode(&press.data) else {
            warn!(data = %press.data, "Ignoring unknown button token");
            return;
        };
        info!(data = %press.data, "Button pressed");
        if let Err(e) = self.perform(button.into(), &press.user, &press.chat).await {
            self.handle_fault(&press.chat, e).await;
        }
    }

    async fn handle_command(&self, message: &Message) -> Result<()> {
        let username = self.bot_username.read().await.clone();
        match Command::parse_text(&message.content, username.as_deref()) {
            Some(command) => {
                info!(command = ?command, "Command received");
                self.perform(command.into(), &message.user, &message.chat)
                    .await
            }
            None => {
                debug!(text = %message.preview(LOG_PREVIEW_CHARS), "Ignoring unknown command");
                Ok(())
            }
        }
    }

    async fn handle_free_text(&self, message: &Message) -> Result<()> {
        if message.content.trim().is_empty() {
            return Err(HandlerError::NoText.into());
        }
        let user_id = message.user.id;
        let _guard = self.locks.lock(user_id).await;

        self.counters.record_message(user_id).await;
        info!(text = %message.preview(LOG_PREVIEW_CHARS), "Message received");

        if let Err(e) = self.bot.send_typing(&message.chat).await {
            warn!(error = %e, "Failed to send typing indicator");
        }

        let reply = match self.completion.complete(user_id, &message.content).await {
            Ok(text) => {
                info!(reply_len = text.len(), "Completion delivered");
                Reply::plain(text)
            }
            Err(e) => Reply::plain(replies::completion_failure(&e)),
        };
        self.bot.send_reply(&message.chat, &reply).await
    }

    /// Renders `action` for `user` and delivers it; shared by the command and button paths.
    async fn perform(&self, action: Action, user: &User, chat: &Chat) -> Result<()> {
        let reply = match action {
            Action::Welcome => replies::welcome(user.display_name()),
            Action::ChatPrompt => replies::chat_prompt(),
            Action::Help => replies::help(),
            Action::ModelMenu => {
                let session = self.sessions.get_or_create(user.id).await;
                replies::model_menu(session.model_tier)
            }
            Action::Stats => {
                let snapshot = self.counters.snapshot(self.sessions.len().await).await;
                replies::stats(&snapshot)
            }
            Action::Reset => {
                let _guard = self.locks.lock(user.id).await;
                let cleared = self.sessions.clear(user.id).await;
                info!(cleared_turns = cleared, "Conversation reset");
                replies::reset(cleared)
            }
            Action::SelectModel(tier) => {
                let _guard = self.locks.lock(user.id).await;
                self.sessions.set_model(user.id, tier).await;
                info!(model = tier.model_id(), "Model changed");
                replies::model_changed(tier)
            }
        };
        self.bot.send_reply(chat, &reply).await
    }

    async fn handle_fault(&self, chat: &Chat, e: RelayError) {
        error!(error = %e, "Handler failed");
        self.counters.record_error();
        if let Err(e) = self.bot.send_message(chat, replies::HANDLER_FAULT).await {
            error!(error = %e, "Failed to deliver error reply");
        }
    }
}
