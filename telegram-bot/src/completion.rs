//! Session-aware completion: records the user turn, calls the LLM with the trimmed history,
//! and records the reply on success.

use std::sync::Arc;

use llm_client::{CompletionError, LlmClient};
use tracing::{info, instrument, warn};

use crate::session::SessionStore;
use crate::stats::UsageCounters;

/// Completion client bound to the session store and usage counters.
///
/// Callers that can run concurrently for the same user must hold that user's
/// [`crate::session::UserLocks`] guard around [`CompletionService::complete`].
#[derive(Clone)]
pub struct CompletionService {
    llm_client: Arc<dyn LlmClient>,
    sessions: SessionStore,
    counters: Arc<UsageCounters>,
}

impl CompletionService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        sessions: SessionStore,
        counters: Arc<UsageCounters>,
    ) -> Self {
        Self {
            llm_client,
            sessions,
            counters,
        }
    }

    /// Returns the model reply for `user_text` in the context of the user's history.
    ///
    /// The user turn is appended (and history trimmed) before the request and stays in history
    /// when the request fails; only a successful reply appends an assistant turn.
    /// Every failure increments the error counter.
    #[instrument(skip(self, user_text))]
    pub async fn complete(&self, user_id: i64, user_text: &str) -> Result<String, CompletionError> {
        let session = self.sessions.push_user_turn(user_id, user_text).await;
        let model = session.model_tier.model_id();
        info!(
            user_id = user_id,
            model = %model,
            history_len = session.turns.len(),
            "Requesting completion"
        );

        match self.llm_client.chat_completion(model, session.turns).await {
            Ok(reply) => {
                self.sessions.push_assistant_turn(user_id, &reply).await;
                Ok(reply)
            }
            Err(e) => {
                self.counters.record_error();
                warn!(user_id = user_id, model = %model, error = %e, "Completion failed");
                Err(e)
            }
        }
    }
}
