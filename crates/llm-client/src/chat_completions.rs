//! reqwest-based [`LlmClient`] for OpenAI-compatible chat completion endpoints.

use std::time::Duration;

use async_trait::async_trait;
use prompt::ChatMessage;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use super::{mask_token, CompletionError, LlmClient};

/// Hard limit for one completion request, connect to last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Chat completions client. Holds the endpoint URL, bearer key and fixed sampling parameters.
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    endpoint: String,
    api_key: String,
    system_prompt: Option<String>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl ChatCompletionsClient {
    /// Builds a client for `endpoint` (full URL, e.g. `https://api.sambanova.ai/v1/chat/completions`)
    /// with the default 30 second timeout.
    pub fn new(api_key: String, endpoint: String) -> Result<Self, CompletionError> {
        Self::with_timeout(api_key, endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: String,
        endpoint: String,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            system_prompt: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// System instruction prepended to every request; never stored in caller history.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_messages(&self, history: Vec<ChatMessage>) -> Vec<ChatMessage> {
        match self.system_prompt.as_deref() {
            Some(system) => prompt::with_system(system, &history),
            None => history,
        }
    }
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    #[instrument(skip(self, messages), fields(message_count = messages.len()))]
    async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<String, CompletionError> {
        let messages = self.request_messages(messages);
        let body = ChatCompletionRequest {
            model,
            messages: &messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        info!(
            model = %model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key),
            "chat_completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %error_text, "chat_completion API error");
            return Err(CompletionError::Api {
                status: status.as_u16(),
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::unexpected("response contained no choices"))?;

        info!(reply_len = reply.len(), "chat_completion done");
        Ok(reply)
    }
}
