//! Completion API config: key and endpoint.

use super::{env_var, required, validate_url};
use crate::core::Result;

pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.sambanova.ai/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// SAMBANOVA_API_KEY or LLM_API_KEY
    pub api_key: String,
    /// COMPLETION_API_URL; full chat-completions endpoint
    pub api_url: String,
}

impl LlmConfig {
    /// `api_key` overrides SAMBANOVA_API_KEY if provided.
    pub fn load(api_key: Option<String>) -> Result<Self> {
        let api_key = required(api_key, &["SAMBANOVA_API_KEY", "LLM_API_KEY"])?;
        let api_url = env_var(&["COMPLETION_API_URL"])
            .unwrap_or_else(|| DEFAULT_COMPLETION_API_URL.to_string());
        Ok(Self { api_key, api_url })
    }

    pub fn validate(&self) -> Result<()> {
        validate_url("COMPLETION_API_URL", &self.api_url)
    }
}
