//! Base config: Telegram Bot connection and logging. Loaded from env.

use super::{env_var, required, validate_url};
use crate::core::Result;

pub const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_BOT_TOKEN or BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = required(token, &["TELEGRAM_BOT_TOKEN", "BOT_TOKEN"])?;
        let telegram_api_url = env_var(&["TELEGRAM_API_URL", "TELOXIDE_API_URL"]);
        let log_file = Self::log_file_from_env();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// LOG_FILE or the default path. Available before the rest of the config is loaded so
    /// that configuration failures can be logged.
    pub fn log_file_from_env() -> String {
        env_var(&["LOG_FILE"]).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
    }

    /// Validate config (e.g. telegram_api_url must be valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.telegram_api_url {
            validate_url("TELEGRAM_API_URL (or TELOXIDE_API_URL)", url)?;
        }
        Ok(())
    }
}
