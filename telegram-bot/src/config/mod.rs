//! Bot configuration: BaseConfig (Telegram + log) + LlmConfig (completion API). Loaded from env.

mod base;
mod bot_config;
mod llm;


pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use llm::{LlmConfig, DEFAULT_COMPLETION_API_URL};

use crate::core::{RelayError, Result};
use std::env;

/// First non-blank value among `names`; blank values count as unset.
fn env_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Uses `explicit` when it is non-blank, otherwise the first set variable of `names`.
/// Missing values are reported under the primary name.
fn required(explicit: Option<String>, names: &[&str]) -> Result<String> {
    explicit
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| env_var(names))
        .ok_or_else(|| RelayError::ConfigMissing(names[0].to_string()))
}

fn validate_url(name: &str, value: &str) -> Result<()> {
    reqwest::Url::parse(value).map_err(|_| {
        RelayError::ConfigInvalid(format!("{} is set but not a valid URL: {}", name, value))
    })?;
    Ok(())
}
