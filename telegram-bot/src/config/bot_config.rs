//! BotConfig: BaseConfig + LlmConfig. Use load() for env-based loading.

use super::{BaseConfig, LlmConfig};
use crate::core::Result;

/// Bot config: BaseConfig + completion API. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub llm: LlmConfig,
}

impl BotConfig {
    /// Load full config from environment variables. `token` and `api_key` override
    /// TELEGRAM_BOT_TOKEN and SAMBANOVA_API_KEY. Call validate() after load to check config before init.
    pub fn load(token: Option<String>, api_key: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let llm = LlmConfig::load(api_key)?;
        Ok(Self { base, llm })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.llm.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn llm_api_key(&self) -> &str {
        &self.llm.api_key
    }
    pub fn llm_api_url(&self) -> &str {
        &self.llm.api_url
    }
}
