//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use llm_client::{mask_token, ChatCompletionsClient, LlmClient};
use prompt::MULTILINGUAL_SYSTEM_PROMPT;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::router::Router;
use crate::session::SessionStore;
use crate::stats::UsageCounters;
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub router: Arc<Router>,
}

/// Creates the teloxide Bot, pointing at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token());
    if let Some(url_str) = config.telegram_api_url() {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}

/// Creates the chat-completions client with the multilingual system prompt.
pub fn build_llm_client(config: &BotConfig) -> Result<Arc<dyn LlmClient>> {
    info!(
        endpoint = %config.llm_api_url(),
        api_key = %mask_token(config.llm_api_key()),
        "Using chat completions endpoint"
    );
    let client = ChatCompletionsClient::new(
        config.llm_api_key().to_string(),
        config.llm_api_url().to_string(),
    )?
    .with_system_prompt(MULTILINGUAL_SYSTEM_PROMPT);
    Ok(Arc::new(client))
}

/// Builds BotComponents. When `bot_override` is `Some`, the router delivers through it instead
/// of the Telegram adapter (tests inject a recording bot).
#[instrument(skip(config, bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    bot_override: Option<Arc<dyn CoreBot>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config);
    let llm_client = build_llm_client(config)?;
    let bot: Arc<dyn CoreBot> = bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())));

    let router = Arc::new(Router::new(
        bot,
        llm_client,
        SessionStore::new(),
        Arc::new(UsageCounters::new()),
    ));

    Ok(BotComponents {
        teloxide_bot,
        router,
    })
}
