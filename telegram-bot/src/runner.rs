//! Entry point for the long-running bot: build components, then dispatch until Ctrl-C.

use anyhow::Result;
use tracing::{info, instrument};

use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::telegram::run_dispatcher;

/// Builds components from a loaded config and runs the dispatcher. Tracing must already be initialized.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    info!(
        telegram_api_url = config.telegram_api_url().unwrap_or("default"),
        "Initializing bot"
    );

    let components = build_bot_components(&config, None)?;

    info!("Bot started successfully");

    run_dispatcher(components.teloxide_bot, components.router).await
}
