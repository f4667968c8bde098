//! CLI parser and config loading.

use clap::{Parser, Subcommand};

use crate::config::BotConfig;
use crate::core::Result;

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Telegram to LLM relay bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay bot (config from env; flags override TELEGRAM_BOT_TOKEN and SAMBANOVA_API_KEY).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short = 'k', long)]
        api_key: Option<String>,
    },
}

/// Load and validate BotConfig from environment, applying CLI overrides.
pub fn load_config(token: Option<String>, api_key: Option<String>) -> Result<BotConfig> {
    let config = BotConfig::load(token, api_key)?;
    config.validate()?;
    Ok(config)
}
