//! Binary for the Telegram LLM relay bot.

use anyhow::Result;
use clap::Parser;
use telegram_relay_bot::{init_tracing, load_config, run_bot, BaseConfig, Cli, Commands};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&BaseConfig::log_file_from_env())?;

    match cli.command {
        Commands::Run { token, api_key } => {
            let config = match load_config(token, api_key) {
                Ok(config) => config,
                Err(e) => {
                    error!(error = %e, "Failed to load configuration");
                    std::process::exit(1);
                }
            };
            run_bot(config).await
        }
    }
}
