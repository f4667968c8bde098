//! Dispatcher runner: converts teloxide updates to core types and passes them to the [`Router`].
//! Calls get_me to populate the bot username before dispatching.

use crate::router::{Command, Router};
use anyhow::Result;
use std::sync::Arc;
use teloxide::{
    dispatching::{Dispatcher, UpdateFilterExt},
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::*,
    types::Update,
    utils::command::BotCommands,
};
use tracing::{debug, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Starts long polling with the given teloxide Bot and router; returns on Ctrl-C.
#[instrument(skip(bot, router))]
pub async fn run_dispatcher(bot: teloxide::Bot, router: Arc<Router>) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                router.set_bot_username(username.clone()).await;
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; /command@botname will not be recognised"),
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    info!("Starting dispatcher with long polling");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .default_handler(|upd| async move {
            debug!(update = ?upd.kind, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn message_handler(msg: Message, router: Arc<Router>) -> ResponseResult<()> {
    match TelegramMessageWrapper(&msg).to_core() {
        Some(core_msg) => router.handle_message(&core_msg).await,
        None => debug!(chat_id = msg.chat.id.0, "Ignoring non-text message"),
    }
    Ok(())
}

async fn callback_handler(bot: Bot, query: CallbackQuery, router: Arc<Router>) -> ResponseResult<()> {
    // Stops the client's loading indicator regardless of how routing goes.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }
    match TelegramCallbackWrapper(&query).to_core() {
        Some(press) => router.handle_button(&press).await,
        None => debug!(user_id = query.from.id.0, "Ignoring callback query without data"),
    }
    Ok(())
}
