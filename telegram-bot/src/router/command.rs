//! Slash-command parsing via teloxide's `BotCommands` derive.

use teloxide::utils::command::BotCommands;

/// Commands understood by the relay.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show the help menu")]
    Help,
    #[command(description = "Clear conversation history")]
    Reset,
    #[command(description = "Change AI model")]
    Model,
    #[command(description = "View bot statistics")]
    Stats,
}

impl Command {
    /// Parses the first word of `text` (`/start`, `/start@my_bot`); trailing arguments are ignored.
    /// Returns `None` for unknown commands, commands addressed to another bot, and non-commands.
    pub fn parse_text(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let head = text.split_whitespace().next()?;
        Self::parse(head, bot_username.unwrap_or("")).ok()
    }
}
