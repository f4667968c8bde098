//! Reply rendering. Each function maps already-fetched state to a [`Reply`]; the router
//! calls them identically for command and button invocations.

use llm_client::CompletionError;
use teloxide::utils::html;

use crate::core::{Menu, MenuButton, Reply};
use crate::session::ModelTier;
use crate::stats::{format_uptime, UsageSnapshot};

use super::action::ButtonAction;

pub const AI_PROVIDER: &str = "SambaNova";

/// Sent when a handler fails for a reason other than a classified completion failure.
pub const HANDLER_FAULT: &str =
    "❌ Oops! Something went wrong. Please try again or use /help for assistance.";

pub fn welcome(display_name: &str) -> Reply {
    let text = format!(
        "👋 <b>Namaste {}!</b>

🤖 I'm an AI-powered bot using <b>{}</b> technology!

<b>What I can do:</b>
✅ Answer questions in English/Hindi/Hinglish
✅ Help with coding &amp; programming
✅ Creative writing &amp; content
✅ Explain complex topics
✅ Have natural conversations

<b>Quick Start:</b>
Just send me any message to start chatting!

<b>Commands:</b>
/help - Show all commands
/reset - Clear conversation
/model - Change AI model
/stats - View bot statistics

Powered by 🚀 {} AI",
        html::escape(display_name),
        AI_PROVIDER,
        AI_PROVIDER
    );
    Reply::html(text).with_menu(Menu::new(vec![
        vec![
            MenuButton::new("💬 Start Chat", ButtonAction::Chat.encode()),
            MenuButton::new("ℹ️ Help", ButtonAction::Help.encode()),
        ],
        vec![
            MenuButton::new("🤖 Change Model", ButtonAction::Models.encode()),
            MenuButton::new("📊 Stats", ButtonAction::Stats.encode()),
        ],
    ]))
}

pub fn chat_prompt() -> Reply {
    Reply::html("💬 <b>Let's chat!</b> Send me any message to start.")
}

pub fn help() -> Reply {
    Reply::html(
        "🆘 <b>Help Menu</b>

<b>Available Commands:</b>
/start - Start the bot
/help - Show this help menu
/reset - Clear conversation history
/model - Change AI model
/stats - View bot statistics

<b>How to Use:</b>
Simply send any message and I'll respond!

<b>Examples:</b>
• \"What is quantum computing?\"
• \"Write a Python function to sort a list\"
• \"Mujhe AI ke baare mein batao\"
• \"Tell me a joke\"
• \"Coding kaise seekhein?\"

<b>Supported Languages:</b>
🇬🇧 English
🇮🇳 Hindi (हिंदी)
🔄 Hinglish (Mix)

<b>Features:</b>
• Conversation memory (last 10 exchanges)
• Multiple AI models
• Fast responses
• 24/7 availability

Enjoy chatting! 🚀",
    )
}

fn tier_label(tier: ModelTier) -> &'static str {
    match tier {
        ModelTier::Fast => "⚡ Fast (8B)",
        ModelTier::Balanced => "⚖️ Balanced (70B) - Default",
        ModelTier::Powerful => "💪 Powerful (405B)",
    }
}

pub fn model_menu(current: ModelTier) -> Reply {
    let text = format!(
        "🤖 <b>AI Model Selection</b>

<b>Current Model:</b> <code>{}</code>

<b>Available Models:</b>

⚡ <b>Fast (8B)</b>
- Quick responses
- Good for simple tasks
- Lower resource usage

⚖️ <b>Balanced (70B)</b> ⭐ Default
- Best performance/speed ratio
- Handles complex queries
- Recommended for most users

💪 <b>Powerful (405B)</b>
- Highest quality responses
- Best for complex tasks
- Slower but very accurate

Choose your preferred model:",
        current.model_id()
    );
    let rows = ModelTier::ALL
        .into_iter()
        .map(|tier| {
            vec![MenuButton::new(
                tier_label(tier),
                ButtonAction::SelectModel(tier).encode(),
            )]
        })
        .collect();
    Reply::html(text).with_menu(Menu::new(rows))
}

pub fn model_changed(tier: ModelTier) -> Reply {
    Reply::html(format!(
        "✅ <b>Model changed to:</b> <code>{}</code>\n\nStart chatting with the new model!",
        tier.model_id()
    ))
}

pub fn stats(snapshot: &UsageSnapshot) -> Reply {
    Reply::html(format!(
        "📊 <b>Bot Statistics</b>

⏱️ <b>Uptime:</b> {}
👥 <b>Total Users:</b> {}
💬 <b>Messages Processed:</b> {}
🧠 <b>Active Conversations:</b> {}
❌ <b>Errors:</b> {}

🚀 <b>Bot Version:</b> {}
🤖 <b>AI Provider:</b> {}
⚡ <b>Status:</b> Operational
🕒 <b>Running since:</b> {}

Thank you for using the bot! 🙏",
        format_uptime(snapshot.uptime),
        snapshot.distinct_users,
        snapshot.total_messages,
        snapshot.active_sessions,
        snapshot.errors,
        env!("CARGO_PKG_VERSION"),
        AI_PROVIDER,
        snapshot.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
    ))
}

pub fn reset(cleared_turns: usize) -> Reply {
    if cleared_turns > 0 {
        Reply::html(format!(
            "✅ <b>Conversation Reset!</b>\n\nCleared {} messages. Starting fresh!",
            cleared_turns
        ))
    } else {
        Reply::plain("💭 No conversation history found. Start chatting!")
    }
}

/// User-visible text for a failed completion; timeout and API errors are distinguishable.
pub fn completion_failure(error: &CompletionError) -> String {
    match error {
        CompletionError::Api { status } => format!(
            "⚠️ Sorry, the AI service returned error {}. Please try again!",
            status
        ),
        CompletionError::Timeout => {
            "⏱️ Request timeout! The AI took too long to respond. Please try again.".to_string()
        }
        CompletionError::Unexpected { .. } => {
            "❌ Something went wrong while contacting the AI. Please try again or contact the admin."
                .to_string()
        }
    }
}
