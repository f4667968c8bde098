//! # Telegram LLM relay bot
//!
//! Relays Telegram messages to an OpenAI-compatible chat completion API with per-user
//! conversation memory, per-user model tier selection and usage statistics.
//!
//! Core (Bot, Message, Reply) is transport-agnostic; telegram (dispatcher, adapters) converts
//! teloxide updates into core types and hands them to the [`Router`].

pub mod cli;
pub mod completion;
pub mod components;
pub mod config;
pub mod core;
pub mod router;
pub mod runner;
pub mod session;
pub mod stats;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, Bot, ButtonPress, Chat, HandlerError, Menu, MenuButton, Message, RelayError,
    Reply, Result, TextFormat, User,
};

pub use telegram::{
    run_dispatcher, TelegramBotAdapter, TelegramCallbackWrapper, TelegramMessageWrapper,
    TelegramUserWrapper,
};

pub use completion::CompletionService;
pub use components::{build_bot_components, BotComponents};
pub use config::{BaseConfig, BotConfig, LlmConfig};
pub use router::{Action, ButtonAction, Command, Router};
pub use runner::run_bot;
pub use session::{ModelTier, Session, SessionStore, UserLocks, MAX_TURNS};
pub use stats::{format_uptime, UsageCounters, UsageSnapshot};
