//! Core types and traits: Bot, Message, ButtonPress, Reply, error, logger.
//! Transport-agnostic; the Telegram layer converts into and out of these types.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, RelayError, Result};
pub use logger::init_tracing;
pub use types::{ButtonPress, Chat, Menu, MenuButton, Message, Reply, TextFormat, User};
