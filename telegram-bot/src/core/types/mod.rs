//! Core types: user, chat, inbound message and button press, outbound reply.
//!
//! Types are split into one file per main type for easier navigation.

mod button;
mod chat;
mod message;
mod reply;
mod user;

pub use button::ButtonPress;
pub use chat::Chat;
pub use message::Message;
pub use reply::{Menu, MenuButton, Reply, TextFormat};
pub use user::User;
