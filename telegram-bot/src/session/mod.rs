//! Per-user conversation sessions: bounded turn history plus selected model tier.
//!
//! Sessions live only in process memory and are created lazily on first reference.

mod locks;
mod store;
mod tier;

pub use locks::UserLocks;
pub use store::{Session, SessionStore, MAX_TURNS};
pub use tier::ModelTier;
