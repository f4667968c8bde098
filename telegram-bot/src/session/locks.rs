//! Per-user mutual exclusion for session read-modify-write across awaits.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Hands out one async mutex per user id. Handlers for different users never contend.
#[derive(Debug, Clone, Default)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other task holds this user's lock. Released when the guard drops.
    pub async fn lock(&self, user_id: i64) -> OwnedMutexGuard<()> {
        let user_lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(user_id).or_default().clone()
        };
        user_lock.lock_owned().await
    }
}
