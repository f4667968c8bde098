//! Process-wide usage counters rendered by the stats action.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// Counters updated as a side effect of message handling. Share via `Arc`.
#[derive(Debug)]
pub struct UsageCounters {
    started_at: DateTime<Utc>,
    started: Instant,
    total_messages: AtomicU64,
    total_errors: AtomicU64,
    users: RwLock<HashSet<i64>>,
}

/// Read-only view for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSnapshot {
    pub started_at: DateTime<Utc>,
    pub uptime: Duration,
    pub distinct_users: usize,
    pub total_messages: u64,
    pub active_sessions: usize,
    pub errors: u64,
}

impl UsageCounters {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            started: Instant::now(),
            total_messages: AtomicU64::new(0),
            total_errors: AtomicU64::new(0),
            users: RwLock::new(HashSet::new()),
        }
    }

    /// Records one handled free-text message from `user_id`.
    pub async fn record_message(&self, user_id: i64) {
        self.users.write().await.insert(user_id);
        self.total_messages.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one failed completion or handler fault.
    pub fn record_error(&self) {
        self.total_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_messages(&self) -> u64 {
        self.total_messages.load(Ordering::Relaxed)
    }

    pub fn total_errors(&self) -> u64 {
        self.total_errors.load(Ordering::Relaxed)
    }

    pub async fn distinct_users(&self) -> usize {
        self.users.read().await.len()
    }

    /// `active_sessions` comes from the session store, which these counters do not own.
    pub async fn snapshot(&self, active_sessions: usize) -> UsageSnapshot {
        UsageSnapshot {
            started_at: self.started_at,
            uptime: self.started.elapsed(),
            distinct_users: self.distinct_users().await,
            total_messages: self.total_messages(),
            active_sessions,
            errors: self.total_errors(),
        }
    }
}

impl Default for UsageCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a duration as `H:MM:SS`; hours are not wrapped into days.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
