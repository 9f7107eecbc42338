//! Login attempt rate limiting.
//!
//! Fixed-window counting per client address: each window allows a number of
//! failed attempts; a successful login clears the counter immediately. The
//! window does not slide, so a lockout always ends when the window that
//! opened it expires.

use std::{
    collections::HashMap,
    sync::RwLock,
    time::{Duration, Instant},
};

/// One client's attempt window.
#[derive(Debug, Clone, Copy)]
pub struct AttemptWindow {
    pub count: u32,
    pub reset_at: Instant,
}

/// Storage for attempt windows, keyed by client address.
pub trait AttemptStore: Send + Sync {
    fn fetch(&self, key: &str) -> Option<AttemptWindow>;
    fn put(&self, key: &str, window: AttemptWindow);
    fn clear(&self, key: &str);
}

/// Process-local attempt store. Counters do not survive a restart, which
/// matches the lockout being a nuisance barrier rather than a hard ban.
#[derive(Default)]
pub struct InMemoryAttemptStore {
    windows: RwLock<HashMap<String, AttemptWindow>>,
}

impl AttemptStore for InMemoryAttemptStore {
    fn fetch(&self, key: &str) -> Option<AttemptWindow> {
        self.windows.read().unwrap().get(key).copied()
    }

    fn put(&self, key: &str, window: AttemptWindow) {
        self.windows.write().unwrap().insert(key.to_string(), window);
    }

    fn clear(&self, key: &str) {
        self.windows.write().unwrap().remove(key);
    }
}

pub struct LoginRateLimiter {
    store: Box<dyn AttemptStore>,
    window: Duration,
    max_attempts: u32,
}

impl LoginRateLimiter {
    pub fn new(window_secs: u64, max_attempts: u32) -> Self {
        Self::with_store(
            Box::new(InMemoryAttemptStore::default()),
            window_secs,
            max_attempts,
        )
    }

    pub fn with_store(store: Box<dyn AttemptStore>, window_secs: u64, max_attempts: u32) -> Self {
        Self {
            store,
            window: Duration::from_secs(window_secs),
            max_attempts,
        }
    }

    /// Check whether the client may attempt a login right now.
    /// Returns Ok(()) if allowed, or Err with retry_after seconds if locked out.
    pub fn check(&self, key: &str) -> Result<(), u64> {
        let Some(window) = self.store.fetch(key) else {
            return Ok(());
        };

        let now = Instant::now();
        if now >= window.reset_at {
            // Expired window, the next failure starts a fresh one.
            return Ok(());
        }

        if window.count >= self.max_attempts {
            // Retry after in seconds, minimum 1 second
            let wait = window.reset_at.saturating_duration_since(now);
            return Err(wait.as_secs().max(1));
        }

        Ok(())
    }

    /// Count a failed attempt against the client's current window.
    pub fn record_failure(&self, key: &str) {
        let now = Instant::now();
        let window = match self.store.fetch(key) {
            Some(window) if now < window.reset_at => AttemptWindow {
                count: window.count.saturating_add(1),
                reset_at: window.reset_at,
            },
            _ => AttemptWindow {
                count: 1,
                reset_at: now + self.window,
            },
        };
        self.store.put(key, window);
    }

    /// Forget the client's window after a successful login.
    pub fn reset(&self, key: &str) {
        self.store.clear(key);
    }
}

impl std::fmt::Debug for LoginRateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRateLimiter")
            .field("window", &self.window)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}
