//! Admin session guard.
//!
//! A single shared password gates the whole admin surface. Login order
//! matters: a missing password configuration answers before the rate
//! limiter, and the rate limiter answers before the password comparison,
//! so a locked-out client learns nothing about password correctness.

use axum::http::HeaderMap;
use thiserror::Error;
use tracing::{info, warn};

use super::rate_limit::LoginRateLimiter;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid password")]
    InvalidCredentials,

    /// Carries the seconds until the client's window expires.
    #[error("Too many attempts. Try again in {0}s.")]
    RateLimited(u64),

    #[error("Admin password not configured")]
    SecretUnconfigured,
}

pub struct SessionGuard {
    secret: Option<String>,
    limiter: LoginRateLimiter,
}

impl SessionGuard {
    /// An empty secret is treated as unconfigured.
    pub fn new(secret: impl Into<String>, limiter: LoginRateLimiter) -> Self {
        let secret = secret.into();
        Self {
            secret: if secret.is_empty() { None } else { Some(secret) },
            limiter,
        }
    }

    pub fn login(&self, password: &str, client_addr: &str) -> Result<(), AuthError> {
        let Some(secret) = self.secret.as_deref() else {
            warn!("Login attempted but no admin password is configured");
            return Err(AuthError::SecretUnconfigured);
        };

        if let Err(retry_after) = self.limiter.check(client_addr) {
            warn!(client = %client_addr, retry_after, "Login rate limited");
            return Err(AuthError::RateLimited(retry_after));
        }

        if password == secret {
            self.limiter.reset(client_addr);
            info!(client = %client_addr, "Admin login succeeded");
            Ok(())
        } else {
            self.limiter.record_failure(client_addr);
            warn!(client = %client_addr, "Admin login failed");
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Client key for rate limiting: the first x-forwarded-for entry, or a
/// fixed fallback when the header is absent.
pub fn client_addr(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
