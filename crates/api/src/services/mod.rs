//! HTTP-layer services: session handling and login throttling.

pub mod cookies;
pub mod rate_limit;
pub mod session;

pub use cookies::CookieHelper;
pub use rate_limit::LoginRateLimiter;
pub use session::{AuthError, SessionGuard};
