//! Cookie helper for the httpOnly admin session marker.
//!
//! The session is a single marker cookie whose presence (value "1") grants
//! admin access. The cookie carries no payload to sign or verify; everything
//! of interest lives server-side.

use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue};

/// Value the session cookie must hold to count as authenticated.
const SESSION_MARKER: &str = "1";

#[derive(Debug, Clone)]
pub struct CookieHelper {
    name: String,
    max_age_secs: i64,
    secure: bool,
}

impl CookieHelper {
    pub fn new(name: impl Into<String>, max_age_secs: i64, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age_secs,
            secure,
        }
    }

    /// Build the Set-Cookie header value that opens an admin session.
    pub fn build_session_cookie(&self) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}",
            self.name, SESSION_MARKER, self.max_age_secs
        );
        cookie.push_str("; HttpOnly");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str("; SameSite=Lax");
        cookie
    }

    /// Build the Set-Cookie header value that ends the session.
    pub fn build_clear_cookie(&self) -> String {
        let mut cookie = format!(
            "{}=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
            self.name
        );
        cookie.push_str("; HttpOnly");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str("; SameSite=Lax");
        cookie
    }

    /// Add the session cookie to a response HeaderMap.
    pub fn add_session_cookie(&self, headers: &mut HeaderMap) {
        if let Ok(value) = HeaderValue::from_str(&self.build_session_cookie()) {
            headers.append(SET_COOKIE, value);
        }
    }

    /// Add the clearing cookie to a response HeaderMap (for logout).
    pub fn add_clear_cookie(&self, headers: &mut HeaderMap) {
        if let Ok(value) = HeaderValue::from_str(&self.build_clear_cookie()) {
            headers.append(SET_COOKIE, value);
        }
    }

    /// Extract the session cookie value from request headers, if present.
    pub fn extract<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        headers
            .get(axum::http::header::COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|cookie_header| {
                cookie_header
                    .split(';')
                    .map(|s| s.trim())
                    .find_map(|cookie| {
                        let (cookie_name, cookie_value) = cookie.split_once('=')?;
                        if cookie_name == self.name {
                            Some(cookie_value)
                        } else {
                            None
                        }
                    })
            })
    }

    /// Whether the request carries a valid admin session marker.
    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        self.extract(headers) == Some(SESSION_MARKER)
    }
}
