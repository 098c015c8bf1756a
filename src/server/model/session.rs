//! Session cookie model.
//!
//! The identity provider issues the session secret at login and the browser stores it in one of
//! two cookies: the primary cookie and a legacy fallback used by clients without `SameSite=None`
//! support. The gateway never inspects the secret; it only finds it and, at logout, expires both
//! cookies.

use axum::http::{header::COOKIE, HeaderMap};
use time::{Duration, OffsetDateTime};
use tower_sessions::cookie::{Cookie, SameSite};

/// Suffix appended to the primary cookie name to form the legacy cookie name.
pub const LEGACY_COOKIE_SUFFIX: &str = "_legacy";

/// Names of the session cookies and the attributes used when clearing them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCookies {
    pub primary: String,
    pub legacy: String,
    pub secure: bool,
}

impl SessionCookies {
    /// Derives both cookie names from the primary name.
    ///
    /// Cookies are marked `Secure` outside of debug builds.
    pub fn new(primary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            legacy: format!("{}{}", primary, LEGACY_COOKIE_SUFFIX),
            secure: !cfg!(debug_assertions),
        }
    }

    /// Finds the session secret in the request's `Cookie` headers.
    ///
    /// The primary cookie wins over the legacy cookie; empty values are ignored.
    pub fn token(&self, headers: &HeaderMap) -> Option<String> {
        let mut legacy = None;

        let pairs = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| Cookie::parse(pair.trim()).ok());

        for cookie in pairs {
            if cookie.value().is_empty() {
                continue;
            }

            if cookie.name() == self.primary {
                return Some(cookie.value().to_string());
            }

            if cookie.name() == self.legacy && legacy.is_none() {
                legacy = Some(cookie.value().to_string());
            }
        }

        legacy
    }

    /// Builds `Set-Cookie` values expiring both session cookies.
    pub fn removal_cookies(&self) -> [Cookie<'static>; 2] {
        [
            self.removal_cookie(self.primary.clone()),
            self.removal_cookie(self.legacy.clone()),
        ]
    }

    fn removal_cookie(&self, name: String) -> Cookie<'static> {
        Cookie::build((name, ""))
            .path("/")
            .max_age(Duration::ZERO)
            .expires(OffsetDateTime::UNIX_EPOCH)
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build()
    }
}
