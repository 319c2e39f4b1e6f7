//! Portal session context.
//!
//! The credential is an opaque bearer token issued at login by the
//! external auth flow and stored in a cookie. The gateway never
//! validates it locally; portal pages only check that one is present,
//! and the upstream API is the authority whenever the token is used.
//!
//! The context is extracted per request and passed into the layout
//! explicitly, so page rendering never consults ambient global state.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::config;

/// One-shot notice cookie shown on the login page.
pub const NOTICE_COOKIE_NAME: &str = "portal_notice";

/// Per-request authentication context for portal pages.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Bearer credential from the session cookie, if any.
    pub token: Option<String>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&config::config().web.session_cookie)
            .map(|c| c.value().to_string());
        Ok(SessionContext { token })
    }
}

/// Remove the session cookie (logout).
pub fn clear_session(jar: CookieJar) -> CookieJar {
    let cookie = Cookie::build((config::config().web.session_cookie.clone(), ""))
        .path("/")
        .build();
    jar.remove(cookie)
}

/// User-facing notices carried across the login redirect.
///
/// Only a short code travels in the cookie; the message text lives
/// here so the cookie value never needs encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SignInRequired,
    SignedOut,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::SignInRequired => "You must be signed in to access this page",
            Self::SignedOut => "Signed out successfully",
        }
    }

    /// Notice severity, used as a CSS class on the login banner.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SignInRequired => "error",
            Self::SignedOut => "success",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::SignInRequired => "sign-in-required",
            Self::SignedOut => "signed-out",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "sign-in-required" => Some(Self::SignInRequired),
            "signed-out" => Some(Self::SignedOut),
            _ => None,
        }
    }
}

/// Queue a notice for the next login page render.
pub fn set_notice(jar: CookieJar, notice: Notice) -> CookieJar {
    let cookie = Cookie::build((NOTICE_COOKIE_NAME, notice.code()))
        .path("/")
        .build();
    jar.add(cookie)
}

/// Consume the pending notice, clearing its cookie.
pub fn take_notice(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let notice = jar.get(NOTICE_COOKIE_NAME).and_then(|c| Notice::from_code(c.value()));
    if notice.is_some() {
        let cookie = Cookie::build((NOTICE_COOKIE_NAME, "")).path("/").build();
        return (jar.remove(cookie), notice);
    }
    (jar, notice)
}
