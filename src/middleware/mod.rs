//! Middleware and extractors for the report gateway.
//!
//! The API routes authenticate by presence of an `Authorization`
//! header; the credential itself is opaque and validated by the
//! upstream API, so the gateway only checks that one was supplied and
//! forwards it verbatim.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::Error;

/// Raw `Authorization` header value, forwarded to the upstream API.
///
/// Rejects with 401 when the header is missing, empty, or not valid
/// UTF-8. No `Bearer` prefix is required; whatever the caller sends is
/// what the upstream sees.
#[derive(Debug, Clone)]
pub struct AuthHeader(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthHeader
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| AuthHeader(v.to_string()))
            .ok_or(Error::Unauthorized)
    }
}
