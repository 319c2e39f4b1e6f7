//! Client for the upstream report API.
//!
//! Thin forwarding layer: every call attaches the caller's
//! `Authorization` header verbatim, reads the upstream body as raw
//! text, and attempts JSON decoding. Status codes are surfaced as
//! `u16` so callers can relay them without caring which `http` crate
//! version reqwest was built against.

use std::time::Duration;

use reqwest::{header, Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Decoded upstream response: relayed status plus JSON body.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamResponse {
    /// Whether the upstream returned a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Service for upstream report API operations.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client against the given base URL (scheme + host +
    /// `/api` prefix, no trailing slash).
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("report-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client from the global configuration.
    pub fn from_config(config: &crate::config::UpstreamConfig) -> Self {
        Self::new(&config.base_url, config.timeout_seconds)
    }

    /// Fetch a single report by id.
    pub async fn fetch_report(&self, id: &str, auth: &str) -> Result<UpstreamResponse> {
        self.forward(Method::GET, &format!("/reports/{}", id), auth, None, || {
            Error::UpstreamUnreachable("An error occurred while fetching the report".to_string())
        })
        .await
    }

    /// Update a report. The gateway accepts PATCH but the upstream API
    /// expects a PUT; the body is forwarded verbatim.
    pub async fn update_report(&self, id: &str, auth: &str, body: Value) -> Result<UpstreamResponse> {
        self.forward(
            Method::PUT,
            &format!("/reports/{}", id),
            auth,
            Some(body),
            || Error::UpstreamUnreachable("An error occurred while updating the report".to_string()),
        )
        .await
    }

    /// Delete a report by id.
    pub async fn delete_report(&self, id: &str, auth: &str) -> Result<UpstreamResponse> {
        self.forward(Method::DELETE, &format!("/reports/{}", id), auth, None, || {
            Error::UpstreamUnreachable("An error occurred while deleting the report".to_string())
        })
        .await
    }

    /// List reports visible to the caller. The upstream scopes the
    /// list to the authenticated user based on the forwarded token.
    pub async fn list_reports(&self, auth: &str) -> Result<UpstreamResponse> {
        self.forward(Method::GET, "/reports", auth, None, || {
            Error::UpstreamUnreachable("An error occurred while fetching user reports".to_string())
        })
        .await
    }

    /// Forward a request and decode the response body as JSON.
    async fn forward(
        &self,
        method: Method,
        path: &str,
        auth: &str,
        body: Option<Value>,
        unreachable: impl Fn() -> Error,
    ) -> Result<UpstreamResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Forwarding request upstream");

        let mut request = self
            .client
            .request(method, &url)
            .header(header::AUTHORIZATION, auth)
            .header(header::ACCEPT, "application/json");

        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .json(&body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "Upstream request failed");
            unreachable()
        })?;

        let status = response.status().as_u16();

        // Read as text first so a non-JSON body maps to a clean error
        // instead of a transport error.
        let text = response.text().await.map_err(|e| {
            warn!(%url, error = %e, "Failed to read upstream body");
            unreachable()
        })?;

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            warn!(%url, error = %e, "Upstream body is not valid JSON");
            Error::UpstreamInvalidResponse
        })?;

        Ok(UpstreamResponse { status, body })
    }
}
