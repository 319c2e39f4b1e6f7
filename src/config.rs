//! Configuration management for the report gateway.
//!
//! Loads configuration from environment variables:
//! - Server bind address and port
//! - Upstream report API origin and client timeout
//! - Portal session cookie name

use std::env;
use std::sync::OnceLock;

use url::Url;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub web: WebConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Origin of the external report API, up to and including the `/api` prefix.
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Name of the cookie holding the bearer credential for portal pages.
    pub session_cookie: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env_or("UPSTREAM_BASE_URL", "http://localhost:8080/api");
        Url::parse(&base_url).expect("Invalid UPSTREAM_BASE_URL");

        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port: env_or("PORT", "8765").parse().expect("Invalid PORT"),
            },
            upstream: UpstreamConfig {
                // Trailing slashes would double up when paths are appended.
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout_seconds: env_or("UPSTREAM_TIMEOUT_SECONDS", "30")
                    .parse()
                    .unwrap_or(30),
            },
            web: WebConfig {
                session_cookie: env_or("SESSION_COOKIE", "portal_token"),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
