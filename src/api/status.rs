//! Health and status endpoints.

use std::time::Instant;

use axum::routing::get;
use axum::{Json, Router};
use once_cell::sync::OnceCell;
use serde_json::{json, Value};

use crate::AppState;

static STARTUP_TIME: OnceCell<Instant> = OnceCell::new();

/// Record the process start time for uptime reporting.
/// Call once at startup.
pub fn init_startup_time() {
    STARTUP_TIME.get_or_init(Instant::now);
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Liveness check with version and uptime.
async fn health() -> Json<Value> {
    let uptime_seconds = STARTUP_TIME
        .get()
        .map(|t| t.elapsed().as_secs())
        .unwrap_or(0);

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": uptime_seconds,
    }))
}
