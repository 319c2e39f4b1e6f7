//! API routes for the report gateway.
//!
//! This module combines all API routes into a single router.
//!
//! Route structure:
//! - /api/reports/:id - single-report proxy (GET/PATCH/DELETE)
//! - /api/user/reports - user report listing with envelope + filters
//! - /health - health check (public)

mod reports;
pub mod status;

use axum::Router;

use crate::AppState;

/// Build the complete API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health and status endpoints (public)
        .merge(status::routes())
        // Report proxy endpoints (Authorization header required)
        .nest("/api", reports::routes())
}
