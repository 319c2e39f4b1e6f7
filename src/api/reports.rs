//! Report proxy endpoints.
//!
//! These handlers do not own any report data: they validate the
//! incoming request, forward it to the upstream report API with the
//! caller's credential attached, and relay the upstream status and
//! decoded JSON body. The collection endpoint additionally reshapes
//! the upstream payload into a pagination envelope and applies
//! equality filters.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::middleware::AuthHeader;
use crate::models::{self, PageEnvelope};
use crate::services::UpstreamResponse;
use crate::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters accepted by the report listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListReportsQuery {
    /// Accepted for interface compatibility but not forwarded upstream;
    /// the upstream endpoint returns the caller's reports unpaged.
    pub page: Option<String>,
    pub status: Option<String>,
    pub problem_type: Option<String>,
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports/:id",
            axum::routing::get(get_report)
                .patch(update_report)
                .delete(delete_report),
        )
        .route("/user/reports", axum::routing::get(list_user_reports))
}

// ============================================================================
// Handlers
// ============================================================================

/// Fetch a single report and relay the upstream response.
async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AuthHeader(auth): AuthHeader,
) -> Result<(StatusCode, Json<Value>)> {
    debug!(%id, "Fetching report");

    let response = state.upstream.fetch_report(&id, &auth).await?;
    Ok(relay(response))
}

/// Update a report's status. The upstream API models the update as a
/// full PUT, so the PATCH body is forwarded verbatim under that verb.
async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AuthHeader(auth): AuthHeader,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>)> {
    let Some(Json(body)) = body else {
        // Unreadable body: same generic failure the network path produces.
        return Err(Error::UpstreamUnreachable(
            "An error occurred while updating the report".to_string(),
        ));
    };

    if !has_usable_status(&body) {
        return Err(Error::MissingField("Status is required".to_string()));
    }

    debug!(%id, ?body, "Updating report");

    let response = state.upstream.update_report(&id, &auth, body).await?;
    Ok(relay(response))
}

/// Delete a report and relay the upstream response.
async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AuthHeader(auth): AuthHeader,
) -> Result<(StatusCode, Json<Value>)> {
    debug!(%id, "Deleting report");

    let response = state.upstream.delete_report(&id, &auth).await?;
    Ok(relay(response))
}

/// List the caller's reports as a pagination envelope.
///
/// Upstream failures (non-2xx) are relayed unchanged. Successful
/// payloads are normalized across the known upstream shapes, filtered
/// by `status` / `problem_type`, and wrapped: either in the upstream's
/// own paginator or in a synthesized single-page envelope.
async fn list_user_reports(
    State(state): State<AppState>,
    AuthHeader(auth): AuthHeader,
    Query(query): Query<ListReportsQuery>,
) -> Result<(StatusCode, Json<Value>)> {
    let page = query.page.as_deref().unwrap_or("1");
    let status = query.status.as_deref().unwrap_or("");
    let problem_type = query.problem_type.as_deref().unwrap_or("");

    debug!(page, status, problem_type, "Fetching user reports");

    let response = state.upstream.list_reports(&auth).await?;

    if !response.is_success() {
        return Ok(relay(response));
    }

    let normalized = models::normalize(response.body);
    let mut reports = normalized.reports;

    models::filter_by_status(&mut reports, status);
    models::filter_by_problem_type(&mut reports, problem_type);

    let envelope = match normalized.pagination {
        Some(meta) => PageEnvelope::from_meta(meta, reports),
        None => PageEnvelope::single_page(reports),
    };

    Ok((StatusCode::OK, Json(serde_json::to_value(envelope)?)))
}

// ============================================================================
// Helpers
// ============================================================================

/// Relay an upstream response as this service's own.
fn relay(response: UpstreamResponse) -> (StatusCode, Json<Value>) {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body))
}

/// A `status` field counts only when present, non-null, and non-empty.
fn has_usable_status(body: &Value) -> bool {
    match body.get("status") {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
