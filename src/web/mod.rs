//! Student portal pages.
//!
//! Server-rendered counterparts to the browser UI: three guarded
//! portal pages sharing the layout shell, a public login page, and a
//! logout action. Authentication is a cookie presence check; the
//! actual login flow that issues the credential is an external
//! collaborator.

pub mod layout;
pub mod session;

use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::CookieJar;

use crate::AppState;

use layout::GuardOutcome;
use session::{Notice, SessionContext};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/student/emergency", get(emergency_page))
        .route("/student/report", get(report_page))
        .route("/student/history", get(history_page))
        .route("/auth/login", get(login_page))
        .route("/logout", post(logout))
}

// ============================================================================
// Handlers
// ============================================================================

async fn emergency_page(ctx: SessionContext, jar: CookieJar) -> Response {
    portal_page(
        ctx,
        jar,
        "Emergency Button",
        "/student/emergency",
        "<h1>Emergency Button</h1>\n<p>Send an immediate alert to campus security.</p>",
    )
}

async fn report_page(ctx: SessionContext, jar: CookieJar) -> Response {
    portal_page(
        ctx,
        jar,
        "Photo Report",
        "/student/report",
        "<h1>Photo Report</h1>\n<p>Submit an incident report with a photo.</p>",
    )
}

async fn history_page(ctx: SessionContext, jar: CookieJar) -> Response {
    portal_page(
        ctx,
        jar,
        "Report History",
        "/student/history",
        "<h1>Report History</h1>\n<p>Your submitted reports and their current status.</p>",
    )
}

/// Public login page. Shows and clears any pending notice.
async fn login_page(jar: CookieJar) -> Response {
    let (jar, notice) = session::take_notice(jar);
    let banner = notice.map(|n| (n.kind(), n.message()));
    (jar, Html(layout::login_page(banner))).into_response()
}

/// Clear the stored credential and return to the login page.
async fn logout(jar: CookieJar) -> Response {
    let jar = session::clear_session(jar);
    let jar = session::set_notice(jar, Notice::SignedOut);
    (jar, Redirect::to("/auth/login")).into_response()
}

// ============================================================================
// Helpers
// ============================================================================

/// Render a guarded portal page, or redirect to login with an error
/// notice when no session is present.
fn portal_page(
    ctx: SessionContext,
    jar: CookieJar,
    title: &str,
    path: &str,
    content: &str,
) -> Response {
    match layout::guard(&ctx) {
        GuardOutcome::Render => Html(layout::page(title, path, content)).into_response(),
        GuardOutcome::RedirectToLogin => {
            let jar = session::set_notice(jar, Notice::SignInRequired);
            (jar, Redirect::to("/auth/login")).into_response()
        }
    }
}
