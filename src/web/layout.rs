//! Portal layout shell.
//!
//! Server-rendered navigation wrapper shared by all student pages:
//! a sticky navbar with the three portal sections, a collapsible menu
//! for narrow screens (a `<details>` element carries the open/closed
//! state), a logout control, and a footer. The shell renders only for
//! an authenticated session; the guard decision is a pure function of
//! the session context.

use super::session::SessionContext;

/// A navigation entry in the portal shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Portal sections, in display order.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        href: "/student/emergency",
        label: "Emergency Button",
    },
    NavLink {
        href: "/student/report",
        label: "Photo Report",
    },
    NavLink {
        href: "/student/history",
        label: "Report History",
    },
];

/// Outcome of the layout authentication check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session present: render the shell and page content.
    Render,
    /// No session: notify and send the browser to the login page.
    RedirectToLogin,
}

/// Decide whether a portal page may render for this session.
pub fn guard(ctx: &SessionContext) -> GuardOutcome {
    if ctx.is_authenticated() {
        GuardOutcome::Render
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Render a full portal page: shell around the given content.
pub fn page(title: &str, active_path: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Campus Safety Portal</title>
</head>
<body>
{nav}
<main>
{content}
</main>
<footer>
<p>Campus Safety Portal</p>
</footer>
</body>
</html>"#,
        title = title,
        nav = nav(active_path),
        content = content,
    )
}

/// Render the login page, outside the authenticated shell.
pub fn login_page(notice: Option<(&str, &str)>) -> String {
    let banner = match notice {
        Some((kind, message)) => format!(r#"<p class="notice {kind}">{message}</p>"#),
        None => String::new(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Sign In - Campus Safety Portal</title>
</head>
<body>
<main>
<h1>Campus Safety Portal</h1>
{banner}
<p>Sign in to submit and track incident reports.</p>
</main>
</body>
</html>"#,
    )
}

/// Render the navbar: brand, desktop links, mobile `<details>` menu,
/// and the logout form.
fn nav(active_path: &str) -> String {
    let desktop: String = NAV_LINKS.iter().map(|l| nav_anchor(l, active_path)).collect();
    let mobile: String = NAV_LINKS.iter().map(|l| nav_anchor(l, active_path)).collect();

    format!(
        r#"<nav class="navbar">
<a class="brand" href="/student/emergency">Campus Safety Portal</a>
<div class="nav-desktop">
{desktop}</div>
<form class="logout" method="post" action="/logout">
<button type="submit">Log Out</button>
</form>
<details class="nav-mobile">
<summary>Menu</summary>
{mobile}</details>
</nav>"#,
    )
}

fn nav_anchor(link: &NavLink, active_path: &str) -> String {
    let class = if link.href == active_path {
        "nav-link active"
    } else {
        "nav-link"
    };
    format!(
        "<a class=\"{}\" href=\"{}\">{}</a>\n",
        class, link.href, link.label
    )
}
