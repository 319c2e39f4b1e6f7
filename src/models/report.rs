//! Report resource and pagination envelope.
//!
//! Reports are owned by the upstream API; the gateway treats their
//! attributes as opaque JSON and only inspects `status` and
//! `problem_type` for equality filtering.
//!
//! The upstream list endpoint has been observed returning several
//! payload shapes. `ListPayload` models them as an explicit union and
//! `normalize` picks the first matching shape, so each variant can be
//! exercised independently instead of sniffing fields ad hoc.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single incident report, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(pub Value);

impl Report {
    /// The report's `status` attribute, when present and a string.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// The report's `problem_type` attribute, when present and a string.
    pub fn problem_type(&self) -> Option<&str> {
        self.0.get("problem_type").and_then(Value::as_str)
    }
}

/// One entry of the envelope's `links` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// Known upstream list payload shapes, tried in declaration order.
///
/// Order matters: a paginated object also contains arrays, and a
/// `{report}` wrapper must not shadow a `{reports}` list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload {
    /// Bare array of reports.
    Bare(Vec<Report>),
    /// Paginator object: `{data: [...], current_page, ...}`.
    Paginated(PaginatedPayload),
    /// Plain wrapper: `{reports: [...]}`.
    Wrapped { reports: Vec<Report> },
    /// Single-item wrapper: `{report: {...}}`.
    Single { report: Report },
}

/// The paginated upstream shape. Every metadata field is optional;
/// fallbacks are applied when the envelope is built.
#[derive(Debug, Deserialize)]
pub struct PaginatedPayload {
    pub data: Vec<Report>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// Pagination metadata captured from a paginated upstream response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    pub current_page: Option<u64>,
    pub last_page: Option<u64>,
    pub per_page: Option<u64>,
    pub total: Option<u64>,
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub first_page_url: Option<String>,
    pub last_page_url: Option<String>,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
    pub path: Option<String>,
    pub links: Option<Vec<PageLink>>,
}

/// Result of normalizing an upstream list payload.
#[derive(Debug)]
pub struct NormalizedList {
    pub reports: Vec<Report>,
    /// Present only when the upstream response carried its own paginator.
    pub pagination: Option<PageMeta>,
}

/// Normalize an upstream list body into a flat report list.
///
/// First matching shape wins; unrecognized payloads yield an empty list
/// rather than an error, matching the lenient contract of the endpoint.
pub fn normalize(body: Value) -> NormalizedList {
    match serde_json::from_value::<ListPayload>(body) {
        Ok(ListPayload::Bare(reports)) => NormalizedList {
            reports,
            pagination: None,
        },
        Ok(ListPayload::Paginated(p)) => NormalizedList {
            reports: p.data,
            pagination: Some(p.meta),
        },
        Ok(ListPayload::Wrapped { reports }) => NormalizedList {
            reports,
            pagination: None,
        },
        // A null `report` counts as no match, not a one-item list.
        Ok(ListPayload::Single { report }) if !report.0.is_null() => NormalizedList {
            reports: vec![report],
            pagination: None,
        },
        Ok(ListPayload::Single { .. }) => NormalizedList {
            reports: Vec::new(),
            pagination: None,
        },
        Err(_) => NormalizedList {
            reports: Vec::new(),
            pagination: None,
        },
    }
}

/// Paginated response wrapper returned by the collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope {
    pub current_page: u64,
    pub data: Vec<Report>,
    pub first_page_url: String,
    pub from: u64,
    pub last_page: u64,
    pub last_page_url: String,
    pub links: Vec<PageLink>,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u64,
    pub prev_page_url: Option<String>,
    pub to: u64,
    pub total: u64,
}

impl PageEnvelope {
    /// Merge captured upstream pagination metadata with a (possibly
    /// filtered) report list. Missing metadata fields fall back to the
    /// upstream paginator's defaults.
    pub fn from_meta(meta: PageMeta, data: Vec<Report>) -> Self {
        let len = data.len() as u64;
        Self {
            current_page: meta.current_page.unwrap_or(1),
            first_page_url: meta.first_page_url.unwrap_or_default(),
            from: meta.from.unwrap_or(1),
            last_page: meta.last_page.unwrap_or(1),
            last_page_url: meta.last_page_url.unwrap_or_default(),
            links: meta.links.unwrap_or_default(),
            next_page_url: meta.next_page_url,
            path: meta.path.unwrap_or_default(),
            per_page: meta.per_page.unwrap_or(10),
            prev_page_url: meta.prev_page_url,
            to: meta.to.unwrap_or(len),
            total: meta.total.unwrap_or(len),
            data,
        }
    }

    /// Synthesize a single-page envelope for upstream responses that
    /// carried no paginator of their own.
    pub fn single_page(data: Vec<Report>) -> Self {
        let len = data.len() as u64;
        Self {
            current_page: 1,
            first_page_url: String::new(),
            from: 1,
            last_page: 1,
            last_page_url: String::new(),
            links: vec![
                PageLink {
                    url: None,
                    label: "&laquo; Previous".to_string(),
                    active: false,
                },
                PageLink {
                    url: Some(String::new()),
                    label: "1".to_string(),
                    active: true,
                },
                PageLink {
                    url: None,
                    label: "Next &raquo;".to_string(),
                    active: false,
                },
            ],
            next_page_url: None,
            path: String::new(),
            per_page: len,
            prev_page_url: None,
            to: len,
            total: len,
            data,
        }
    }
}

/// Keep only reports whose `status` equals the filter exactly.
/// An empty filter string is a no-op.
pub fn filter_by_status(reports: &mut Vec<Report>, status: &str) {
    if !status.is_empty() {
        reports.retain(|r| r.status() == Some(status));
    }
}

/// Keep only reports whose `problem_type` equals the filter exactly.
/// An empty filter string is a no-op.
pub fn filter_by_problem_type(reports: &mut Vec<Report>, problem_type: &str) {
    if !problem_type.is_empty() {
        reports.retain(|r| r.problem_type() == Some(problem_type));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_normalize_bare_array() {
        let out = normalize(json!([{"id": 1}, {"id": 2}]));
        assert_eq!(out.reports.len(), 2);
        assert!(out.pagination.is_none());
    }

    #[test]
    fn test_normalize_paginated() {
        let out = normalize(json!({
            "data": [{"id": 1}],
            "current_page": 2,
            "last_page": 5,
            "per_page": 15,
            "total": 61,
            "from": 16,
            "to": 16,
            "path": "https://upstream/api/reports",
            "links": [{"url": null, "label": "&laquo; Previous", "active": false}]
        }));
        assert_eq!(out.reports.len(), 1);
        let meta = out.pagination.expect("paginator captured");
        assert_eq!(meta.current_page, Some(2));
        assert_eq!(meta.last_page, Some(5));
        assert_eq!(meta.per_page, Some(15));
        assert_eq!(meta.total, Some(61));
        assert_eq!(meta.links.unwrap().len(), 1);
    }

    #[test]
    fn test_normalize_wrapped_list() {
        let out = normalize(json!({"reports": [{"id": 7}]}));
        assert_eq!(out.reports.len(), 1);
        assert!(out.pagination.is_none());
    }

    #[test]
    fn test_normalize_single_wrap() {
        let out = normalize(json!({"report": {"id": 9, "status": "open"}}));
        assert_eq!(out.reports.len(), 1);
        assert_eq!(out.reports[0].status(), Some("open"));
    }

    #[test]
    fn test_normalize_paginated_wins_over_single() {
        // A paginator that also happens to carry a `report` field must
        // still be treated as a paginator.
        let out = normalize(json!({
            "data": [{"id": 1}, {"id": 2}],
            "report": {"id": 3}
        }));
        assert_eq!(out.reports.len(), 2);
        assert!(out.pagination.is_some());
    }

    #[test]
    fn test_normalize_null_report_is_empty() {
        let out = normalize(json!({"report": null}));
        assert!(out.reports.is_empty());
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"message": "ok"}))]
    #[case(json!("reports"))]
    #[case(json!(42))]
    #[case(json!(null))]
    fn test_normalize_unrecognized_is_empty(#[case] body: serde_json::Value) {
        let out = normalize(body);
        assert!(out.reports.is_empty());
        assert!(out.pagination.is_none());
    }

    #[test]
    fn test_filter_status_exact_case_sensitive() {
        let mut reports = vec![
            Report(json!({"id": 1, "status": "open"})),
            Report(json!({"id": 2, "status": "Open"})),
            Report(json!({"id": 3, "status": "closed"})),
            Report(json!({"id": 4})),
        ];
        filter_by_status(&mut reports, "open");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0["id"], 1);
    }

    #[test]
    fn test_empty_filter_is_noop() {
        let mut reports = vec![
            Report(json!({"id": 1, "status": "open"})),
            Report(json!({"id": 2, "status": "closed"})),
        ];
        filter_by_status(&mut reports, "");
        filter_by_problem_type(&mut reports, "");
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn test_filter_problem_type() {
        let mut reports = vec![
            Report(json!({"id": 1, "problem_type": "electrical"})),
            Report(json!({"id": 2, "problem_type": "plumbing"})),
        ];
        filter_by_problem_type(&mut reports, "plumbing");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0["id"], 2);
    }

    #[test]
    fn test_single_page_envelope_defaults() {
        let env = PageEnvelope::single_page(vec![
            Report(json!({"id": 1})),
            Report(json!({"id": 2})),
        ]);
        assert_eq!(env.current_page, 1);
        assert_eq!(env.per_page, 2);
        assert_eq!(env.total, 2);
        assert_eq!(env.to, 2);
        assert_eq!(env.links.len(), 3);
        assert!(env.links[1].active);
    }

    #[test]
    fn test_from_meta_falls_back_per_page_ten() {
        let env = PageEnvelope::from_meta(PageMeta::default(), vec![Report(json!({"id": 1}))]);
        assert_eq!(env.per_page, 10);
        assert_eq!(env.current_page, 1);
        assert_eq!(env.total, 1);
        assert!(env.links.is_empty());
    }
}
