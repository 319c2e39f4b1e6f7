//! Data model types for the report gateway.

mod report;

pub use report::{
    filter_by_problem_type, filter_by_status, normalize, ListPayload, NormalizedList,
    PageEnvelope, PageLink, PageMeta, PaginatedPayload, Report,
};
