//! Services for the report gateway.

mod upstream;

pub use upstream::{UpstreamClient, UpstreamResponse};
