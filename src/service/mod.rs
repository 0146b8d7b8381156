pub mod http;
pub mod provider;
pub mod types;

pub use http::HttpSummaryService;
pub use provider::{ServiceError, SummaryService};
pub use types::{HealthStatus, SummarizeRequest, SummarizeResponse};
