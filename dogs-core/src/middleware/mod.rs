//! HTTP middleware for Dogs Core
//!
//! - Request ID propagation and HTTP metrics
//! - JSON normalization of framework-level error responses

pub mod error_response;
pub mod metrics;

pub use error_response::normalize_error_response;
pub use metrics::ObservabilityLayer;
