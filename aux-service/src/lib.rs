//! Auxiliary Service
//!
//! Leaf service holding the AWS S3 and SSM clients. Exposes three
//! read-only endpoints, each making exactly one upstream AWS call.

pub mod aws;
pub mod error;
pub mod server;

/// Version tag attached to every response body.
pub const AUX_SERVICE_VERSION: &str = "1.0.0";
