//! Main API
//!
//! Client-facing relay. Each endpoint makes one HTTP call to the
//! auxiliary service, deserializes the typed body, and re-emits it with
//! this service's version tag alongside the auxiliary one.

pub mod error;
pub mod relay;
pub mod server;

/// Version tag attached to every response body.
pub const MAIN_API_VERSION: &str = "1.0.0";
