//! service-a: HTTP passthrough microservice.
//!
//! Exposes one endpoint, `GET /service-a/call-service-b`, which issues a
//! single outbound GET to service-b's hello endpoint and relays the response
//! body to the caller verbatim as plain text. There is no retry, no caching,
//! and no request transformation: a downstream fault surfaces as one generic
//! 502 response.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`downstream`]: Client for the service-b endpoint
//! - [`api`]: HTTP API for passthrough/health/metrics
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod downstream;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
