//! Outbound client for the downstream service-b endpoint.

pub mod client;

pub use client::ServiceBClient;
