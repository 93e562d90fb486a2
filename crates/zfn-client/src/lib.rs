//! HTTP client for the ZFN academic portal
//!
//! This crate provides the reqwest-backed implementation of
//! [`zfn_core::PortalApi`]. Envelopes are decoded into typed records here,
//! at the boundary; nothing downstream sees raw JSON.

pub mod http;

// Re-exports
pub use http::HttpPortalClient;
