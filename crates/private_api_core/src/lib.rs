//! Shared private-API response primitives.
//!
//! This crate owns the proxy-integration contract returned to the fronting
//! API gateway: the response envelope, the fixed acknowledgment payload, and
//! their deterministic construction. It intentionally excludes AWS SDK and
//! Lambda runtime concerns.

pub mod contract;
