//! AWS-oriented runtime integration for the private-API acknowledgment
//! function.
//!
//! This crate owns the Lambda-facing pieces: the invocation handler and the
//! runtime entry-point binary. The response contract itself lives in
//! `private_api_core`.

pub mod handlers;
