//! # Service Transport (`common::transport`)
//!
//! File: cli/src/common/transport/mod.rs
//!
//! ## Overview
//!
//! The seam between the invocation engine and the remote service. The engine
//! only knows the `Transport` trait: given an operation descriptor and a
//! request body, produce the response body or an error. Calls are made one at
//! a time; implementations do not retry.
//!
//! ## Architecture
//!
//! - **`http`**: `HttpTransport`, the production implementation over `reqwest`.
//! - **`resolve`**: detection of name-resolution failures in an error's
//!   source chain, so they can be reported against the configured endpoint.
//!
//! Tests use the in-memory `testing::MockTransport`.
//!
use crate::core::error::Result;
use crate::engine::descriptor::OperationDescriptor;
use serde_json::{Map, Value};
use std::future::Future;

pub mod http;
pub mod resolve;

/// Performs one service call.
pub trait Transport {
    fn call(
        &self,
        descriptor: &OperationDescriptor,
        request: &Map<String, Value>,
    ) -> impl Future<Output = Result<Value>>;
}
