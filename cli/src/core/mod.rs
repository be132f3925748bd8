//! # svcctl Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: configuration loading, merging, validation and resolution into
//!   per-invocation service settings
//! - `error`: the `SvcError` enum and the crate-wide `Result` alias
//! - `logging`: the `tracing` subscriber
//! - `templating`: Tera rendering of confirmation targets
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{SvcError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
pub mod logging;
pub mod templating;
