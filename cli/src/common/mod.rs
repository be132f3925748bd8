//! # svcctl Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared infrastructure used by the command handlers, kept apart from the
//! command-specific logic (`commands::`) and the core configuration and error
//! types (`core::`).
//!
//! ## Architecture
//!
//! - **`transport`**: the `Transport` trait and its HTTP implementation.
//! - **`ui`**: terminal output and the confirmation prompt.
//!
//! ```rust
//! use crate::common::transport::{http::HttpTransport, Transport};
//! use crate::common::ui::output::ConsoleOutput;
//! ```
//!

/// Service calls over HTTP.
pub mod transport;
/// Terminal output and prompts.
pub mod ui;
