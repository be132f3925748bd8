//! # svcctl Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout svcctl. Domain errors
//! are variants of `SvcError` (derived with `thiserror`); everything travels as
//! `anyhow::Error` so call sites can attach context with `.context(..)`.
//!
//! ## Architecture
//!
//! - `SvcError`: the domain error enum.
//! - `Result<T>`: alias for `anyhow::Result<T>`.
//!
//! Code that needs to react to a specific failure (the invocation engine when
//! it classifies transport failures into error records, `main` when it decides
//! whether an error was already rendered) uses `downcast_ref::<SvcError>()`:
//!
//! ```rust
//! match result {
//!     Err(e) if e.downcast_ref::<SvcError>().is_some_and(|se| matches!(se, SvcError::NameResolution { .. })) => {
//!         eprintln!("Check the configured endpoint.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for svcctl.
#[derive(Error, Debug)]
pub enum SvcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown operation '{name}'. Run `svcctl ops list` to see available operations.")]
    UnknownOperation { name: String },

    #[error("Invalid value for --{flag}: {reason}")]
    InvalidParameter { flag: String, reason: String },

    #[error("HTTP request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// The endpoint host could not be resolved. Raised instead of `Http` when
    /// a DNS failure is found in the source chain.
    #[error("Name resolution failed for the configured endpoint '{endpoint}'. Check --endpoint, --region or the active profile.")]
    NameResolution {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} failed with HTTP {status} ({code}): {message}")]
    Service {
        operation: String,
        status: u16,
        code: String,
        message: String,
    },

    #[error("Invalid response from {operation}: {reason}")]
    InvalidResponse { operation: String, reason: String },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Confirmation prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    /// The operation failed and its error record has already been written to
    /// the output layer.
    #[error("Operation '{operation}' failed.")]
    OperationFailed { operation: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
