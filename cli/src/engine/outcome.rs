//! # Invocation Outcomes
//!
//! File: cli/src/engine/outcome.rs
//!
//! Typed results of one invocation: the auxiliary metadata that accompanies
//! a successful run, and the uniform `ErrorRecord` a failed call is turned
//! into before it reaches the output layer.
//!
use crate::core::error::SvcError;
use crate::engine::paginate::PaginationSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Side-channel facts about a completed invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuxMetadata {
    /// Token to pass as `--next-token` to resume a listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    pub pages: u32,
    pub items: usize,
    pub truncated: bool,
}

impl From<&PaginationSummary> for AuxMetadata {
    fn from(summary: &PaginationSummary) -> Self {
        AuxMetadata {
            next_token: summary.next_token.clone(),
            pages: summary.pages,
            items: summary.items,
            truncated: summary.truncated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    NameResolution,
    Service,
    Transport,
    InvalidResponse,
    Other,
}

/// A failed call, as handed to the output layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub operation: String,
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl ErrorRecord {
    pub fn from_error(operation: &str, error: &anyhow::Error) -> Self {
        let (category, status, code) = match error.downcast_ref::<SvcError>() {
            Some(SvcError::NameResolution { .. }) => (ErrorCategory::NameResolution, None, None),
            Some(SvcError::Service { status, code, .. }) => {
                (ErrorCategory::Service, Some(*status), Some(code.clone()))
            }
            Some(SvcError::Http { source }) => (
                ErrorCategory::Transport,
                source.status().map(|s| s.as_u16()),
                None,
            ),
            Some(SvcError::InvalidResponse { .. }) => (ErrorCategory::InvalidResponse, None, None),
            _ => (ErrorCategory::Other, None, None),
        };
        ErrorRecord {
            operation: operation.to_string(),
            category,
            message: format!("{:#}", error),
            status,
            code,
            occurred_at: Utc::now(),
        }
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(AuxMetadata),
    /// The user declined the confirmation; nothing was sent.
    Declined,
    Failed(ErrorRecord),
}
