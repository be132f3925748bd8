//! # Confirmation Gate
//!
//! File: cli/src/engine/gate.rs
//!
//! Blocks state-changing operations until the user agrees. With the override
//! flag set the gate opens without asking; otherwise the `Confirmer` is shown
//! the rendered target and the operation label and only an affirmative
//! answer opens it. A decline is the requested outcome, not an error.
//!
use crate::core::error::Result;
use tracing::debug;

/// What the user is asked to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest<'a> {
    /// Human-readable identifier of the target resource(s).
    pub target: &'a str,
    /// Fixed label of the operation.
    pub label: &'a str,
}

/// Source of yes/no answers.
pub trait Confirmer {
    fn confirm(&mut self, request: &ConfirmationRequest<'_>) -> Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Declined,
}

pub fn check<C>(force: bool, request: &ConfirmationRequest<'_>, confirmer: &mut C) -> Result<GateDecision>
where
    C: Confirmer + ?Sized,
{
    if force {
        debug!("Override flag set, skipping confirmation for {}", request.label);
        return Ok(GateDecision::Proceed);
    }
    if confirmer.confirm(request)? {
        Ok(GateDecision::Proceed)
    } else {
        debug!("Confirmation declined for {} on {}", request.label, request.target);
        Ok(GateDecision::Declined)
    }
}
