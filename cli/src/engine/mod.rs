//! # svcctl Invocation Engine (`engine`)
//!
//! File: cli/src/engine/mod.rs
//!
//! ## Overview
//!
//! One data-driven engine runs every catalog operation. Operations differ only
//! in their `OperationDescriptor`; the engine binds nothing itself and knows
//! nothing about particular operations.
//!
//! ## Architecture
//!
//! - **`descriptor`**: the static description of an operation (fields, paging,
//!   confirmation, output shape).
//! - **`context`**: the immutable `InvocationContext` for one execution.
//! - **`projection`**: context → request body, response → output records.
//! - **`paginate`**: the pagination controller (manual, capped, automatic).
//! - **`gate`**: the confirmation gate for state-changing operations.
//! - **`outcome`**: auxiliary metadata and uniform error records.
//! - **`invoke`**: ties the pieces together over a `Transport`.
//!
pub mod context;
pub mod descriptor;
pub mod gate;
pub mod invoke;
pub mod outcome;
pub mod paginate;
pub mod projection;
