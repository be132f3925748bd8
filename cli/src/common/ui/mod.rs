//! # svcctl Terminal UI (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Everything that talks to the user's terminal:
//!
//! - **`output`**: `OutputFormat` and `ConsoleOutput`, the output layer that
//!   renders records, progress, resume tokens and error records.
//! - **`prompt`**: `TerminalConfirmer`, the `[y/N]` prompt behind the
//!   confirmation gate.
//!
pub mod output;
pub mod prompt;
