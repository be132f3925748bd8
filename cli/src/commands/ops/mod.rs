//! # svcctl Ops Command Group (`svcctl ops`)
//!
//! File: cli/src/commands/ops/mod.rs
//!
//! Browse the operation catalog without contacting the service:
//!
//! - `svcctl ops list`: every operation with its kind and summary.
//! - `svcctl ops describe <OPERATION>`: fields, paging and confirmation details.
//!
//! Both honour `--output json` / `--output json-lines`. The configuration is
//! not loaded, so a broken config file never blocks catalog browsing.
//!
use crate::commands::GlobalArgs;
use crate::core::error::Result;
use crate::engine::descriptor::OperationDescriptor;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

mod describe;
mod list;

#[derive(Parser, Debug)]
pub struct OpsArgs {
    #[command(subcommand)]
    command: OpsCommand,
}

#[derive(Subcommand, Debug)]
enum OpsCommand {
    /// List catalog operations.
    List(list::ListArgs),
    /// Show the parameters and behavior of one operation.
    Describe(describe::DescribeArgs),
}

pub async fn handle_ops(args: OpsArgs, globals: GlobalArgs) -> Result<()> {
    match args.command {
        OpsCommand::List(list_args) => list::handle_list(list_args, &globals).await,
        OpsCommand::Describe(describe_args) => describe::handle_describe(describe_args, &globals).await,
    }
}

/// "read" or "mutating".
fn kind(descriptor: &OperationDescriptor) -> &'static str {
    if descriptor.is_mutating() {
        "mutating"
    } else {
        "read"
    }
}

/// JSON summary of an operation, shared by `list` and `describe`.
fn summary_json(descriptor: &OperationDescriptor) -> Value {
    json!({
        "command": descriptor.command,
        "operation": descriptor.operation,
        "kind": kind(descriptor),
        "paginated": descriptor.pagination.is_some(),
        "summary": descriptor.summary,
    })
}
