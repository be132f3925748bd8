//! # svcctl Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the svcctl CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command group handlers
//! - Mapping errors to the process exit status
//!
//! ## Architecture
//!
//! - `catalog`: the declarative table of service operations
//! - `engine`: the generic invocation engine (binding, projection, pagination,
//!   confirmation)
//! - `commands`: the `op`, `ops` and `config` command groups
//! - `common`: transport and terminal UI
//! - `core`: configuration, errors, templating
//!
//! ## Examples
//!
//! ```bash
//! svcctl ops list
//! svcctl -v op list-jobs --max-items 20
//! svcctl --profile staging op copy-image --source-image-id ami-1 --source-region eu-west-1 --name c
//! ```
//!
//! Exit status is 0 on success (including a declined confirmation) and 1 on
//! any error. A failed service call has already been reported by the output
//! layer, so it is not printed again here.
//!
use clap::Parser;

mod catalog;
mod commands;
mod common;
mod core;
mod engine;

use crate::commands::GlobalArgs;
use crate::core::error::SvcError;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "svcctl",
    about = "Command-line access to cloud service operations",
    long_about = "Run the service's image, connection and job operations from the shell.\n\
                  Every operation is described by the built-in catalog; see `svcctl ops list`.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    globals: GlobalArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Run a catalog operation.
    Op(commands::op::OpArgs),
    /// Browse the operation catalog.
    Ops(commands::ops::OpsArgs),
    /// Inspect configuration.
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `op` sets up logging once its own arguments, which may carry -v, are parsed.
    if !matches!(cli.command, Commands::Op(_)) {
        crate::core::logging::init(cli.verbose);
    }

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Op(args) => commands::op::handle_op(args, cli.globals, cli.verbose).await,
        Commands::Ops(args) => commands::ops::handle_ops(args, cli.globals).await,
        Commands::Config(args) => commands::config::handle_config(args, cli.globals).await,
    };

    if let Err(e) = command_result {
        crate::core::logging::init(cli.verbose);
        tracing::debug!("Command execution failed: {:?}", e);
        let reported = e
            .downcast_ref::<SvcError>()
            .is_some_and(|se| matches!(se, SvcError::OperationFailed { .. }));
        if !reported {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
