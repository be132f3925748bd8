//! # svcctl Config Command Group (`svcctl config`)
//!
//! File: cli/src/commands/config/mod.rs
//!
//! - `svcctl config show`: the effective settings after merging files, the
//!   selected profile and command-line overrides. The api key is never
//!   printed, only where it came from.
//! - `svcctl config path`: which configuration files were considered and
//!   which of them exist.
//!
use crate::commands::GlobalArgs;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod path;
mod show;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Show the effective settings.
    Show(show::ShowArgs),
    /// List the configuration files that were considered.
    Path(path::PathArgs),
}

pub async fn handle_config(args: ConfigArgs, globals: GlobalArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show(show_args) => show::handle_show(show_args, &globals).await,
        ConfigCommand::Path(path_args) => path::handle_path(path_args, &globals).await,
    }
}
