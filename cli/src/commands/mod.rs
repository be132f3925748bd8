//! # svcctl Command Modules (`commands`)
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Root of the command handlers. Each submodule is one top-level command group
//! with an `XArgs` struct parsed by clap and an async `handle_x` dispatcher:
//!
//! - **`op`**: runs one catalog operation (`svcctl op list-jobs ...`).
//! - **`ops`**: browses the operation catalog (`list`, `describe`).
//! - **`config`**: shows the effective configuration (`show`, `path`).
//!
//! The global connection/output flags live in `GlobalArgs`, flattened into the
//! top-level `Cli` in `main.rs` and passed to every handler.
//!
use crate::common::ui::output::OutputFormat;
use crate::core::config::{load_config, LoadedConfig, Overrides, ServiceSettings};
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Runs a single catalog operation.
pub mod op;
/// Lists and describes catalog operations.
pub mod ops;
/// Shows configuration sources and effective settings.
pub mod config;

/// Flags shared by all commands. Each can also be set from a `SVCCTL_*`
/// environment variable.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file to use instead of the user and project files.
    #[arg(long, global = true, env = "SVCCTL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Named profile from the configuration.
    #[arg(long, global = true, env = "SVCCTL_PROFILE", value_name = "NAME")]
    pub profile: Option<String>,

    /// Service endpoint URL.
    #[arg(long, global = true, env = "SVCCTL_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Service region.
    #[arg(long, global = true, env = "SVCCTL_REGION", value_name = "REGION")]
    pub region: Option<String>,

    /// Output format.
    #[arg(short, long, global = true, env = "SVCCTL_OUTPUT", value_enum)]
    pub output: Option<OutputFormat>,
}

/// Configuration and settings an invocation runs with.
#[derive(Debug, Clone)]
pub struct Session {
    pub loaded: LoadedConfig,
    pub settings: ServiceSettings,
    pub format: OutputFormat,
}

impl GlobalArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            profile: self.profile.clone(),
            endpoint: self.endpoint.clone(),
            region: self.region.clone(),
        }
    }

    /// Loads the configuration and resolves it against these flags.
    pub fn session(&self) -> Result<Session> {
        let loaded = load_config(self.config.as_deref())
            .context("Failed to load svcctl configuration")?;
        let settings = loaded.config.resolve(&self.overrides())?;
        let format = self
            .output
            .or(loaded.config.output.format)
            .unwrap_or_default();
        Ok(Session {
            loaded,
            settings,
            format,
        })
    }
}
