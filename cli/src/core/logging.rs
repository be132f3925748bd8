//! # svcctl Logging Setup
//!
//! File: cli/src/core/logging.rs
//!
//! Installs the global `tracing` subscriber: compact lines on stderr,
//! filtered by `RUST_LOG` when set and by the `-v` count otherwise.
//!
//! `svcctl op` installs it only after the operation's own arguments are
//! parsed, so `-v` is honoured on either side of the operation name.
//!
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for a `-v` count.
pub fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(verbosity)));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
