//! # svcctl Op Command (`svcctl op`)
//!
//! File: cli/src/commands/op/mod.rs
//!
//! ## Overview
//!
//! Runs one operation from the catalog:
//!
//! ```bash
//! svcctl op list-connections --name-prefix prod- --max-items 50
//! svcctl op copy-image --source-image-id ami-123 --source-region eu-west-1 --name copy
//! svcctl op delete-job --job-name nightly --force
//! svcctl op get-job --help
//! ```
//!
//! ## Workflow
//!
//! 1. Look the operation up in the catalog (by command or operation name).
//! 2. Parse the remaining arguments with the operation's generated parser
//!    (`args::build_command`). Parse errors and `--help` exit through clap.
//! 3. Load configuration and resolve the service settings.
//! 4. Bind the invocation context and hand it to the engine with the HTTP
//!    transport, the console output and the terminal prompt.
//! 5. Report the outcome: resume token on completion, the error record on
//!    failure (exit status 1), nothing on a declined confirmation.
//!
use crate::catalog;
use crate::commands::GlobalArgs;
use crate::common::transport::http::HttpTransport;
use crate::common::ui::output::ConsoleOutput;
use crate::common::ui::prompt::TerminalConfirmer;
use crate::core::error::{Result, SvcError};
use crate::core::logging;
use crate::engine::invoke::invoke;
use crate::engine::outcome::Outcome;
use clap::Parser;
use tracing::{debug, info};

mod args;

const USAGE: &str = "\
Usage: svcctl op <OPERATION> [ARGS]...

Runs one catalog operation. Operations are listed by `svcctl ops list`;
`svcctl op <OPERATION> --help` shows the flags of one operation.";

#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
pub struct OpArgs {
    /// Operation to run (`list-jobs` or `ListJobs`) followed by its flags.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "OPERATION [ARGS]"
    )]
    args: Vec<String>,
}

pub async fn handle_op(args: OpArgs, globals: GlobalArgs, verbose: u8) -> Result<()> {
    let mut argv = args.args.into_iter();
    let Some(name) = argv.next().filter(|a| a != "--help" && a != "-h") else {
        println!("{USAGE}");
        return Ok(());
    };
    let descriptor = catalog::find(&name).ok_or_else(|| SvcError::UnknownOperation {
        name: name.clone(),
    })?;

    let argv = std::iter::once(descriptor.command.to_string()).chain(argv);
    let matches = match args::build_command(descriptor).try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(e) => e.exit(),
    };
    logging::init(verbose.saturating_add(args::verbosity(&matches)));
    debug!("Resolved '{}' to {}", name, descriptor.operation);
    let session = args::merge_globals(&globals, &matches).session()?;
    info!(
        "Running {} against {} ({})",
        descriptor.operation, session.settings.endpoint, session.settings.region
    );
    let context = args::bind(descriptor, &matches, session.settings.clone())?;

    let transport = HttpTransport::new(&session.settings)?;
    let mut output = ConsoleOutput::stdio(session.format);
    let mut confirmer = TerminalConfirmer::stdio();

    match invoke(&transport, descriptor, &context, &mut confirmer, &mut output).await? {
        Outcome::Completed(meta) => {
            debug!(?meta, "Invocation completed");
            output.notes(&meta)?;
            Ok(())
        }
        Outcome::Declined => Ok(()),
        Outcome::Failed(record) => {
            output.error(&record)?;
            Err(SvcError::OperationFailed {
                operation: record.operation,
            }
            .into())
        }
    }
}
