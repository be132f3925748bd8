//! # Operation Argument Binding
//!
//! File: cli/src/commands/op/args.rs
//!
//! ## Overview
//!
//! Catalog operations are not known to the derive-based top-level parser; their
//! flags are built at runtime from the operation's `FieldSpec`s with clap's
//! builder API, then bound into an `InvocationContext`.
//!
//! ## Flags
//!
//! - one `--<flag>` per field, typed by its `FieldKind`:
//!   strings, integers (`i64`), booleans (`true|false`), string lists
//!   (repeatable and comma-separated), JSON documents, and switches;
//! - `--next-token` / `--max-items` on paginated operations;
//! - `--force` / `-f` on mutating operations;
//! - `--select PATH` on every operation;
//! - the global connection and output flags, so they may follow the operation
//!   name as well.
//!
use crate::commands::GlobalArgs;
use crate::common::ui::output::OutputFormat;
use crate::core::config::ServiceSettings;
use crate::core::error::{Result, SvcError};
use crate::engine::context::{InvocationContext, ParamValue};
use crate::engine::descriptor::{FieldKind, FieldSpec, OperationDescriptor};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;
use std::path::PathBuf;

fn parse_json(raw: &str) -> std::result::Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("not valid JSON: {e}"))
}

fn field_arg(field: &FieldSpec) -> Arg {
    let help = if field.help.is_empty() {
        format!("Sets {}.", field.path)
    } else {
        field.help.to_string()
    };
    let arg = Arg::new(field.flag)
        .long(field.flag)
        .help(help)
        .required(field.required);

    match field.kind {
        FieldKind::String => arg.value_name("TEXT").value_parser(value_parser!(String)),
        FieldKind::Integer => arg.value_name("N").value_parser(value_parser!(i64)),
        FieldKind::Boolean => arg.value_name("true|false").value_parser(value_parser!(bool)),
        FieldKind::StringList => arg
            .value_name("VALUE")
            .value_parser(value_parser!(String))
            .action(ArgAction::Append)
            .value_delimiter(','),
        FieldKind::Json => arg.value_name("JSON").value_parser(parse_json),
        FieldKind::Switch => arg.action(ArgAction::SetTrue),
    }
}

/// Builds the parser for one operation.
pub fn build_command(descriptor: &OperationDescriptor) -> Command {
    let mut command = Command::new(descriptor.command)
        .bin_name(format!("svcctl op {}", descriptor.command))
        .about(descriptor.summary)
        .after_help(format!("Service operation: {}", descriptor.operation));

    for field in descriptor.fields {
        command = command.arg(field_arg(field));
    }

    if descriptor.pagination.is_some() {
        command = command
            .arg(
                Arg::new("next-token")
                    .long("next-token")
                    .value_name("TOKEN")
                    .help("Fetch the single page starting at this token."),
            )
            .arg(
                Arg::new("max-items")
                    .long("max-items")
                    .value_name("N")
                    .value_parser(value_parser!(u64).range(1..))
                    .help("Stop after at least N items have been received."),
            );
    }
    if descriptor.is_mutating() {
        command = command.arg(
            Arg::new("force")
                .long("force")
                .short('f')
                .action(ArgAction::SetTrue)
                .help("Do not ask for confirmation."),
        );
    }

    command
        .arg(
            Arg::new("select")
                .long("select")
                .value_name("PATH")
                .help("Dotted path of the response member to print, or `*` for the whole response."),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .hide(true),
        )
        .arg(Arg::new("profile").long("profile").value_name("NAME").hide(true))
        .arg(Arg::new("endpoint").long("endpoint").value_name("URL").hide(true))
        .arg(Arg::new("region").long("region").value_name("REGION").hide(true))
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_parser(value_parser!(OutputFormat))
                .hide(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .hide(true),
        )
}

/// `-v` count given after the operation name.
pub fn verbosity(matches: &ArgMatches) -> u8 {
    matches.get_count("verbose")
}

/// Global flags given after the operation name take precedence.
pub fn merge_globals(globals: &GlobalArgs, matches: &ArgMatches) -> GlobalArgs {
    let text = |id: &str| matches.get_one::<String>(id).cloned();
    GlobalArgs {
        config: matches
            .get_one::<PathBuf>("config")
            .cloned()
            .or_else(|| globals.config.clone()),
        profile: text("profile").or_else(|| globals.profile.clone()),
        endpoint: text("endpoint").or_else(|| globals.endpoint.clone()),
        region: text("region").or_else(|| globals.region.clone()),
        output: matches.get_one::<OutputFormat>("output").copied().or(globals.output),
    }
}

fn bind_field(field: &FieldSpec, matches: &ArgMatches) -> Result<Option<ParamValue>> {
    let value = match field.kind {
        FieldKind::String => matches.get_one::<String>(field.flag).cloned().map(ParamValue::String),
        FieldKind::Integer => matches.get_one::<i64>(field.flag).copied().map(ParamValue::Integer),
        FieldKind::Boolean => matches.get_one::<bool>(field.flag).copied().map(ParamValue::Boolean),
        FieldKind::StringList => matches
            .get_many::<String>(field.flag)
            .map(|values| ParamValue::StringList(values.cloned().collect())),
        FieldKind::Json => matches.get_one::<Value>(field.flag).cloned().map(ParamValue::Json),
        FieldKind::Switch => matches.get_flag(field.flag).then_some(ParamValue::Switch),
    };

    if field.required && matches!(&value, Some(ParamValue::String(s)) if s.trim().is_empty()) {
        return Err(SvcError::InvalidParameter {
            flag: field.flag.to_string(),
            reason: "a value is required".to_string(),
        }
        .into());
    }
    Ok(value)
}

/// Binds parsed flags into the invocation context.
pub fn bind(
    descriptor: &OperationDescriptor,
    matches: &ArgMatches,
    settings: ServiceSettings,
) -> Result<InvocationContext> {
    let mut builder = InvocationContext::builder(descriptor.command, settings);
    for field in descriptor.fields {
        if let Some(value) = bind_field(field, matches)? {
            builder = builder.value(field.flag, value);
        }
    }
    if descriptor.pagination.is_some() {
        builder = builder
            .next_token(matches.get_one::<String>("next-token").cloned())
            .max_items(matches.get_one::<u64>("max-items").copied());
    }
    if descriptor.is_mutating() {
        builder = builder.force(matches.get_flag("force"));
    }
    Ok(builder
        .select(matches.get_one::<String>("select").cloned())
        .build())
}
