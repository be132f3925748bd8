use super::{kind, summary_json};
use crate::catalog;
use crate::commands::GlobalArgs;
use crate::common::ui::output::OutputFormat;
use crate::core::error::Result;
use crate::engine::descriptor::OperationDescriptor;
use clap::Parser;
use serde_json::Value;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only read-only operations.
    #[arg(long, conflicts_with = "mutating")]
    read_only: bool,

    /// Only state-changing operations.
    #[arg(long)]
    mutating: bool,
}

pub async fn handle_list(args: ListArgs, globals: &GlobalArgs) -> Result<()> {
    info!("Handling ops list command...");
    let operations: Vec<&OperationDescriptor> = catalog::all()
        .filter(|d| !args.read_only || !d.is_mutating())
        .filter(|d| !args.mutating || d.is_mutating())
        .collect();

    match globals.output.unwrap_or_default() {
        OutputFormat::Text => print_table(&operations),
        OutputFormat::Json => {
            let all: Vec<Value> = operations.iter().map(|d| summary_json(d)).collect();
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
        OutputFormat::JsonLines => {
            for descriptor in &operations {
                println!("{}", summary_json(descriptor));
            }
        }
    }
    Ok(())
}

fn print_table(operations: &[&OperationDescriptor]) {
    if operations.is_empty() {
        println!("No matching operations.");
        return;
    }
    let width = operations
        .iter()
        .map(|d| d.command.len())
        .max()
        .unwrap_or(10)
        .clamp(10, 30);

    println!("{:<width$} | {:<8} | Summary", "Operation", "Kind", width = width);
    println!("{:-<width$}-+-{:-<8}-+-{:-<40}", "", "", "", width = width);
    for descriptor in operations {
        let paging = if descriptor.pagination.is_some() { " (paginated)" } else { "" };
        println!(
            "{:<width$} | {:<8} | {}{}",
            descriptor.command,
            kind(descriptor),
            descriptor.summary,
            paging,
            width = width
        );
    }
    println!("\n{} operation(s).", operations.len());
    println!("Use 'svcctl ops describe <Operation>' for details or 'svcctl op <Operation> --help' for flags.");
}
