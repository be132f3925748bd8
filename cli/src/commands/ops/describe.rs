use super::{kind, summary_json};
use crate::catalog;
use crate::commands::GlobalArgs;
use crate::common::ui::output::OutputFormat;
use crate::core::error::{Result, SvcError};
use crate::engine::descriptor::{OperationDescriptor, OutputShape};
use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Operation to describe (`copy-image` or `CopyImage`).
    operation: String,
}

pub async fn handle_describe(args: DescribeArgs, globals: &GlobalArgs) -> Result<()> {
    let descriptor = catalog::find(&args.operation).ok_or_else(|| SvcError::UnknownOperation {
        name: args.operation.clone(),
    })?;

    match globals.output.unwrap_or_default() {
        OutputFormat::Text => print_details(descriptor),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details_json(descriptor))?),
        OutputFormat::JsonLines => println!("{}", details_json(descriptor)),
    }
    Ok(())
}

fn output_text(shape: OutputShape) -> String {
    match shape {
        OutputShape::Nothing => "nothing".to_string(),
        OutputShape::Whole => "whole response".to_string(),
        OutputShape::Field(path) => path.to_string(),
    }
}

fn details_json(descriptor: &OperationDescriptor) -> Value {
    let mut details = summary_json(descriptor);
    details["fields"] = descriptor
        .fields
        .iter()
        .map(|f| {
            json!({
                "flag": format!("--{}", f.flag),
                "path": f.path,
                "kind": f.kind.label(),
                "required": f.required,
                "help": f.help,
            })
        })
        .collect();
    if let Some(paging) = descriptor.pagination {
        details["pagination"] = json!({
            "input_token": paging.input_token,
            "output_token": paging.output_token,
            "limit": paging.limit,
            "items": paging.items,
            "max_page_size": paging.max_page_size,
        });
    }
    if let Some(confirmation) = descriptor.confirmation {
        details["confirmation"] = json!({
            "label": confirmation.label,
            "target": confirmation.target,
        });
    }
    details["output"] = Value::String(output_text(descriptor.output));
    details
}

fn print_details(descriptor: &OperationDescriptor) {
    println!("{} ({})", descriptor.command, descriptor.operation);
    println!("  {}", descriptor.summary);
    println!("  Kind:   {}", kind(descriptor));
    println!("  Output: {}", output_text(descriptor.output));

    println!("\nParameters:");
    if descriptor.fields.is_empty() {
        println!("  (none)");
    }
    let width = descriptor
        .fields
        .iter()
        .map(|f| f.flag.len() + 2)
        .max()
        .unwrap_or(10)
        .max(10);
    for field in descriptor.fields {
        println!(
            "  {:<width$}  {:<12} {:<9} {}",
            format!("--{}", field.flag),
            field.kind.label(),
            if field.required { "required" } else { "" },
            field.path,
            width = width
        );
    }

    if let Some(paging) = descriptor.pagination {
        println!("\nPagination:");
        println!("  Items:         {}", paging.items);
        println!("  Token:         {} -> {}", paging.output_token, paging.input_token);
        println!("  Page size:     {} (at most {})", paging.limit, paging.max_page_size);
        println!("  Flags:         --next-token, --max-items");
    }
    if let Some(confirmation) = descriptor.confirmation {
        println!("\nConfirmation:");
        println!("  Label:         {}", confirmation.label);
        println!("  Target:        {}", confirmation.target);
        println!("  Skip with:     --force");
    }
}
