//! # Console Output
//!
//! File: cli/src/common/ui/output.rs
//!
//! ## Overview
//!
//! Writes operation results to the terminal. Records go to stdout as they
//! arrive; everything else (progress, the resume token, error records) goes
//! to stderr so stdout stays machine-readable.
//!
//! ## Formats
//!
//! - **text**: scalars on one line each; objects as `Key: value` lines with a
//!   blank line between records; nested values as compact JSON.
//! - **json**: each record pretty-printed.
//! - **json-lines**: each record as one compact JSON line.
//!
use crate::core::error::Result;
use crate::engine::invoke::OutputSink;
use crate::engine::outcome::{AuxMetadata, ErrorRecord};
use crate::engine::paginate::Progress;
use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, Stderr, Stdout, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonLines,
}

pub struct ConsoleOutput<W: Write, E: Write> {
    format: OutputFormat,
    out: W,
    err: E,
    written: usize,
}

impl ConsoleOutput<Stdout, Stderr> {
    pub fn stdio(format: OutputFormat) -> Self {
        ConsoleOutput::new(format, io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> ConsoleOutput<W, E> {
    pub fn new(format: OutputFormat, out: W, err: E) -> Self {
        ConsoleOutput {
            format,
            out,
            err,
            written: 0,
        }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Reports what the caller needs to continue a listing.
    pub fn notes(&mut self, meta: &AuxMetadata) -> Result<()> {
        if let Some(token) = &meta.next_token {
            writeln!(self.err, "Next token: {}", token)?;
            writeln!(self.err, "  (pass --next-token to fetch the following page)")?;
        }
        Ok(())
    }

    pub fn error(&mut self, record: &ErrorRecord) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.err, "Error: {}", record.message)?;
            }
            OutputFormat::Json | OutputFormat::JsonLines => {
                writeln!(self.err, "{}", serde_json::to_string(record)?)?;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}

fn text_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl<W: Write, E: Write> OutputSink for ConsoleOutput<W, E> {
    fn record(&mut self, record: &Value) -> Result<()> {
        match self.format {
            OutputFormat::Text => match record {
                Value::Object(members) => {
                    if self.written > 0 {
                        writeln!(self.out)?;
                    }
                    for (key, value) in members {
                        writeln!(self.out, "{}: {}", key, text_scalar(value))?;
                    }
                }
                other => writeln!(self.out, "{}", text_scalar(other))?,
            },
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, record)?;
                writeln!(self.out)?;
            }
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)?;
            }
        }
        self.written += 1;
        Ok(())
    }

    fn progress(&mut self, event: &Progress) {
        // Best effort.
        let _ = match event {
            Progress::Page {
                number,
                received,
                next_token,
            } => writeln!(
                self.err,
                "Page {}: {} item(s){}",
                number,
                received,
                if next_token.is_some() { ", more available" } else { "" }
            ),
            Progress::Finished {
                pages,
                items,
                truncated,
                ..
            } => writeln!(
                self.err,
                "Fetched {} item(s) in {} page(s){}",
                items,
                pages,
                if *truncated { " (stopped early after a failed page)" } else { "" }
            ),
        };
    }
}
