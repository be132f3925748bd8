//! # svcctl Template Rendering
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Renders the target identifier shown by the confirmation gate. Each
//! mutating operation's descriptor carries a Tera template such as
//! `"{{ source_image_id }} ({{ source_region }})"`; it is rendered over the
//! invocation's values.
//!
//! ## Context Variables
//!
//! - every field of the operation, under its flag with `-` replaced by `_`
//!   (absent fields render as an empty string, lists are comma-joined)
//! - `command` and `operation`
//!
use crate::core::error::{SvcError, Result};
use crate::engine::context::InvocationContext;
use crate::engine::descriptor::OperationDescriptor;
use anyhow::Context as _;
use tera::{Context, Tera};
use tracing::debug;

pub fn render_target(
    template: &str,
    descriptor: &OperationDescriptor,
    invocation: &InvocationContext,
) -> Result<String> {
    let mut context = Context::new();
    context.insert("command", descriptor.command);
    context.insert("operation", descriptor.operation);
    for field in descriptor.fields {
        let text = invocation
            .value(field.flag)
            .map(|v| v.display_text())
            .unwrap_or_default();
        context.insert(field.template_key(), &text);
    }

    let rendered = Tera::one_off(template, &context, false)
        .map_err(|e| SvcError::Template { source: e })
        .with_context(|| format!("Failed to render confirmation target for {}", descriptor.command))?;
    let rendered = rendered.trim().to_string();
    debug!("Rendered confirmation target: {}", rendered);
    Ok(rendered)
}
