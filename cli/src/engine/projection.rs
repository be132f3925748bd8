//! # Request and Response Projection
//!
//! File: cli/src/engine/projection.rs
//!
//! ## Overview
//!
//! Moves values between the invocation context, the request body and the
//! output records:
//!
//! - `project_request`: copies every present context value to its dotted
//!   `path` in a JSON object. Intermediate objects are created only while
//!   inserting a present value, so a sub-structure whose members are all
//!   absent never appears in the request, not even as `{}`. A JSON `null`
//!   counts as absent.
//! - `apply_page`: overlays the continuation token and page-size hint of a
//!   paginated operation on a copy of the base request.
//! - `project_output`: picks the output records out of a response according
//!   to the descriptor's `OutputShape` or a caller-supplied selector.
//!
use crate::engine::context::InvocationContext;
use crate::engine::descriptor::{OperationDescriptor, OutputShape, PaginationSpec};
use serde_json::{Map, Value};

/// Selector meaning "the whole response".
pub const SELECT_ALL: &str = "*";

pub fn project_request(
    descriptor: &OperationDescriptor,
    context: &InvocationContext,
) -> Map<String, Value> {
    let mut request = Map::new();
    for field in descriptor.fields {
        let Some(value) = context
            .value(field.flag)
            .map(|v| v.to_json())
            .filter(|v| !v.is_null())
        else {
            continue;
        };
        let segments: Vec<&str> = field.path_segments().collect();
        insert_at(&mut request, &segments, value);
    }
    request
}

pub fn apply_page(
    request: &mut Map<String, Value>,
    paging: &PaginationSpec,
    token: Option<&str>,
    page_size: Option<u32>,
) {
    if let Some(token) = token {
        let segments: Vec<&str> = paging.input_token.split('.').collect();
        insert_at(request, &segments, Value::String(token.to_string()));
    }
    if let Some(size) = page_size {
        let segments: Vec<&str> = paging.limit.split('.').collect();
        insert_at(request, &segments, Value::from(size));
    }
}

fn insert_at(target: &mut Map<String, Value>, path: &[&str], value: Value) {
    match path {
        [] => {}
        [last] => {
            target.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let child = target
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(map) = child {
                insert_at(map, rest, value);
            }
        }
    }
}

/// Borrows the value at a dotted path.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.get(segment))
}

fn take_path(value: &mut Value, path: &str) -> Option<Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get_mut(segment)?;
    }
    Some(current.take())
}

/// Output records for one response. Arrays are flattened into one record per
/// element; a missing or `null` member yields no records.
pub fn project_output(mut response: Value, shape: OutputShape, select: Option<&str>) -> Vec<Value> {
    let picked = match select {
        Some(SELECT_ALL) => Some(response),
        Some(path) => take_path(&mut response, path),
        None => match shape {
            OutputShape::Whole => Some(response),
            OutputShape::Field(path) => take_path(&mut response, path),
            OutputShape::Nothing => None,
        },
    };
    match picked {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => vec![other],
    }
}

/// Takes the items out of one page.
pub fn page_items(page: &mut Value, paging: &PaginationSpec) -> Vec<Value> {
    match take_path(page, paging.items) {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => Vec::new(),
        Some(other) => vec![other],
    }
}

/// Number of items a page carries, without consuming them.
pub fn item_count(page: &Value, paging: &PaginationSpec) -> usize {
    match lookup(page, paging.items) {
        Some(Value::Array(items)) => items.len(),
        None | Some(Value::Null) => 0,
        Some(_) => 1,
    }
}

/// Next token reported by a page; empty strings count as absent.
pub fn page_token(page: &Value, paging: &PaginationSpec) -> Option<String> {
    lookup(page, paging.output_token)
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
