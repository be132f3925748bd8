//! # Invocation Context
//!
//! File: cli/src/engine/context.rs
//!
//! An immutable snapshot of everything bound for one command execution:
//! operation values keyed by flag, the paging controls, the override flag,
//! the output selector and the resolved service settings. It is assembled
//! once with `ContextBuilder` and only read afterwards.
//!
use crate::core::config::ServiceSettings;
use serde_json::Value;
use std::collections::BTreeMap;

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    StringList(Vec<String>),
    Json(Value),
    Switch,
}

impl ParamValue {
    /// Wire representation in the request body.
    pub fn to_json(&self) -> Value {
        match self {
            ParamValue::String(s) => Value::String(s.clone()),
            ParamValue::Integer(i) => Value::from(*i),
            ParamValue::Boolean(b) => Value::Bool(*b),
            ParamValue::StringList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            ParamValue::Json(v) => v.clone(),
            ParamValue::Switch => Value::Bool(true),
        }
    }

    /// Flat text used when the value names a confirmation target.
    pub fn display_text(&self) -> String {
        match self {
            ParamValue::String(s) => s.clone(),
            ParamValue::Integer(i) => i.to_string(),
            ParamValue::Boolean(b) => b.to_string(),
            ParamValue::StringList(items) => items.join(", "),
            ParamValue::Json(v) => v.to_string(),
            ParamValue::Switch => "true".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InvocationContext {
    command: String,
    values: BTreeMap<String, ParamValue>,
    next_token: Option<String>,
    max_items: Option<u64>,
    force: bool,
    select: Option<String>,
    settings: ServiceSettings,
}

impl InvocationContext {
    pub fn builder(command: impl Into<String>, settings: ServiceSettings) -> ContextBuilder {
        ContextBuilder {
            context: InvocationContext {
                command: command.into(),
                values: BTreeMap::new(),
                next_token: None,
                max_items: None,
                force: false,
                select: None,
                settings,
            },
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn value(&self, flag: &str) -> Option<&ParamValue> {
        self.values.get(flag)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Caller-supplied starting token. Empty strings count as absent.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn max_items(&self) -> Option<u64> {
        self.max_items
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn select(&self) -> Option<&str> {
        self.select.as_deref()
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

/// Populates an `InvocationContext`; `build` hands out the frozen snapshot.
#[derive(Debug)]
pub struct ContextBuilder {
    context: InvocationContext,
}

impl ContextBuilder {
    pub fn value(mut self, flag: impl Into<String>, value: ParamValue) -> Self {
        self.context.values.insert(flag.into(), value);
        self
    }

    pub fn next_token(mut self, token: Option<String>) -> Self {
        self.context.next_token = token;
        self
    }

    pub fn max_items(mut self, max_items: Option<u64>) -> Self {
        self.context.max_items = max_items;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.context.force = force;
        self
    }

    pub fn select(mut self, select: Option<String>) -> Self {
        self.context.select = select;
        self
    }

    pub fn build(self) -> InvocationContext {
        self.context
    }
}
